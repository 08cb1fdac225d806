//! Sizing formulas for bloom filters.
//!
//! The filter itself is built from an explicit bit count and an explicit list
//! of hash functions, so none of this is required to use it. These formulas
//! answer the planning questions around it: how many bits for `n` keys at a
//! target false positive rate, how many functions to supply, and what false
//! positive rate to expect after `n` adds.
//!
//! # Mathematical Background
//!
//! Given `n` keys, `m` bits and `k` independent, uniform hash functions:
//!
//! - `m = -n × ln(ε) / (ln 2)²` (bits for a target rate `ε`)
//! - `k = (m/n) × ln 2` (functions minimizing the rate)
//! - `p = (1 - e^(-kn/m))^k` (expected false positive rate)
//!
//! Caller-supplied functions are rarely truly independent, so measured rates
//! only *track* `p`; the integration tests check that they stay close.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{ChainBloomError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Smallest bit count [`optimal_bit_count`] will recommend.
pub const MIN_FILTER_SIZE: usize = 8;

/// Largest hash function count [`optimal_hash_count`] will recommend.
pub const MAX_RECOMMENDED_HASH_FUNCTIONS: usize = 32;

/// Calculate the number of bits needed for `n` keys at `fp_rate`.
///
/// Implements `m = -n × ln(ε) / (ln 2)²`, rounded up, never below
/// [`MIN_FILTER_SIZE`].
///
/// # Errors
///
/// - [`ChainBloomError::InvalidItemCount`] if `n == 0`
/// - [`ChainBloomError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
/// - [`ChainBloomError::InvalidParameters`] if the result does not fit in memory
///
/// # Examples
///
/// ```
/// use chainbloom::core::params::optimal_bit_count;
///
/// let bits = optimal_bit_count(1000, 0.01).unwrap();
/// assert!(bits >= 9585 && bits <= 9586);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(ChainBloomError::invalid_item_count(n));
    }

    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(ChainBloomError::fp_rate_out_of_bounds(fp_rate));
    }

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    if m > (usize::MAX / 2) as f64 {
        return Err(ChainBloomError::invalid_parameters(format!(
            "calculated filter size {:.0} bits exceeds reasonable bounds",
            m
        )));
    }

    Ok((m as usize).max(MIN_FILTER_SIZE))
}

/// Calculate the number of hash functions minimizing the false positive
/// rate for `m` bits and `n` keys.
///
/// Implements `k = (m/n) × ln 2`, rounded, clamped to
/// `1..=MAX_RECOMMENDED_HASH_FUNCTIONS`.
///
/// # Errors
///
/// - [`ChainBloomError::InvalidFilterSize`] if `m == 0`
/// - [`ChainBloomError::InvalidItemCount`] if `n == 0`
///
/// # Examples
///
/// ```
/// use chainbloom::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9585, 1000).unwrap(), 7);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(ChainBloomError::invalid_filter_size(m));
    }

    if n == 0 {
        return Err(ChainBloomError::invalid_item_count(n));
    }

    let k = ((m as f64 / n as f64) * LN_2).round() as usize;
    Ok(k.clamp(1, MAX_RECOMMENDED_HASH_FUNCTIONS))
}

/// Expected false positive rate after `n` distinct adds into `m` bits with
/// `k` hash functions.
///
/// Implements `p = (1 - e^(-kn/m))^k`. With `k == 0` every check is
/// vacuously positive, so the rate is 1. With `n == 0` (and `k > 0`) no bit
/// is set and the rate is 0.
///
/// # Errors
///
/// Returns [`ChainBloomError::InvalidFilterSize`] if `m == 0`.
///
/// # Examples
///
/// ```
/// use chainbloom::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9585, 1000, 7).unwrap();
/// assert!((fp - 0.01).abs() < 0.001);
/// assert_eq!(expected_fp_rate(64, 10, 0).unwrap(), 1.0);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(ChainBloomError::invalid_filter_size(m));
    }

    if k == 0 {
        return Ok(1.0);
    }

    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits needed per key for `fp_rate` with optimal parameters,
/// `-ln(ε) / (ln 2)²`.
///
/// # Errors
///
/// Returns an error if `fp_rate` is not in range (0, 1).
///
/// ```
/// use chainbloom::core::params::bits_per_element;
///
/// assert!((bits_per_element(0.01).unwrap() - 9.6).abs() < 0.1);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(ChainBloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(-fp_rate.ln() / LN2_SQUARED)
}
