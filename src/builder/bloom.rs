//! Builder for bloom filters.
//!
//! # Type-State Pattern
//!
//! A filter needs a size before it can be built. The size comes either
//! straight from a bit count or from an expected item count plus a target
//! false positive rate:
//!
//! ```text
//! Initial ──.bit_count(m)──────────────────────────────▶ Complete ──.build()──▶ BloomFilter
//!    │                                                    ▲
//!    └──.expected_items(n)──▶ WithItems ──.false_positive_rate(p)──┘
//! ```
//!
//! Hash functions can be supplied in any state. Sizing from items and rate
//! also yields [`recommended_hash_count`](BloomFilterBuilder::recommended_hash_count),
//! the number of functions that minimizes false positives for that size.
//!
//! # Examples
//!
//! ```
//! use chainbloom::builder::BloomFilterBuilder;
//! use chainbloom::hash::HashFn;
//!
//! let h1: HashFn = |s| s.bytes().fold(5381u64, |h, b| h.wrapping_mul(33) ^ u64::from(b));
//! let h2: HashFn = |s| s.bytes().fold(0u64, |h, b| h.wrapping_mul(131).wrapping_add(u64::from(b)));
//!
//! let mut filter = BloomFilterBuilder::new()
//!     .expected_items(1_000)
//!     .false_positive_rate(0.01)
//!     .hash_function(h1)
//!     .hash_function(h2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.bit_count(), 9586);
//! filter.add("hello");
//! assert!(filter.check("hello"));
//! ```

use crate::core::params;
use crate::error::{ChainBloomError, Result};
use crate::filters::BloomFilter;
use crate::hash::{HashFn, HashFunction};
use std::marker::PhantomData;

/// Type-state marker: no size given yet.
pub struct Initial;

/// Type-state marker: expected item count given, rate still missing.
pub struct WithItems;

/// Type-state marker: size fully determined.
pub struct Complete;

/// Builder for [`BloomFilter`] with compile-time sizing guarantees.
///
/// # Type Parameters
///
/// - `State`: [`Initial`], [`WithItems`] or [`Complete`]
/// - `H`: Hash function type, [`HashFn`] by default
pub struct BloomFilterBuilder<State, H = HashFn> {
    bit_count: Option<usize>,
    expected_items: Option<usize>,
    fp_rate: Option<f64>,
    hash_functions: Vec<H>,
    _state: PhantomData<State>,
}

impl<H> BloomFilterBuilder<Initial, H> {
    /// Start a builder with no size and no hash functions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bit_count: None,
            expected_items: None,
            fp_rate: None,
            hash_functions: Vec::new(),
            _state: PhantomData,
        }
    }

    /// Size the filter directly to `bits` bits.
    ///
    /// Zero is rejected by [`build`](BloomFilterBuilder::build).
    #[must_use]
    pub fn bit_count(self, bits: usize) -> BloomFilterBuilder<Complete, H> {
        BloomFilterBuilder {
            bit_count: Some(bits),
            ..self.transition()
        }
    }

    /// Set the number of distinct items the filter should hold.
    #[must_use]
    pub fn expected_items(self, items: usize) -> BloomFilterBuilder<WithItems, H> {
        BloomFilterBuilder {
            expected_items: Some(items),
            ..self.transition()
        }
    }
}

impl<H> Default for BloomFilterBuilder<Initial, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> BloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate, in (0, 1).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, H> {
        BloomFilterBuilder {
            fp_rate: Some(fp_rate),
            ..self.transition()
        }
    }
}

impl<State, H> BloomFilterBuilder<State, H> {
    fn transition<Next>(self) -> BloomFilterBuilder<Next, H> {
        BloomFilterBuilder {
            bit_count: self.bit_count,
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            hash_functions: self.hash_functions,
            _state: PhantomData,
        }
    }

    /// Append one hash function. Order is kept.
    #[must_use]
    pub fn hash_function(mut self, hash_function: H) -> Self {
        self.hash_functions.push(hash_function);
        self
    }

    /// Append several hash functions, in iteration order.
    #[must_use]
    pub fn hash_functions<I>(mut self, hash_functions: I) -> Self
    where
        I: IntoIterator<Item = H>,
    {
        self.hash_functions.extend(hash_functions);
        self
    }
}

impl<H> BloomFilterBuilder<Complete, H> {
    /// Bit count the filter will get.
    ///
    /// # Errors
    ///
    /// - [`ChainBloomError::InvalidFilterSize`] for an explicit size of 0
    /// - the errors of [`params::optimal_bit_count`] when sizing from items
    pub fn resolved_bit_count(&self) -> Result<usize> {
        match (self.bit_count, self.expected_items, self.fp_rate) {
            (Some(0), _, _) => Err(ChainBloomError::invalid_filter_size(0)),
            (Some(bits), _, _) => Ok(bits),
            (None, Some(items), Some(fp_rate)) => params::optimal_bit_count(items, fp_rate),
            _ => Err(ChainBloomError::invalid_parameters(
                "filter size was never set",
            )),
        }
    }

    /// Number of hash functions that minimizes false positives for the
    /// resolved size and expected item count.
    ///
    /// # Errors
    ///
    /// Returns [`ChainBloomError::InvalidParameters`] when the builder was
    /// sized by bit count alone, since there is no item count to optimize
    /// for, or the sizing error of
    /// [`resolved_bit_count`](Self::resolved_bit_count).
    ///
    /// # Examples
    ///
    /// ```
    /// use chainbloom::builder::bloom::{BloomFilterBuilder, Initial};
    /// use chainbloom::hash::HashFn;
    ///
    /// let builder = BloomFilterBuilder::<Initial, HashFn>::new()
    ///     .expected_items(1_000)
    ///     .false_positive_rate(0.01);
    /// assert_eq!(builder.recommended_hash_count().unwrap(), 7);
    /// ```
    pub fn recommended_hash_count(&self) -> Result<usize> {
        let bits = self.resolved_bit_count()?;
        let items = self.expected_items.ok_or_else(|| {
            ChainBloomError::invalid_parameters(
                "no expected item count to optimize the hash count for",
            )
        })?;
        params::optimal_hash_count(bits, items)
    }
}

impl<H: HashFunction> BloomFilterBuilder<Complete, H> {
    /// Build the filter.
    ///
    /// A filter with no hash functions is allowed; every check on it
    /// returns `true`.
    ///
    /// # Errors
    ///
    /// The errors of [`resolved_bit_count`](Self::resolved_bit_count).
    pub fn build(self) -> Result<BloomFilter<H>> {
        let bits = self.resolved_bit_count()?;

        if self.hash_functions.is_empty() {
            tracing::warn!(bits, "building bloom filter without hash functions");
        } else if let Ok(recommended) = self.recommended_hash_count() {
            if recommended != self.hash_functions.len() {
                tracing::debug!(
                    given = self.hash_functions.len(),
                    recommended,
                    "hash function count differs from optimum"
                );
            }
        }

        BloomFilter::with_hash_functions(bits, self.hash_functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h1(s: &str) -> u64 {
        s.len() as u64
    }

    fn h2(s: &str) -> u64 {
        s.len() as u64 * 7
    }

    #[test]
    fn test_build_by_bit_count() {
        let filter = BloomFilterBuilder::new()
            .bit_count(16)
            .hash_function(h1 as HashFn)
            .hash_function(h2 as HashFn)
            .build()
            .unwrap();
        assert_eq!(filter.bit_count(), 16);
        assert_eq!(filter.hash_count(), 2);
    }

    #[test]
    fn test_functions_before_sizing() {
        let filter = BloomFilterBuilder::new()
            .hash_functions([h1 as HashFn, h2 as HashFn])
            .bit_count(32)
            .build()
            .unwrap();
        assert_eq!(filter.hash_count(), 2);
    }

    #[test]
    fn test_build_by_items_and_rate() {
        let builder = BloomFilterBuilder::new()
            .expected_items(1_000)
            .false_positive_rate(0.01)
            .hash_function(h1 as HashFn);
        assert_eq!(builder.resolved_bit_count().unwrap(), 9586);
        assert_eq!(builder.recommended_hash_count().unwrap(), 7);

        let filter = builder.build().unwrap();
        assert_eq!(filter.bit_count(), 9586);
    }

    #[test]
    fn test_zero_bits_rejected() {
        let result = BloomFilterBuilder::<Initial, HashFn>::new().bit_count(0).build();
        assert_eq!(result.unwrap_err(), ChainBloomError::invalid_filter_size(0));
    }

    #[test]
    fn test_bad_rate_rejected() {
        let result = BloomFilterBuilder::<Initial, HashFn>::new()
            .expected_items(100)
            .false_positive_rate(1.5)
            .build();
        assert!(matches!(
            result,
            Err(ChainBloomError::FalsePositiveRateOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_zero_items_rejected() {
        let result = BloomFilterBuilder::<Initial, HashFn>::new()
            .expected_items(0)
            .false_positive_rate(0.01)
            .build();
        assert!(matches!(
            result,
            Err(ChainBloomError::InvalidItemCount { .. })
        ));
    }

    #[test]
    fn test_no_recommendation_without_items() {
        let builder = BloomFilterBuilder::<Initial, HashFn>::new().bit_count(64);
        assert!(builder.recommended_hash_count().is_err());
    }

    #[test]
    fn test_zero_functions_allowed() {
        let filter = BloomFilterBuilder::<Initial, HashFn>::new()
            .bit_count(8)
            .build()
            .unwrap();
        assert_eq!(filter.hash_count(), 0);
        assert!(filter.check("anything"));
    }
}
