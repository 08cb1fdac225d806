//! Error types for chainbloom operations.
//!
//! Errors only arise while *constructing* a structure: a filter with no bits,
//! a map with too few buckets, or sizing parameters that make no sense.
//! Once a filter or map exists, none of its operations fail:
//!
//! - a missing key is an ordinary `None` / no-op, not an error;
//! - a false positive from [`BloomFilter::check`](crate::BloomFilter::check) is
//!   an inherent property of the structure, not an error;
//! - running out of memory aborts the process through the global allocator.
//!
//! # Error Propagation
//!
//! ```
//! use chainbloom::{BloomFilter, ChainBloomError, Result};
//!
//! fn length_filter(bits: usize) -> Result<BloomFilter> {
//!     let by_len: fn(&str) -> u64 = |s| s.len() as u64;
//!     BloomFilter::new(bits, &[by_len])
//! }
//!
//! assert!(length_filter(64).is_ok());
//! assert_eq!(
//!     length_filter(0).unwrap_err(),
//!     ChainBloomError::invalid_filter_size(0)
//! );
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for chainbloom operations.
pub type Result<T> = std::result::Result<T, ChainBloomError>;

/// Errors that can occur while building a filter or a map.
///
/// `Clone` + `PartialEq` make the variants easy to compare in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainBloomError {
    /// Bit array size is invalid.
    ///
    /// A filter needs at least one addressable bit, otherwise every index
    /// computation would be a reduction modulo zero.
    InvalidFilterSize {
        /// The invalid size in bits.
        size: usize,
    },

    /// Bucket count is below the configured minimum.
    ///
    /// A map needs at least one bucket for `hash mod bucket_count` to be
    /// defined.
    InvalidBucketCount {
        /// The bucket count that was provided.
        count: usize,
        /// Smallest bucket count the map accepts.
        min: usize,
    },

    /// Invalid parameters provided to a builder.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate out of valid bounds (0, 1).
    FalsePositiveRateOutOfBounds {
        /// The invalid false positive rate that was provided.
        fp_rate: f64,
    },

    /// Expected items count is invalid.
    ///
    /// Sizing a filter for zero items would divide by zero.
    InvalidItemCount {
        /// The invalid count that was provided.
        count: usize,
    },

    /// A checked bit access past the end of the bit array.
    IndexOutOfBounds {
        /// The invalid index that was accessed.
        index: usize,
        /// Number of addressable bits.
        length: usize,
    },
}

impl fmt::Display for ChainBloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilterSize { size } => {
                write!(
                    f,
                    "Invalid filter size: {} bits. A filter needs at least one bit.",
                    size
                )
            }
            Self::InvalidBucketCount { count, min } => {
                write!(
                    f,
                    "Invalid bucket count: {}. A map needs at least {} bucket(s).",
                    count, min
                )
            }
            Self::InvalidParameters { message } => {
                write!(f, "Invalid parameters: {}.", message)
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for bit array of length {}",
                    index, length
                )
            }
        }
    }
}

impl std::error::Error for ChainBloomError {}

impl ChainBloomError {
    /// Create an `InvalidFilterSize` error.
    #[must_use]
    pub fn invalid_filter_size(size: usize) -> Self {
        Self::InvalidFilterSize { size }
    }

    /// Create an `InvalidBucketCount` error.
    #[must_use]
    pub fn invalid_bucket_count(count: usize, min: usize) -> Self {
        Self::InvalidBucketCount { count, min }
    }

    /// Create an `InvalidParameters` error with a formatted message.
    ///
    /// # Examples
    /// ```
    /// use chainbloom::ChainBloomError;
    ///
    /// let err = ChainBloomError::invalid_parameters(
    ///     format!("min_buckets={} exceeds initial_buckets={}", 8, 4)
    /// );
    /// assert!(err.to_string().contains("min_buckets=8"));
    /// ```
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }
}
