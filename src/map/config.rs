//! Sizing and bounding configuration for [`DynamicHashMap`](super::DynamicHashMap).

use crate::core::text::DEFAULT_MAX_STRING_LEN;
use crate::error::{ChainBloomError, Result};

/// Default number of buckets a map starts with.
pub const DEFAULT_INITIAL_BUCKETS: usize = 16;

/// Default floor for shrinking.
pub const DEFAULT_MIN_BUCKETS: usize = 1;

/// Validated map configuration.
///
/// Build one directly or through
/// [`HashMapBuilder`](crate::builder::HashMapBuilder).
///
/// # Examples
///
/// ```
/// use chainbloom::map::MapConfig;
///
/// let config = MapConfig {
///     initial_buckets: 64,
///     ..MapConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapConfig {
    /// Bucket count at construction.
    pub initial_buckets: usize,

    /// Maximum stored length of keys and values, in bytes.
    pub max_string_len: usize,

    /// The map never shrinks below this many buckets.
    pub min_buckets: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_buckets: DEFAULT_INITIAL_BUCKETS,
            max_string_len: DEFAULT_MAX_STRING_LEN,
            min_buckets: DEFAULT_MIN_BUCKETS,
        }
    }
}

impl MapConfig {
    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// - [`ChainBloomError::InvalidParameters`] if `min_buckets` or
    ///   `max_string_len` is 0
    /// - [`ChainBloomError::InvalidBucketCount`] if `initial_buckets` is below
    ///   `min_buckets`
    pub fn validate(&self) -> Result<()> {
        if self.min_buckets == 0 {
            return Err(ChainBloomError::invalid_parameters(
                "min_buckets must be at least 1",
            ));
        }

        if self.max_string_len == 0 {
            return Err(ChainBloomError::invalid_parameters(
                "max_string_len must be at least 1",
            ));
        }

        if self.initial_buckets < self.min_buckets {
            return Err(ChainBloomError::invalid_bucket_count(
                self.initial_buckets,
                self.min_buckets,
            ));
        }

        Ok(())
    }
}
