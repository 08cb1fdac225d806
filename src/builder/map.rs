//! Builder for dynamic hash maps.
//!
//! Every setting has a default, so there is no type-state here; the hash
//! function is the only required input and is taken by
//! [`build`](HashMapBuilder::build).
//!
//! # Examples
//!
//! ```
//! use chainbloom::builder::HashMapBuilder;
//! use chainbloom::hash::HashFn;
//!
//! let hash: HashFn = |s| s.bytes().map(u64::from).sum();
//! let map = HashMapBuilder::new()
//!     .initial_buckets(64)
//!     .min_buckets(8)
//!     .max_string_len(256)
//!     .build(hash)
//!     .unwrap();
//!
//! assert_eq!(map.bucket_count(), 64);
//! assert_eq!(map.max_string_len(), 256);
//! ```

use crate::error::Result;
use crate::hash::HashFunction;
use crate::map::{DynamicHashMap, MapConfig};

const LARGEST_POWER_OF_TWO: usize = 1 << (usize::BITS - 1);

/// Fluent builder for [`DynamicHashMap`].
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct HashMapBuilder {
    config: MapConfig,
}

impl HashMapBuilder {
    /// Builder starting from [`MapConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket count at construction.
    pub fn initial_buckets(mut self, buckets: usize) -> Self {
        self.config.initial_buckets = buckets;
        self
    }

    /// Start with enough buckets to hold `len` keys without growing.
    ///
    /// Rounds up to a power of two strictly greater than `len`, saturating
    /// at the largest power of two `usize` can hold.
    pub fn expected_len(mut self, len: usize) -> Self {
        self.config.initial_buckets = len
            .checked_add(1)
            .and_then(usize::checked_next_power_of_two)
            .unwrap_or(LARGEST_POWER_OF_TWO);
        self
    }

    /// Floor the map never shrinks below.
    pub fn min_buckets(mut self, buckets: usize) -> Self {
        self.config.min_buckets = buckets;
        self
    }

    /// Maximum stored length of keys and values, in bytes.
    pub fn max_string_len(mut self, len: usize) -> Self {
        self.config.max_string_len = len;
        self
    }

    /// The configuration built so far.
    #[must_use]
    pub fn config(&self) -> MapConfig {
        self.config
    }

    /// Build the map.
    ///
    /// # Errors
    ///
    /// Returns the error of [`MapConfig::validate`].
    pub fn build<H: HashFunction>(self, hash_function: H) -> Result<DynamicHashMap<H>> {
        DynamicHashMap::with_config(self.config, hash_function)
    }
}

impl From<MapConfig> for HashMapBuilder {
    fn from(config: MapConfig) -> Self {
        Self { config }
    }
}
