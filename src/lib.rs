//! ChainBloom: a bloom filter and a dynamically resizing chained hash map,
//! both driven by caller-supplied string hash functions.
//!
//! Neither structure ships a hash algorithm. Every hash is a
//! [`HashFunction`](hash::HashFunction): any `Fn(&str) -> u64`, including
//! plain `fn` pointers and capturing closures. Bit and bucket indices are
//! always `hash(key) mod size`, so layouts are fully determined by the
//! functions you pass in.
//!
//! # Bloom Filter
//!
//! A fixed bit array with a list of hash functions. [`BloomFilter::check`]
//! can return false positives but never false negatives.
//!
//! ```
//! use chainbloom::BloomFilter;
//! use chainbloom::hash::HashFn;
//!
//! let h1: HashFn = |s| s.len() as u64;
//! let h2: HashFn = |s| s.len() as u64 * 7;
//! let mut filter = BloomFilter::new(16, &[h1, h2]).unwrap();
//!
//! filter.add("cat");
//! assert!(filter.check("cat"));
//! assert!(!filter.check("bird"));
//! ```
//!
//! # Dynamic Hash Map
//!
//! Separate chaining with head insertion. The bucket array doubles when the
//! key count reaches the bucket count and halves when it drops below a
//! quarter of it. Mutating operations come in two forms: consuming
//! (`add`, `delete`, `resize`), which return the handle to keep using, and
//! in place (`insert`, `remove`, `resize_to`).
//!
//! ```
//! use chainbloom::DynamicHashMap;
//! use chainbloom::hash::HashFn;
//!
//! let hash: HashFn = |s| s.bytes().map(u64::from).sum();
//! let map = DynamicHashMap::new(4, hash).unwrap()
//!     .add("a", "1")
//!     .add("b", "2")
//!     .add("c", "3")
//!     .add("d", "4");
//!
//! assert_eq!(map.bucket_count(), 8);
//! assert_eq!(map.find("c"), Some("3"));
//!
//! let map = map.delete("c");
//! assert_eq!(map.find("c"), None);
//! ```
//!
//! Keys and values are bounded to
//! [`DEFAULT_MAX_STRING_LEN`](crate::core::text::DEFAULT_MAX_STRING_LEN) bytes
//! unless configured otherwise. Keys are bounded before hashing, so two keys
//! sharing that prefix are the same key.
//!
//! # Using Builders
//!
//! ```
//! use chainbloom::builder::{BloomFilterBuilder, HashMapBuilder};
//! use chainbloom::hash::HashFn;
//!
//! let fnv: HashFn = |s| {
//!     s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
//!         (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
//!     })
//! };
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .hash_function(fnv)
//!     .build()
//!     .unwrap();
//!
//! let map = HashMapBuilder::new()
//!     .expected_len(1_000)
//!     .max_string_len(64)
//!     .build(fnv)
//!     .unwrap();
//!
//! assert!(filter.is_empty());
//! assert!(map.is_empty());
//! ```
//!
//! # Logging
//!
//! Construction, load-driven resizes and rehashes emit [`tracing`] events
//! at `debug` and `trace` level. Nothing is logged on the add, check or
//! lookup fast paths.
//!
//! # Features
//!
//! - `metrics` - per-structure operation counters and a false positive
//!   tracker (see the `metrics` module)
//!
//! # Thread Safety
//!
//! Both structures are plain single-owner values; share them behind a lock
//! if needed. With `metrics` enabled, lookups update interior counters and
//! the structures are no longer `Sync`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

/// Bit storage, sizing math and string bounding
pub mod core;

/// Error types and result aliases
pub mod error;

/// Bloom filter
pub mod filters;

/// Hash function abstraction
pub mod hash;

/// Dynamically resizing hash map
pub mod map;

/// Builders for filters and maps
pub mod builder;

/// Operation counters (requires `metrics` feature)
#[cfg(feature = "metrics")]
#[cfg_attr(docsrs, doc(cfg(feature = "metrics")))]
pub mod metrics;

pub use error::{ChainBloomError, Result};

pub use filters::BloomFilter;
pub use map::DynamicHashMap;

pub use builder::{BloomFilterBuilder, HashMapBuilder};

pub use hash::{HashFn, HashFunction};

#[cfg(feature = "metrics")]
pub use metrics::{FalsePositiveTracker, FilterMetrics, MapMetrics};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use chainbloom::prelude::*;
///
/// let h: HashFn = |s| s.len() as u64;
/// let mut filter = BloomFilter::new(64, &[h]).unwrap();
/// filter.add("hello");
/// assert!(filter.check("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::{BloomFilterBuilder, HashMapBuilder};
    pub use crate::error::{ChainBloomError, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::{HashFn, HashFunction};
    pub use crate::map::{DynamicHashMap, MapConfig};

    #[cfg(feature = "metrics")]
    pub use crate::metrics::{FalsePositiveTracker, FilterMetrics, MapMetrics};
}
