//! Builders for filters and maps.
//!
//! - [`BloomFilterBuilder`] uses the type-state pattern: a filter cannot be
//!   built until its size is known, either as a bit count or as an expected
//!   item count plus a false positive rate
//! - [`HashMapBuilder`] is a plain fluent builder over [`MapConfig`](crate::map::MapConfig)
//!
//! Missing required parameters are compile-time errors. Out-of-range values
//! are runtime errors returned from `build`.
//!
//! # Examples
//!
//! ```
//! use chainbloom::builder::{BloomFilterBuilder, HashMapBuilder};
//! use chainbloom::hash::HashFn;
//!
//! let hash: HashFn = |s| s.bytes().map(u64::from).sum();
//!
//! let filter = BloomFilterBuilder::new()
//!     .bit_count(1024)
//!     .hash_function(hash)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.bit_count(), 1024);
//!
//! let map = HashMapBuilder::new().expected_len(10).build(hash).unwrap();
//! assert_eq!(map.bucket_count(), 16);
//! ```
//!
//! ```compile_fail
//! use chainbloom::builder::BloomFilterBuilder;
//! use chainbloom::hash::HashFn;
//!
//! // No size given: `build` does not exist in this state
//! let filter = BloomFilterBuilder::<_, HashFn>::new().build();
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod bloom;
pub mod map;

pub use bloom::BloomFilterBuilder;
pub use map::HashMapBuilder;
