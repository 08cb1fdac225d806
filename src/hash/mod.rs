//! Hash function abstraction shared by the filter and the map.
//!
//! The crate contains no hash algorithms: callers bring their
//! own (FNV, xxHash, a closure over a seeded hasher, anything). This module
//! defines what "a hash function" means here and the one addressing rule
//! both structures use.
//!
//! # Examples
//!
//! ```
//! use chainbloom::hash::{bucket_index, HashFunction};
//!
//! let h = |s: &str| s.bytes().map(u64::from).sum::<u64>();
//! assert_eq!(h.hash("ab"), 195);
//! assert_eq!(bucket_index(&h, "ab", 16), 195 % 16);
//! ```

pub mod function;

pub use function::{bucket_index, HashFn, HashFunction};
