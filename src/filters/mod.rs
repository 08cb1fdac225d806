//! Probabilistic membership filters.
//!
//! - [`BloomFilter`] - fixed bit array addressed by a caller-chosen list of
//!   hash functions; add and check only
//!
//! # Examples
//!
//! ```
//! use chainbloom::filters::BloomFilter;
//! use chainbloom::hash::HashFn;
//!
//! let h1: HashFn = |s| s.len() as u64;
//! let h2: HashFn = |s| s.len() as u64 * 7;
//! let mut filter = BloomFilter::new(16, &[h1, h2]).unwrap();
//!
//! filter.add("cat");
//! assert!(filter.check("cat"));
//! assert!(filter.check("dog"));   // false positive: same length as "cat"
//! assert!(!filter.check("bird")); // definitely never added
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod bloom;
pub use bloom::BloomFilter;
