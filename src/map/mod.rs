//! Dynamically resizing chained hash map.
//!
//! - [`DynamicHashMap`] - separate chaining over a caller-chosen hash
//!   function, doubling when full and halving when under a quarter full
//! - [`MapConfig`] - initial size, shrink floor and string bound
//!
//! # Examples
//!
//! ```
//! use chainbloom::map::DynamicHashMap;
//! use chainbloom::hash::HashFn;
//!
//! let hash: HashFn = |s| s.bytes().map(u64::from).sum();
//! let mut map = DynamicHashMap::new(4, hash).unwrap();
//!
//! map.insert("apple", "red");
//! map.insert("banana", "yellow");
//! assert_eq!(map.find("apple"), Some("red"));
//!
//! map.remove("apple");
//! assert!(!map.contains_key("apple"));
//! ```

mod chain;
pub mod config;
pub mod hash_map;
pub mod iter;

pub use config::{MapConfig, DEFAULT_INITIAL_BUCKETS, DEFAULT_MIN_BUCKETS};
pub use hash_map::DynamicHashMap;
pub use iter::Iter;
