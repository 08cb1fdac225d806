//! Operation counters and false positive tracking.
//!
//! Compiled only with the `metrics` feature. With it enabled, every
//! [`BloomFilter`](crate::BloomFilter) carries a [`FilterMetrics`] and every
//! [`DynamicHashMap`](crate::DynamicHashMap) a [`MapMetrics`]; both are
//! reachable through a `metrics()` accessor. Counting costs one
//! non-atomic increment per operation.
//!
//! [`FalsePositiveTracker`] stands alone: feed it checks whose real answer
//! is known and it reports the observed false positive rate.
//!
//! # Examples
//!
//! ```
//! use chainbloom::BloomFilter;
//! use chainbloom::hash::HashFn;
//! use chainbloom::metrics::FalsePositiveTracker;
//!
//! let h: HashFn = |s| s.len() as u64;
//! let mut filter = BloomFilter::new(64, &[h]).unwrap();
//! filter.add("cat");
//!
//! let tracker = FalsePositiveTracker::new(0.05);
//! tracker.record_confirmed(filter.check("cat"), true);
//! tracker.record_confirmed(filter.check("dog"), false);
//! tracker.record_confirmed(filter.check("horse"), false);
//!
//! assert_eq!(filter.metrics().snapshot().checks, 3);
//! assert_eq!(tracker.false_positives(), 1);
//! ```

pub mod collector;
pub mod tracker;

pub use collector::{FilterMetrics, FilterMetricsSnapshot, MapMetrics, MapMetricsSnapshot};
pub use tracker::{FalsePositiveTracker, FpTrackerConfig, FpTrackerSnapshot};
