//! Observed false positive rate tracking.
//!
//! A filter alone cannot tell a true positive from a false one. When the
//! caller knows the real answer (a test harness, or an authoritative store
//! sitting behind the filter), each check can be confirmed and the observed
//! false positive rate compared against the rate the filter was sized for.
//!
//! The rate here is the textbook one: false positives over checks of items
//! that were never added.
//!
//! # Examples
//!
//! ```
//! use chainbloom::metrics::FalsePositiveTracker;
//!
//! let tracker = FalsePositiveTracker::new(0.10);
//!
//! // 10 checks of absent items, filter said "yes" once
//! tracker.record_confirmed(true, false);
//! for _ in 0..9 {
//!     tracker.record_confirmed(false, false);
//! }
//!
//! assert!((tracker.observed_fp_rate() - 0.10).abs() < 1e-12);
//! assert!(!tracker.is_alert());
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Tracker configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FpTrackerConfig {
    /// Number of recent absent-item checks kept for the windowed rate.
    pub window_size: usize,
    /// Rate the filter was sized for.
    pub expected_fp_rate: f64,
    /// Alert when the windowed rate exceeds `expected_fp_rate` times this.
    pub alert_threshold: f64,
}

impl Default for FpTrackerConfig {
    fn default() -> Self {
        Self {
            window_size: 1000,
            expected_fp_rate: 0.01,
            alert_threshold: 1.5,
        }
    }
}

/// Confirmed-result tracker with an all-time and a sliding-window rate.
#[derive(Debug, Clone)]
pub struct FalsePositiveTracker {
    config: FpTrackerConfig,
    true_positives: Cell<u64>,
    false_positives: Cell<u64>,
    true_negatives: Cell<u64>,
    false_negatives: Cell<u64>,
    window: RefCell<VecDeque<bool>>,
}

impl FalsePositiveTracker {
    /// Tracker expecting `expected_fp_rate`, with default window and alert
    /// threshold.
    #[must_use]
    pub fn new(expected_fp_rate: f64) -> Self {
        Self::with_config(FpTrackerConfig {
            expected_fp_rate,
            ..FpTrackerConfig::default()
        })
    }

    /// Tracker with a full configuration. A zero window is raised to one.
    #[must_use]
    pub fn with_config(mut config: FpTrackerConfig) -> Self {
        config.window_size = config.window_size.max(1);
        Self {
            window: RefCell::new(VecDeque::with_capacity(config.window_size)),
            config,
            true_positives: Cell::new(0),
            false_positives: Cell::new(0),
            true_negatives: Cell::new(0),
            false_negatives: Cell::new(0),
        }
    }

    /// Record one check whose real answer is known.
    ///
    /// # Arguments
    ///
    /// * `filter_result` - What `check` returned
    /// * `actually_present` - Whether the item was really added
    pub fn record_confirmed(&self, filter_result: bool, actually_present: bool) {
        let counter = match (filter_result, actually_present) {
            (true, true) => &self.true_positives,
            (true, false) => &self.false_positives,
            (false, false) => &self.true_negatives,
            (false, true) => &self.false_negatives,
        };
        counter.set(counter.get() + 1);

        if !actually_present {
            let mut window = self.window.borrow_mut();
            if window.len() == self.config.window_size {
                window.pop_front();
            }
            window.push_back(filter_result);
        }

        if !filter_result && actually_present {
            tracing::warn!("filter reported an added item as absent");
        }
    }

    /// False positives over all checks of absent items.
    #[must_use]
    pub fn observed_fp_rate(&self) -> f64 {
        let fp = self.false_positives.get();
        let absent = fp + self.true_negatives.get();
        if absent == 0 {
            0.0
        } else {
            fp as f64 / absent as f64
        }
    }

    /// False positive rate over the most recent absent-item checks.
    #[must_use]
    pub fn window_fp_rate(&self) -> f64 {
        let window = self.window.borrow();
        if window.is_empty() {
            return 0.0;
        }
        window.iter().filter(|&&hit| hit).count() as f64 / window.len() as f64
    }

    /// Rate the filter was sized for.
    #[must_use]
    pub fn expected_fp_rate(&self) -> f64 {
        self.config.expected_fp_rate
    }

    /// `true` if the windowed rate exceeds the alert threshold.
    #[must_use]
    pub fn is_alert(&self) -> bool {
        self.window_fp_rate() > self.config.expected_fp_rate * self.config.alert_threshold
    }

    /// Checks recorded so far.
    #[must_use]
    pub fn total_checks(&self) -> u64 {
        self.true_positives.get()
            + self.false_positives.get()
            + self.true_negatives.get()
            + self.false_negatives.get()
    }

    /// False positives recorded so far.
    #[must_use]
    pub fn false_positives(&self) -> u64 {
        self.false_positives.get()
    }

    /// Added items reported absent. Nonzero means a broken filter.
    #[must_use]
    pub fn false_negatives(&self) -> u64 {
        self.false_negatives.get()
    }

    /// Copy the tracker state out.
    #[must_use]
    pub fn snapshot(&self) -> FpTrackerSnapshot {
        FpTrackerSnapshot {
            total_checks: self.total_checks(),
            true_positives: self.true_positives.get(),
            false_positives: self.false_positives.get(),
            true_negatives: self.true_negatives.get(),
            false_negatives: self.false_negatives.get(),
            observed_fp_rate: self.observed_fp_rate(),
            window_fp_rate: self.window_fp_rate(),
            expected_fp_rate: self.config.expected_fp_rate,
            is_alert: self.is_alert(),
            window_sample_count: self.window.borrow().len(),
        }
    }

    /// Reset every counter and empty the window.
    pub fn reset(&self) {
        self.true_positives.set(0);
        self.false_positives.set(0);
        self.true_negatives.set(0);
        self.false_negatives.set(0);
        self.window.borrow_mut().clear();
    }
}

/// Point-in-time copy of a [`FalsePositiveTracker`].
#[derive(Debug, Clone, PartialEq)]
pub struct FpTrackerSnapshot {
    /// Checks recorded.
    pub total_checks: u64,
    /// Added items reported present.
    pub true_positives: u64,
    /// Absent items reported present.
    pub false_positives: u64,
    /// Absent items reported absent.
    pub true_negatives: u64,
    /// Added items reported absent.
    pub false_negatives: u64,
    /// All-time false positive rate.
    pub observed_fp_rate: f64,
    /// Sliding-window false positive rate.
    pub window_fp_rate: f64,
    /// Rate the filter was sized for.
    pub expected_fp_rate: f64,
    /// Whether the windowed rate exceeds the alert threshold.
    pub is_alert: bool,
    /// Samples currently in the window.
    pub window_sample_count: usize,
}

impl FpTrackerSnapshot {
    /// Deviation of the windowed rate from the expected one, in percent.
    #[must_use]
    pub fn deviation_percent(&self) -> f64 {
        if self.expected_fp_rate == 0.0 {
            return 0.0;
        }
        (self.window_fp_rate - self.expected_fp_rate) / self.expected_fp_rate * 100.0
    }

    /// `true` once the window holds enough samples to be meaningful.
    #[must_use]
    pub fn has_sufficient_samples(&self) -> bool {
        self.window_sample_count >= 100
    }
}
