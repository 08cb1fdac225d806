//! Per-structure operation counters.
//!
//! Each filter and map carries one collector when the `metrics` feature is
//! on. Lookups take `&self`, so counters live in [`Cell`]s; the structures
//! are single-threaded and the counters follow suit.
//!
//! # Examples
//!
//! ```
//! use chainbloom::metrics::FilterMetrics;
//!
//! let metrics = FilterMetrics::default();
//! metrics.record_add();
//! metrics.record_check(true);
//! metrics.record_check(false);
//!
//! let snap = metrics.snapshot();
//! assert_eq!(snap.checks, 2);
//! assert_eq!(snap.negatives, 1);
//! ```

use std::cell::Cell;

fn bump(counter: &Cell<u64>) {
    counter.set(counter.get().saturating_add(1));
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Operation counters for a [`BloomFilter`](crate::BloomFilter).
#[derive(Debug, Clone, Default)]
pub struct FilterMetrics {
    adds: Cell<u64>,
    checks: Cell<u64>,
    negatives: Cell<u64>,
}

impl FilterMetrics {
    /// Count one `add`.
    pub fn record_add(&self) {
        bump(&self.adds);
    }

    /// Count one `check` and whether it answered "possibly present".
    pub fn record_check(&self, present: bool) {
        bump(&self.checks);
        if !present {
            bump(&self.negatives);
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        self.adds.set(0);
        self.checks.set(0);
        self.negatives.set(0);
    }

    /// Copy the counters out.
    #[must_use]
    pub fn snapshot(&self) -> FilterMetricsSnapshot {
        FilterMetricsSnapshot {
            adds: self.adds.get(),
            checks: self.checks.get(),
            negatives: self.negatives.get(),
        }
    }
}

/// Point-in-time copy of [`FilterMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterMetricsSnapshot {
    /// Strings added.
    pub adds: u64,
    /// Membership checks performed.
    pub checks: u64,
    /// Checks that answered "definitely absent".
    pub negatives: u64,
}

impl FilterMetricsSnapshot {
    /// Checks that answered "possibly present".
    #[must_use]
    pub fn positives(&self) -> u64 {
        self.checks - self.negatives
    }

    /// Fraction of checks answered "possibly present".
    #[must_use]
    pub fn positive_rate(&self) -> f64 {
        ratio(self.positives(), self.checks)
    }
}

/// Operation counters for a [`DynamicHashMap`](crate::DynamicHashMap).
#[derive(Debug, Clone, Default)]
pub struct MapMetrics {
    inserts: Cell<u64>,
    updates: Cell<u64>,
    removes: Cell<u64>,
    lookups: Cell<u64>,
    lookup_hits: Cell<u64>,
    grows: Cell<u64>,
    shrinks: Cell<u64>,
    rehashed_entries: Cell<u64>,
}

impl MapMetrics {
    /// Count a new key.
    pub fn record_insert(&self) {
        bump(&self.inserts);
    }

    /// Count an overwrite of an existing key.
    pub fn record_update(&self) {
        bump(&self.updates);
    }

    /// Count a removal that found its key.
    pub fn record_remove(&self) {
        bump(&self.removes);
    }

    /// Count a lookup and whether it found the key.
    pub fn record_lookup(&self, hit: bool) {
        bump(&self.lookups);
        if hit {
            bump(&self.lookup_hits);
        }
    }

    /// Count a load-driven doubling.
    pub fn record_grow(&self) {
        bump(&self.grows);
    }

    /// Count a load-driven halving.
    pub fn record_shrink(&self) {
        bump(&self.shrinks);
    }

    /// Count entries moved by one rehash, policy-driven or explicit.
    pub fn record_rehashed(&self, entries: usize) {
        let total = self.rehashed_entries.get();
        self.rehashed_entries
            .set(total.saturating_add(entries as u64));
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        for counter in [
            &self.inserts,
            &self.updates,
            &self.removes,
            &self.lookups,
            &self.lookup_hits,
            &self.grows,
            &self.shrinks,
            &self.rehashed_entries,
        ] {
            counter.set(0);
        }
    }

    /// Copy the counters out.
    #[must_use]
    pub fn snapshot(&self) -> MapMetricsSnapshot {
        MapMetricsSnapshot {
            inserts: self.inserts.get(),
            updates: self.updates.get(),
            removes: self.removes.get(),
            lookups: self.lookups.get(),
            lookup_hits: self.lookup_hits.get(),
            grows: self.grows.get(),
            shrinks: self.shrinks.get(),
            rehashed_entries: self.rehashed_entries.get(),
        }
    }
}

/// Point-in-time copy of [`MapMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapMetricsSnapshot {
    /// New keys added.
    pub inserts: u64,
    /// Values overwritten for keys already present.
    pub updates: u64,
    /// Keys removed.
    pub removes: u64,
    /// Calls to `find` (including through `contains_key`).
    pub lookups: u64,
    /// Lookups that found their key.
    pub lookup_hits: u64,
    /// Doublings triggered by a full map.
    pub grows: u64,
    /// Halvings triggered by a sparse map.
    pub shrinks: u64,
    /// Entries moved across all rehashes.
    pub rehashed_entries: u64,
}

impl MapMetricsSnapshot {
    /// Fraction of lookups that found their key.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        ratio(self.lookup_hits, self.lookups)
    }

    /// Entries moved per inserted key; stays bounded under doubling growth.
    #[must_use]
    pub fn rehash_amplification(&self) -> f64 {
        ratio(self.rehashed_entries, self.inserts)
    }
}
