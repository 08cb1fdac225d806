//! Bloom filter behavior through the public API.

mod common;

use chainbloom::builder::BloomFilterBuilder;
use chainbloom::core::params::{expected_fp_rate, optimal_bit_count};
use chainbloom::hash::HashFn;
use chainbloom::{BloomFilter, ChainBloomError};
use common::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;

fn length_filter() -> BloomFilter {
    BloomFilter::new(16, &[by_len as HashFn, by_len_x7 as HashFn]).unwrap()
}

#[test]
fn test_two_length_hashes_scenario() {
    init_tracing();
    let mut filter = length_filter();

    filter.add("cat");
    let set: Vec<usize> = filter.bits().iter_ones().collect();
    assert_eq!(set, vec![3, 5]);

    assert!(filter.check("cat"));
    // Same length, same bits
    assert!(filter.check("dog"));
    // Bits 4 and 12 are clear
    assert!(!filter.check("bird"));
}

#[test]
fn test_fresh_filter_rejects_everything() {
    let filter = BloomFilter::new(128, &[xxh3 as HashFn, fnv1a as HashFn]).unwrap();
    for key in ["", "a", "hello", "the quick brown fox"] {
        assert!(!filter.check(key));
    }
    assert!(filter.is_empty());
}

#[test]
fn test_zero_bits_is_an_error() {
    let result = BloomFilter::new(0, &[xxh3 as HashFn]);
    assert_eq!(result.unwrap_err(), ChainBloomError::invalid_filter_size(0));
}

#[test]
fn test_single_bit_filter() {
    let mut filter = BloomFilter::new(1, &[xxh3 as HashFn]).unwrap();
    assert!(!filter.check("x"));
    filter.add("x");
    // Every key maps to bit 0
    assert!(filter.check("anything"));
}

#[test]
fn test_no_hash_functions_accepts_everything() {
    let filter: BloomFilter = BloomFilter::new(64, &[]).unwrap();
    assert!(filter.check("never added"));
    assert!(filter.is_empty());
}

#[test]
fn test_add_is_idempotent() {
    let mut filter = BloomFilter::new(1024, &[XXH3, FNV1A]).unwrap();
    filter.add("repeat");
    let once = filter.bits().clone();
    filter.add("repeat");
    assert_eq!(filter.bits(), &once);
}

#[test]
fn test_empty_string_key() {
    let mut filter = BloomFilter::new(64, &[by_len as HashFn, fnv1a as HashFn]).unwrap();
    filter.add("");
    assert!(filter.check(""));
    assert!(filter.bits().get(0));
}

#[test]
fn test_no_false_negatives_with_real_hashes() {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let keys: Vec<String> = (0..5_000)
        .map(|_| format!("key-{:016x}", rng.gen::<u64>()))
        .collect();

    let mut filter = BloomFilter::with_hash_functions(
        optimal_bit_count(keys.len(), 0.01).unwrap(),
        double_hashing(7),
    )
    .unwrap();
    filter.add_all(&keys);

    for key in &keys {
        assert!(filter.check(key), "false negative for {}", key);
    }
}

#[test]
fn test_observed_fpr_tracks_theory() {
    init_tracing();
    let n = 2_000;
    let k = 7;
    let m = optimal_bit_count(n, 0.01).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut filter = BloomFilter::with_hash_functions(m, double_hashing(k)).unwrap();
    for _ in 0..n {
        filter.add(&format!("member-{:016x}", rng.gen::<u64>()));
    }

    let trials = 50_000;
    let false_positives = (0..trials)
        .filter(|_| filter.check(&format!("absent-{:016x}", rng.gen::<u64>())))
        .count();

    let observed = false_positives as f64 / trials as f64;
    let expected = expected_fp_rate(m, n, k as usize).unwrap();
    assert!(
        observed > expected * 0.3 && observed < expected * 2.5,
        "observed {:.4}, expected {:.4}",
        observed,
        expected
    );

    // The fill-based estimate lands near theory too
    assert!((filter.estimate_fpr() - expected).abs() < expected * 0.5);
}

#[test]
fn test_check_stops_at_first_clear_bit() {
    let calls = Cell::new(0u32);
    let mut funcs: Vec<Box<dyn Fn(&str) -> u64 + '_>> = Vec::new();
    funcs.push(Box::new(|_: &str| 0));
    funcs.push(Box::new(|_: &str| {
        calls.set(calls.get() + 1);
        1
    }));
    let filter = BloomFilter::with_hash_functions(8, funcs).unwrap();

    // Bit 0 is clear, so the second function never runs
    assert!(!filter.check("k"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_capturing_closures() {
    let seeds = [17u64, 31, 61];
    let funcs: Vec<_> = seeds
        .iter()
        .map(|&seed| move |s: &str| xxhash_rust::xxh3::xxh3_64_with_seed(s.as_bytes(), seed))
        .collect();

    let mut filter = BloomFilter::with_hash_functions(4096, funcs).unwrap();
    filter.add("closure");
    assert!(filter.check("closure"));
    assert_eq!(filter.hash_count(), 3);
}

#[test]
fn test_builder_matches_manual_sizing() {
    let built = BloomFilterBuilder::new()
        .expected_items(10_000)
        .false_positive_rate(0.001)
        .hash_function(XXH3)
        .build()
        .unwrap();
    let manual = BloomFilter::new(optimal_bit_count(10_000, 0.001).unwrap(), &[XXH3]).unwrap();
    assert_eq!(built.bit_count(), manual.bit_count());
}

#[test]
fn test_clone_is_independent() {
    let mut original = BloomFilter::new(256, &[XXH3, FNV1A]).unwrap();
    original.add("shared");
    let mut copy = original.clone();
    copy.add("copy-only");

    assert!(copy.check("shared"));
    assert!(copy.check("copy-only"));
    assert!(original.count_set_bits() <= copy.count_set_bits());
}

#[cfg(feature = "metrics")]
#[test]
fn test_tracker_with_filter() {
    use chainbloom::metrics::FalsePositiveTracker;

    let n = 1_000;
    let m = optimal_bit_count(n, 0.05).unwrap();
    let mut filter = BloomFilter::with_hash_functions(m, double_hashing(4)).unwrap();
    let tracker = FalsePositiveTracker::new(0.05);

    let members: Vec<String> = (0..n).map(|i| format!("m{}", i)).collect();
    filter.add_all(&members);

    for key in &members {
        tracker.record_confirmed(filter.check(key), true);
    }
    for i in 0..10_000 {
        tracker.record_confirmed(filter.check(&format!("x{}", i)), false);
    }

    assert_eq!(tracker.false_negatives(), 0);
    assert!(tracker.observed_fp_rate() < 0.05 * 2.0);
    assert_eq!(filter.metrics().snapshot().adds, n as u64);
}
