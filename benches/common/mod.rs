//! Shared data generators and constants for all benchmarks.
//!
//! Generators are seeded so every run benchmarks the same keys.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// DATA GENERATORS

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random alphanumeric strings of a fixed length.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    let mut rng = rng(0xb100_f11e);
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// Sequential strings: "item_00000000", "item_00000001", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item_{:08}", i)).collect()
}

/// URL-like keys sharing a long common prefix.
pub fn generate_urls(count: usize) -> Vec<String> {
    let mut rng = rng(0x5eed_0001);
    (0..count)
        .map(|_| format!("https://example.com/path/{:016x}", rng.gen::<u64>()))
        .collect()
}

/// Two disjoint key sets: one to insert and one guaranteed absent.
pub fn create_disjoint_sets(count: usize) -> (Vec<String>, Vec<String>) {
    let present = (0..count).map(|i| format!("present_{}", i)).collect();
    let absent = (0..count).map(|i| format!("absent_{}", i)).collect();
    (present, absent)
}

// HASH FUNCTIONS

/// xxh3, seeded.
pub fn xxh3(s: &str) -> u64 {
    xxhash_rust::xxh3::xxh3_64_with_seed(s.as_bytes(), 0x9e37_79b9)
}

/// 64-bit FNV-1a.
pub fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// `k` functions by double hashing xxh3 and FNV-1a.
pub fn double_hashing(k: u64) -> Vec<Box<dyn Fn(&str) -> u64>> {
    (0..k)
        .map(|i| Box::new(move |s: &str| xxh3(s).wrapping_add(i.wrapping_mul(fnv1a(s) | 1)))
            as Box<dyn Fn(&str) -> u64>)
        .collect()
}

// CONSTANTS

/// Item counts for scaling benchmarks.
pub const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Target false positive rates.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001];

/// Hash function counts.
pub const HASH_COUNTS: &[u64] = &[1, 3, 7, 13];

/// Key lengths in bytes.
pub const STRING_LENGTHS: &[usize] = &[8, 32, 128, 1024];

/// Starting bucket counts for map growth benchmarks.
pub const INITIAL_BUCKETS: &[usize] = &[1, 16, 1_024];
