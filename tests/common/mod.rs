//! Shared helpers for integration tests.
#![allow(dead_code)]

use chainbloom::hash::HashFn;
use std::sync::Once;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness.
///
/// Quiet by default; run with `RUST_LOG=chainbloom=trace` to watch resizes.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
            .with(fmt::layer().with_test_writer().with_target(false))
            .try_init();
    });
}

/// xxh3 with a fixed seed.
pub fn xxh3(s: &str) -> u64 {
    xxhash_rust::xxh3::xxh3_64_with_seed(s.as_bytes(), 0x9e37_79b9)
}

/// xxh3 with a second seed, independent of [`xxh3`].
pub fn xxh3_alt(s: &str) -> u64 {
    xxhash_rust::xxh3::xxh3_64_with_seed(s.as_bytes(), 0x85eb_ca6b)
}

/// 64-bit FNV-1a.
pub fn fnv1a(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Sum of byte values. Easy to reason about by hand.
pub fn byte_sum(s: &str) -> u64 {
    s.bytes().map(u64::from).sum()
}

/// String length.
pub fn by_len(s: &str) -> u64 {
    s.len() as u64
}

/// Seven times the string length.
pub fn by_len_x7(s: &str) -> u64 {
    s.len() as u64 * 7
}

/// Every key to the same bucket.
pub fn constant(_: &str) -> u64 {
    0
}

/// `k` independent hash functions built by double hashing xxh3 and FNV-1a.
pub fn double_hashing(k: u64) -> Vec<Box<dyn Fn(&str) -> u64>> {
    (0..k)
        .map(|i| Box::new(move |s: &str| xxh3(s).wrapping_add(i.wrapping_mul(fnv1a(s) | 1)))
            as Box<dyn Fn(&str) -> u64>)
        .collect()
}

/// The hash functions above as plain pointers.
pub const XXH3: HashFn = xxh3;
pub const FNV1A: HashFn = fnv1a;
