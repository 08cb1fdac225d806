//! Bloom filter benchmarks
//!
//! # Scenarios
//!
//! 1. **Add by size**: add latency as the filter grows (expected O(1),
//!    with cache effects on large arrays)
//! 2. **Check hit vs miss**: misses short-circuit at the first clear bit
//! 3. **By hash count**: cost scales linearly with k
//! 4. **By key length**: hashing dominates for long keys
use chainbloom::core::params::optimal_bit_count;
use chainbloom::hash::HashFn;
use chainbloom::BloomFilter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

fn bench_add_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_add_by_size");

    for &size in SIZES {
        let items = generate_strings(size, 32);
        let bits = optimal_bit_count(size, 0.01).unwrap();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut filter = BloomFilter::with_hash_functions(bits, double_hashing(7)).unwrap();
            let mut idx = 0;
            b.iter(|| {
                filter.add(black_box(&items[idx % items.len()]));
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_check_hit_vs_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_check");
    let (present, absent) = create_disjoint_sets(10_000);

    for &fpr in FP_RATES {
        let bits = optimal_bit_count(present.len(), fpr).unwrap();
        let mut filter = BloomFilter::with_hash_functions(bits, double_hashing(7)).unwrap();
        filter.add_all(&present);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("hit", fpr), &fpr, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.check(black_box(&present[idx % present.len()]));
                idx += 1;
                hit
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", fpr), &fpr, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.check(black_box(&absent[idx % absent.len()]));
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_by_hash_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_add_by_hash_count");
    let items = generate_urls(10_000);

    for &k in HASH_COUNTS {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let mut filter = BloomFilter::with_hash_functions(1 << 20, double_hashing(k)).unwrap();
            let mut idx = 0;
            b.iter(|| {
                filter.add(black_box(&items[idx % items.len()]));
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_by_key_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_check_by_key_length");

    for &len in STRING_LENGTHS {
        let items = generate_strings(1_000, len);
        let mut filter = BloomFilter::new(1 << 16, &[xxh3 as HashFn, fnv1a as HashFn]).unwrap();
        filter.add_all(&items);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.check(black_box(&items[idx % items.len()]));
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_by_size,
    bench_check_hit_vs_miss,
    bench_by_hash_count,
    bench_by_key_length,
);
criterion_main!(benches);
