//! Benchmarks for trihex signature arithmetic
//!
//! Measures performance of:
//! - Congruence solving (scan vs closed form)
//! - Alternate signature transform
//! - Canonicalization with and without the cache
//! - Census counts over hexagon ranges

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trihex_signature::{
    alternates, canonical, count_up_to, solve, solve_by_gcd, unique_signatures, CanonicalCache,
    MirrorPolicy, Signature, SignatureGrid,
};

/// Benchmark the scan solver against the closed form
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for &modulus in &[7u64, 64, 1024, 65_536] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("scan", modulus), &modulus, |b, &n| {
            b.iter(|| solve(black_box(5), black_box(n - 1), n))
        });
        group.bench_with_input(BenchmarkId::new("gcd", modulus), &modulus, |b, &n| {
            b.iter(|| solve_by_gcd(black_box(5), black_box(n - 1), n))
        });
    }
    group.finish();
}

/// Benchmark the alternate transform at growing spine lengths
fn bench_alternates(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternates");

    for &spine in &[4u64, 16, 64, 256] {
        let sig = Signature::new(spine, 3, spine / 2).expect("offset within spine");
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(spine), &sig, |b, &s| {
            b.iter(|| alternates(black_box(s)))
        });
    }
    group.finish();
}

/// Benchmark canonicalization over a grid, uncached and cached
fn bench_canonical_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_grid");

    for policy in [MirrorPolicy::Distinct, MirrorPolicy::Collapse] {
        let grid: Vec<_> = SignatureGrid::new(11, 11).collect();
        group.throughput(Throughput::Elements(grid.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("uncached", format!("{:?}", policy)),
            &grid,
            |b, sigs| {
                b.iter(|| {
                    for &s in sigs {
                        let _ = canonical(black_box(s), policy);
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("cached", format!("{:?}", policy)),
            &grid,
            |b, sigs| {
                b.iter(|| {
                    let mut cache = CanonicalCache::new();
                    for &s in sigs {
                        let _ = cache.canonical(black_box(s), policy);
                    }
                })
            },
        );
    }
    group.finish();
}

/// Benchmark unique signature selection for single hexagon counts
fn bench_unique_signatures(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_signatures");

    // Highly composite h/2 + 1 values give many divisors
    for &hexagons in &[22u64, 118, 718, 5038] {
        group.bench_with_input(
            BenchmarkId::from_parameter(hexagons),
            &hexagons,
            |b, &h| b.iter(|| unique_signatures(black_box(h), MirrorPolicy::Collapse)),
        );
    }
    group.finish();
}

/// Benchmark full census counts
fn bench_count_up_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_up_to");
    group.sample_size(20); // Fewer samples for expensive operations

    for &bound in &[50u64, 100, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(bound), &bound, |b, &h| {
            b.iter(|| count_up_to(black_box(h), MirrorPolicy::Distinct))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_solve,
    bench_alternates,
    bench_canonical_grid,
    bench_unique_signatures,
    bench_count_up_to,
);

criterion_main!(benches);
