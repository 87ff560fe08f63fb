//! Criterion benchmarks for the samplers and the shuffle.
//!
//! Measures single-draw cost of each sampler and shuffle cost across
//! slice lengths, for both explicit and thread-local sources.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sampler_core::rng::SamplerRng;
use sampler_core::{
    sample_normal, sample_normal_list, shuffle, shuffle_with, BoundedExponential, Rounding,
};

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("samplers");

    let mut rng = SamplerRng::from_seed(42);
    group.bench_function("normal", |b| {
        b.iter(|| sample_normal(&mut rng, black_box(0.0), black_box(1.0)));
    });

    let exp = BoundedExponential::new(0.0, 10.0, 1.0).unwrap();
    group.bench_function("bounded_exponential", |b| {
        b.iter(|| exp.sample(&mut rng).unwrap());
    });

    group.bench_function("normal_list_1000_rounded", |b| {
        b.iter(|| sample_normal_list(&mut rng, 1000, 0.0, 1.0, Rounding::Decimals(3)));
    });

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for size in [10, 1_000, 100_000] {
        let mut items: Vec<u64> = (0..size).collect();
        let mut rng = SamplerRng::from_seed(7);

        group.bench_with_input(BenchmarkId::new("explicit", size), &size, |b, _| {
            b.iter(|| shuffle_with(black_box(&mut items), &mut rng));
        });

        group.bench_with_input(BenchmarkId::new("thread_local", size), &size, |b, _| {
            b.iter(|| shuffle(black_box(&mut items)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_samplers, bench_shuffle);
criterion_main!(benches);
