//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Measures estimator throughput across path counts and raw normal
//! generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_models::instruments::{OptionParameters, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::rng::PricerRng;

/// Benchmark the estimator at increasing path counts.
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_estimate");
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();

    for n_paths in [10_000usize, 100_000, 1_000_000] {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(42)
            .build()
            .unwrap();
        let mut pricer = MonteCarloPricer::new(config).unwrap();

        group.throughput(Throughput::Elements(n_paths as u64));
        group.bench_function(BenchmarkId::from_parameter(n_paths), |b| {
            b.iter(|| pricer.estimate(black_box(&params), OptionType::Call));
        });
    }

    group.finish();
}

/// Benchmark batched normal generation.
fn bench_fill_normal(c: &mut Criterion) {
    let mut rng = PricerRng::from_seed(42);
    let mut buffer = vec![0.0; 4096];

    let mut group = c.benchmark_group("rng");
    group.throughput(Throughput::Elements(buffer.len() as u64));
    group.bench_function("fill_normal_4096", |b| {
        b.iter(|| rng.fill_normal(black_box(&mut buffer)));
    });
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_fill_normal);
criterion_main!(benches);
