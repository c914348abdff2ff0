//! Criterion benchmarks for u-landscape runners.
//!
//! All runs use the rippled double well and fixed seeds, so timings
//! measure loop overhead plus landscape evaluations only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_landscape::driver::{run_sa_batch, DriverParams};
use u_landscape::gd::{GdConfig, GdRunner};
use u_landscape::mcmc::{MhConfig, MhRunner};
use u_landscape::sa::{SaConfig, SaRunner};
use u_landscape::DoubleWell;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_gd(c: &mut Criterion) {
    let mut group = c.benchmark_group("gd_double_well");

    for &theta in &[-1.0f64, 0.5, 3.0] {
        let config = GdConfig::default().with_theta_init(theta);
        group.bench_with_input(BenchmarkId::from_parameter(theta), &config, |b, c| {
            b.iter(|| {
                let result = GdRunner::run(black_box(&DoubleWell), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_mh(c: &mut Criterion) {
    let mut group = c.benchmark_group("mh_double_well");

    for &steps in &[200usize, 2_000, 20_000] {
        let config = MhConfig::default()
            .with_theta_init(0.5)
            .with_num_steps(steps)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, c| {
            b.iter(|| {
                let result = MhRunner::run(black_box(&DoubleWell), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_double_well");

    for &steps in &[200usize, 2_000, 20_000] {
        let config = SaConfig::default()
            .with_theta_init(3.0)
            .with_num_steps(steps)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(steps), &config, |b, c| {
            b.iter(|| {
                let result = SaRunner::run(black_box(&DoubleWell), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_batch");
    group.sample_size(10);

    let thetas: Vec<f64> = (0..32).map(|i| -3.0 + 6.0 * i as f64 / 31.0).collect();
    let params = DriverParams::default()
        .with_initial_conditions(thetas)
        .with_num_steps(5_000)
        .with_seed(42);
    group.bench_function("32x5000", |b| {
        b.iter(|| {
            let results = run_sa_batch(black_box(&DoubleWell), black_box(&params));
            black_box(results)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_gd, bench_mh, bench_sa, bench_sa_batch);
criterion_main!(benches);
