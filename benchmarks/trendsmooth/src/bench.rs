//! Kernel smoothing benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability in the number of samples and grid points
//! - Bandwidth and grid spacing
//! - Trajectory responses with many traces
//! - Pathological cases (clustered samples, underflowing weights)
//!
//! For serial execution, use `TRENDSMOOTH_MODE=serial cargo bench`.
//! For parallel grid evaluation, use `TRENDSMOOTH_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::env;
use std::hint::black_box;
use trendsmooth::prelude::*;
use trendsmooth_bench::{
    generate_clustered_data, generate_response, generate_sine_data, generate_trend_data,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("TRENDSMOOTH_MODE").ok().as_deref() {
        Some("parallel") => (true, "parallel"),
        _ => (false, "serial"),
    }
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_samples(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("samples_{}", mode_name));
    group.sample_size(50);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        let (x, y) = generate_sine_data(size, 42);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| {
                KernelSmoother::new()
                    .steps(1000)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .smooth(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_steps(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("steps_{}", mode_name));
    group.sample_size(100);

    let (x, y) = generate_trend_data(42);

    for steps in [100, 1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::new("batch", steps), &steps, |b, &steps| {
            b.iter(|| {
                KernelSmoother::new()
                    .steps(steps)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .smooth(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_sigma(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("sigma_{}", mode_name));
    group.sample_size(100);

    let (x, y) = generate_sine_data(1000, 42);

    for sigma in [0.01, 0.1, 0.7, 2.0, 10.0] {
        group.bench_with_input(BenchmarkId::new("batch", sigma), &sigma, |b, &sigma| {
            b.iter(|| {
                KernelSmoother::new()
                    .sigma(sigma)
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .smooth(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_spacing(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("spacing_{}", mode_name));
    group.sample_size(100);

    let (x, y) = generate_trend_data(42);

    for spacing in [Direct, Accumulated] {
        group.bench_with_input(
            BenchmarkId::new("batch", spacing.name()),
            &spacing,
            |b, &spacing| {
                b.iter(|| {
                    KernelSmoother::new()
                        .spacing(spacing)
                        .adapter(Batch)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .smooth(black_box(&x), black_box(&y))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_traces(c: &mut Criterion) {
    let mut group = c.benchmark_group("traces");
    group.sample_size(20);

    for (datasets, traces) in [(1, 10), (4, 25), (8, 50)] {
        let response = generate_response(datasets, traces, 7);
        let id = format!("{}x{}", datasets, traces);
        group.throughput(Throughput::Elements((datasets * traces) as u64));

        group.bench_with_input(BenchmarkId::new("smooth_datasets", &id), &response, |b, r| {
            let smoother = KernelSmoother::new().adapter(Traces).build().unwrap();
            b.iter_batched(
                || r.clone(),
                |mut map| smoother.smooth_datasets(black_box(&mut map)).unwrap(),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(50);

    let (x, y) = generate_clustered_data(5000, 42);
    group.bench_function("clustered", |b| {
        b.iter(|| {
            KernelSmoother::new()
                .bounds(DataExtent)
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .smooth(black_box(&x), black_box(&y))
                .unwrap()
        })
    });

    // Most grid points fall where every weight underflows.
    let (x, y) = generate_trend_data(42);
    for fallback in [Propagate, NearestSample, SampleMean] {
        group.bench_with_input(
            BenchmarkId::new("underflow", fallback.name()),
            &fallback,
            |b, &fallback| {
                b.iter(|| {
                    KernelSmoother::new()
                        .sigma(0.01)
                        .range(0.0, 1000.0)
                        .zero_weight_fallback(fallback)
                        .adapter(Batch)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .smooth(black_box(&x), black_box(&y))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_samples,
    bench_steps,
    bench_sigma,
    bench_spacing,
    bench_traces,
    bench_pathological,
);

criterion_main!(benches);
