//! Reproducible data generators for the trendsmooth benchmarks.

use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use trendsmooth::prelude::{DatasetTraces, TrajectoryTrace};

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate smooth sinusoidal data with Gaussian noise.
pub fn generate_sine_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate a trajectory trend: one sample per half day over 18 days.
pub fn generate_trend_data(seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    let x: Vec<f64> = (0..37).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&t| (1.0 / (1.0 + (-(t - 9.0)).exp()) + noise_dist.sample(&mut rng)).max(0.0))
        .collect();
    (x, y)
}

/// Generate clustered x-values (groups with tiny spacing).
pub fn generate_clustered_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();

    let x: Vec<f64> = (0..size)
        .map(|i| (i / 100) as f64 + (i % 100) as f64 * 1e-6)
        .collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate a response with `datasets` datasets of `traces` traces each.
pub fn generate_response(datasets: usize, traces: usize, seed: u64) -> DatasetTraces {
    let mut rng = StdRng::seed_from_u64(seed);
    let jitter = Uniform::new(0.0, 1000.0).unwrap();

    let mut map = DatasetTraces::new();
    for d in 0..datasets {
        let list = (0..traces)
            .map(|t| {
                let (x, y) = generate_trend_data(jitter.sample(&mut rng) as u64);
                TrajectoryTrace::new(format!("feature_{}", t), x, y)
            })
            .collect();
        map.insert(format!("dataset_{}", d), list);
    }
    map
}
