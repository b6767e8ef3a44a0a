#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify the executor directly, bypassing the builder:
//! - Grid construction from a resolved configuration
//! - Evaluation at arbitrary query points
//! - Metadata carried into the result
//!
//! ## Test Organization
//!
//! 1. **Run** - Full resampling from a configuration
//! 2. **Evaluate** - Point evaluation

use approx::assert_relative_eq;

use trendsmooth::internals::algorithms::nadaraya_watson::ZeroWeightFallback;
use trendsmooth::internals::engine::executor::{SmoothConfig, SmoothExecutor};
use trendsmooth::internals::math::kernel::GaussianKernel;
use trendsmooth::internals::primitives::grid::{GridBounds, GridSpacing};

// ============================================================================
// Helper Functions
// ============================================================================

fn config(steps: usize, spacing: GridSpacing) -> SmoothConfig<f64> {
    SmoothConfig {
        sigma: 0.7,
        steps,
        bounds: GridBounds::OriginToLast,
        spacing,
        zero_weight_fallback: ZeroWeightFallback::Propagate,
        parallel: false,
    }
}

// ============================================================================
// Run Tests
// ============================================================================

/// The result carries the grid, fitted values and configuration metadata.
#[test]
fn test_run_metadata() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 2.0, 1.5, 2.5];

    let res = SmoothExecutor::run(&config(7, GridSpacing::Direct), &x, &y, 0.0, 3.0);

    assert_eq!(res.len(), 7);
    assert_eq!(res.y.len(), 7);
    assert_eq!(res.samples, 4);
    assert_eq!(res.sigma, 0.7);
    assert_eq!(res.spacing, Some(GridSpacing::Direct));
    assert_eq!(res.zero_weight_fallback, ZeroWeightFallback::Propagate);
    assert_eq!(res.x[0], 0.0);
    assert_relative_eq!(res.x[6], 3.0, epsilon = 1e-12);
}

/// Fitted values stay within the sample range.
#[test]
fn test_run_within_sample_range() {
    let x = [0.0, 0.5, 1.7, 2.2, 4.0];
    let y = [-1.0, 3.0, 0.5, 2.0, 1.0];

    let res = SmoothExecutor::run(&config(50, GridSpacing::Accumulated), &x, &y, 0.0, 4.0);

    for &v in &res.y {
        assert!((-1.0..=3.0).contains(&v), "value {} out of range", v);
    }
}

// ============================================================================
// Evaluate Tests
// ============================================================================

/// Query points are evaluated in the order given.
#[test]
fn test_evaluate_preserves_query_order() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];
    let kernel = GaussianKernel::new(0.5);

    let forward = SmoothExecutor::evaluate(
        &[0.0, 1.0, 2.0],
        &x,
        &y,
        &kernel,
        ZeroWeightFallback::Propagate,
        false,
    );
    let backward = SmoothExecutor::evaluate(
        &[2.0, 1.0, 0.0],
        &x,
        &y,
        &kernel,
        ZeroWeightFallback::Propagate,
        false,
    );

    assert_eq!(forward.len(), 3);
    for i in 0..3 {
        assert_eq!(forward[i], backward[2 - i]);
    }
    assert!(forward[0] < forward[1] && forward[1] < forward[2]);
}

/// No query points, no output.
#[test]
fn test_evaluate_empty_queries() {
    let kernel = GaussianKernel::new(0.7);
    let out = SmoothExecutor::evaluate(
        &[],
        &[0.0],
        &[1.0],
        &kernel,
        ZeroWeightFallback::Propagate,
        false,
    );
    assert!(out.is_empty());
}

/// The parallel hint never changes results.
#[test]
fn test_evaluate_parallel_hint() {
    let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let q: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
    let kernel = GaussianKernel::new(0.7);

    let seq = SmoothExecutor::evaluate(&q, &x, &y, &kernel, ZeroWeightFallback::Propagate, false);
    let par = SmoothExecutor::evaluate(&q, &x, &y, &kernel, ZeroWeightFallback::Propagate, true);

    assert_eq!(seq, par);
}
