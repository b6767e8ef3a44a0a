//! Execution engine for kernel smoothing.
//!
//! ## Purpose
//!
//! This module evaluates the Nadaraya-Watson estimator at every point of a
//! resampling grid or a caller-supplied set of query points. It is the single
//! place where the grid is built, the kernel is instantiated, and the
//! sequential or parallel evaluation strategy is chosen.
//!
//! ## Design notes
//!
//! * Each output point depends only on its own query point and the full
//!   sample set, so parallel evaluation yields the same bits as sequential.
//! * Parallelism is opt-in and only available with the `parallel` feature.
//!
//! ## Invariants
//!
//! * `x.len() == y.len() >= 1`, `sigma > 0`, `steps >= 2` (the caller has
//!   run the validator).
//! * Output length equals the number of query points.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::nadaraya_watson::{ZeroWeightFallback, estimate};
use crate::engine::output::SmoothResult;
use crate::math::kernel::GaussianKernel;
use crate::primitives::grid::{GridBounds, GridSpacing, build_grid};

// ============================================================================
// Configuration
// ============================================================================

/// Resolved smoothing configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothConfig<T> {
    /// Kernel bandwidth.
    pub sigma: T,

    /// Number of grid points.
    pub steps: usize,

    /// Source of the grid interval.
    pub bounds: GridBounds<T>,

    /// Grid construction mode.
    pub spacing: GridSpacing,

    /// Policy for all-zero weight vectors.
    pub zero_weight_fallback: ZeroWeightFallback,

    /// Evaluate grid points in parallel.
    pub parallel: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless evaluator for the smoothing engine.
pub struct SmoothExecutor;

impl SmoothExecutor {
    /// Resample `(x, y)` on the configured grid.
    ///
    /// The grid bounds must already resolve against `x` (non-empty samples).
    pub fn run<T: Float + Send + Sync>(
        config: &SmoothConfig<T>,
        x: &[T],
        y: &[T],
        start: T,
        stop: T,
    ) -> SmoothResult<T> {
        debug!(
            samples = x.len(),
            steps = config.steps,
            spacing = config.spacing.name(),
            parallel = config.parallel,
            "resampling trend curve"
        );

        let grid = build_grid(start, stop, config.steps, config.spacing);
        let kernel = GaussianKernel::new(config.sigma);
        let fitted = Self::evaluate(
            &grid,
            x,
            y,
            &kernel,
            config.zero_weight_fallback,
            config.parallel,
        );

        SmoothResult {
            x: grid,
            y: fitted,
            sigma: config.sigma,
            samples: x.len(),
            spacing: Some(config.spacing),
            zero_weight_fallback: config.zero_weight_fallback,
        }
    }

    /// Evaluate the estimator at each query point.
    pub fn evaluate<T: Float + Send + Sync>(
        queries: &[T],
        x: &[T],
        y: &[T],
        kernel: &GaussianKernel<T>,
        fallback: ZeroWeightFallback,
        parallel: bool,
    ) -> Vec<T> {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                trace!(queries = queries.len(), "parallel evaluation");
                return queries
                    .par_iter()
                    .map(|&q| estimate(q, x, y, kernel, fallback))
                    .collect();
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            if parallel {
                trace!("parallel evaluation requested without the `parallel` feature");
            }
        }

        queries
            .iter()
            .map(|&q| estimate(q, x, y, kernel, fallback))
            .collect()
    }
}
