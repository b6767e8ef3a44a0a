//! Batch adapter for smoothing a single trend curve.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it takes one complete
//! set of `(x, y)` samples, validates it, resolves the grid bounds and
//! resamples the smoothed curve on the grid, or evaluates it at caller
//! supplied query points.
//!
//! ## Design notes
//!
//! * **Processing**: The whole sample set is held in memory and every output
//!   point sees every sample (the Gaussian kernel has unbounded support).
//! * **Order**: Samples are used in input order; no sorting is needed.
//! * **Delegation**: Computation is delegated to the execution engine.
//!
//! ## Invariants
//!
//! * Input samples must have the same non-zero length and be finite.
//! * `sigma > 0` and `steps >= 2` once `build()` succeeds.
//! * The output grid has exactly `steps` points.
//!
//! ## Non-goals
//!
//! * This adapter does not handle named trajectory traces (use the traces adapter).

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::nadaraya_watson::ZeroWeightFallback;
use crate::engine::executor::{SmoothConfig, SmoothExecutor};
use crate::engine::output::SmoothResult;
use crate::engine::validator::Validator;
use crate::math::kernel::GaussianKernel;
use crate::primitives::errors::SmoothError;
use crate::primitives::grid::{GridBounds, GridSpacing};

/// Bandwidth used by the trajectory trend view.
pub const DEFAULT_SIGMA: f64 = 0.7;

/// Grid size used by the trajectory trend view.
pub const DEFAULT_STEPS: usize = 1000;

// ============================================================================
// Batch Smoother Builder
// ============================================================================

/// Builder for the batch smoother.
#[derive(Debug, Clone)]
pub struct BatchSmootherBuilder<T> {
    /// Kernel bandwidth
    pub sigma: T,

    /// Number of grid points
    pub steps: usize,

    /// Source of the grid interval
    pub bounds: GridBounds<T>,

    /// Grid construction mode
    pub spacing: GridSpacing,

    /// Policy for all-zero weight vectors
    pub zero_weight_fallback: ZeroWeightFallback,

    /// Parallel execution hint
    pub parallel: bool,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchSmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchSmootherBuilder<T> {
    /// Create a new batch builder with the trajectory view defaults.
    fn new() -> Self {
        Self {
            sigma: T::from(DEFAULT_SIGMA).unwrap_or_else(T::one),
            steps: DEFAULT_STEPS,
            bounds: GridBounds::default(),
            spacing: GridSpacing::default(),
            zero_weight_fallback: ZeroWeightFallback::default(),
            parallel: false,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the kernel bandwidth.
    pub fn sigma(mut self, sigma: T) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the number of grid points.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Resample over the fixed interval `[start, stop]`.
    pub fn range(mut self, start: T, stop: T) -> Self {
        self.bounds = GridBounds::Explicit { start, stop };
        self
    }

    /// Set how the grid interval is chosen.
    pub fn bounds(mut self, bounds: GridBounds<T>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the grid construction mode.
    pub fn spacing(mut self, spacing: GridSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the policy for query points where every weight underflowed.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.zero_weight_fallback = policy;
        self
    }

    /// Evaluate grid points in parallel (requires the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the smoother.
    pub fn build(self) -> Result<BatchSmoother<T>, SmoothError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_sigma(self.sigma)?;
        Validator::validate_steps(self.steps)?;

        if let GridBounds::Explicit { start, stop } = self.bounds {
            Validator::validate_bounds(start, stop)?;
        }

        Ok(BatchSmoother {
            config: SmoothConfig {
                sigma: self.sigma,
                steps: self.steps,
                bounds: self.bounds,
                spacing: self.spacing,
                zero_weight_fallback: self.zero_weight_fallback,
                parallel: self.parallel,
            },
        })
    }
}

// ============================================================================
// Batch Smoother
// ============================================================================

/// Validated batch smoother. Reusable across sample sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSmoother<T> {
    config: SmoothConfig<T>,
}

impl<T: Float + Debug + Send + Sync> BatchSmoother<T> {
    /// The validated configuration.
    pub fn config(&self) -> &SmoothConfig<T> {
        &self.config
    }

    /// Resample the smoothed curve of `(x, y)` on the configured grid.
    pub fn smooth(&self, x: &[T], y: &[T]) -> Result<SmoothResult<T>, SmoothError> {
        Validator::validate_inputs(x, y)?;

        let (start, stop) = self
            .config
            .bounds
            .resolve(x)
            .ok_or(SmoothError::EmptyInput)?;
        Validator::validate_bounds(start, stop)?;

        debug!(start = ?start, stop = ?stop, "resolved grid bounds");

        Ok(SmoothExecutor::run(&self.config, x, y, start, stop))
    }

    /// Evaluate the smoothed curve of `(x, y)` at each query point.
    pub fn smooth_at(&self, queries: &[T], x: &[T], y: &[T]) -> Result<SmoothResult<T>, SmoothError> {
        Validator::validate_inputs(x, y)?;
        Validator::validate_queries(queries)?;

        let kernel = GaussianKernel::new(self.config.sigma);
        let fitted = SmoothExecutor::evaluate(
            queries,
            x,
            y,
            &kernel,
            self.config.zero_weight_fallback,
            self.config.parallel,
        );

        Ok(SmoothResult {
            x: queries.to_vec(),
            y: fitted,
            sigma: self.config.sigma,
            samples: x.len(),
            spacing: None,
            zero_weight_fallback: self.config.zero_weight_fallback,
        })
    }
}
