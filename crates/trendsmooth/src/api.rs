//! High-level API for kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the two one-shot
//! functions [`interpolate`] and [`kernel_smooth`], and a fluent builder for
//! configuring the smoother and choosing an execution adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default matching the trajectory
//!   trend view (sigma 0.7, 1000 grid points from time zero to the last
//!   sample).
//! * **Polymorphic**: Marker types select the adapter builder.
//! * **Validated**: Parameters are validated when `.build()` is called.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelSmootherBuilder`] via `KernelSmoother::new()`.
//! 2. Chain configuration methods (`.sigma()`, `.steps()`, `.range()`, ...).
//! 3. Select an adapter via `.adapter(Batch)` and call `.build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::nadaraya_watson::estimate;
use crate::engine::validator::Validator;
use crate::math::kernel::GaussianKernel;

// Publicly re-exported types
pub use crate::adapters::batch::{
    BatchSmoother, BatchSmootherBuilder, DEFAULT_SIGMA, DEFAULT_STEPS,
};
#[cfg(feature = "serde")]
pub use crate::adapters::traces::{
    DatasetTraces, TracesSmoother, TracesSmootherBuilder, TrajectoryResponse, TrajectoryTrace,
};
pub use crate::algorithms::nadaraya_watson::ZeroWeightFallback;
pub use crate::engine::output::SmoothResult;
pub use crate::primitives::errors::SmoothError;
pub use crate::primitives::grid::{GridBounds, GridSpacing};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::Batch;
    #[cfg(feature = "serde")]
    pub use super::Traces;
}

// ============================================================================
// One-shot Functions
// ============================================================================

/// Gaussian-kernel weighted average of `yi` at the query point `x`.
///
/// # Errors
///
/// Fails with an invalid-argument error when the samples are empty, of
/// unequal length or non-finite, when `x` is non-finite, or when `sigma` is
/// not positive.
pub fn interpolate<T: Float>(x: T, xi: &[T], yi: &[T], sigma: T) -> Result<T, SmoothError> {
    Validator::validate_inputs(xi, yi)?;
    Validator::validate_scalar(x, "x")?;
    Validator::validate_sigma(sigma)?;

    let kernel = GaussianKernel::new(sigma);
    Ok(estimate(x, xi, yi, &kernel, ZeroWeightFallback::Propagate))
}

/// Resample the smoothed curve of `(xi, yi)` on `steps` evenly spaced points
/// from `start` to `stop`.
///
/// Grid points are computed as `start + i * step`. Use the builder with
/// [`GridSpacing::Accumulated`] to reproduce a grid built by repeated
/// addition.
///
/// # Errors
///
/// As for [`interpolate`], plus `steps < 2` and non-finite bounds.
pub fn kernel_smooth<T: Float + Debug + Send + Sync>(
    xi: &[T],
    yi: &[T],
    stop: T,
    start: T,
    steps: usize,
    sigma: T,
) -> Result<(Vec<T>, Vec<T>), SmoothError> {
    let smoother = KernelSmootherBuilder::new()
        .sigma(sigma)
        .steps(steps)
        .range(start, stop)
        .adapter(Batch)
        .build()?;

    Ok(smoother.smooth(xi, yi)?.into_parts())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the smoother and its execution mode.
#[derive(Debug, Clone)]
pub struct KernelSmootherBuilder<T> {
    /// Kernel bandwidth.
    pub sigma: Option<T>,

    /// Number of grid points.
    pub steps: Option<usize>,

    /// Source of the grid interval.
    pub bounds: Option<GridBounds<T>>,

    /// Grid construction mode.
    pub spacing: Option<GridSpacing>,

    /// Behavior when every kernel weight underflows (default: Propagate).
    pub zero_weight_fallback: Option<ZeroWeightFallback>,

    /// Parallel execution hint.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KernelSmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KernelSmootherBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SmootherAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            sigma: None,
            steps: None,
            bounds: None,
            spacing: None,
            zero_weight_fallback: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the kernel bandwidth.
    pub fn sigma(mut self, sigma: T) -> Self {
        if self.sigma.is_some() {
            self.duplicate_param = Some("sigma");
        }
        self.sigma = Some(sigma);
        self
    }

    /// Set the number of grid points.
    pub fn steps(mut self, steps: usize) -> Self {
        if self.steps.is_some() {
            self.duplicate_param = Some("steps");
        }
        self.steps = Some(steps);
        self
    }

    /// Resample over the fixed interval `[start, stop]`.
    pub fn range(self, start: T, stop: T) -> Self {
        self.bounds(GridBounds::Explicit { start, stop })
    }

    /// Set how the grid interval is chosen.
    pub fn bounds(mut self, bounds: GridBounds<T>) -> Self {
        if self.bounds.is_some() {
            self.duplicate_param = Some("bounds");
        }
        self.bounds = Some(bounds);
        self
    }

    /// Set the grid construction mode.
    pub fn spacing(mut self, spacing: GridSpacing) -> Self {
        if self.spacing.is_some() {
            self.duplicate_param = Some("spacing");
        }
        self.spacing = Some(spacing);
        self
    }

    /// Set behavior for query points where every weight underflowed.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        if self.zero_weight_fallback.is_some() {
            self.duplicate_param = Some("zero_weight_fallback");
        }
        self.zero_weight_fallback = Some(policy);
        self
    }

    /// Set parallel execution hint (effective with the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Trait for transitioning from the generic builder to an execution builder.
pub trait SmootherAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`KernelSmootherBuilder`] into a specialized execution builder.
    fn convert(builder: KernelSmootherBuilder<T>) -> Self::Output;
}

/// Marker for single-curve batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> SmootherAdapter<T> for Batch {
    type Output = BatchSmootherBuilder<T>;

    fn convert(builder: KernelSmootherBuilder<T>) -> Self::Output {
        let mut result = BatchSmootherBuilder::default();

        if let Some(sigma) = builder.sigma {
            result.sigma = sigma;
        }
        if let Some(steps) = builder.steps {
            result.steps = steps;
        }
        if let Some(bounds) = builder.bounds {
            result.bounds = bounds;
        }
        if let Some(spacing) = builder.spacing {
            result.spacing = spacing;
        }
        if let Some(zwf) = builder.zero_weight_fallback {
            result.zero_weight_fallback = zwf;
        }
        if let Some(p) = builder.parallel {
            result.parallel = p;
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for smoothing trajectory traces grouped by dataset.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy)]
pub struct Traces;

#[cfg(feature = "serde")]
impl SmootherAdapter<f64> for Traces {
    type Output = TracesSmootherBuilder;

    fn convert(builder: KernelSmootherBuilder<f64>) -> Self::Output {
        TracesSmootherBuilder {
            batch: <Batch as SmootherAdapter<f64>>::convert(builder),
        }
    }
}
