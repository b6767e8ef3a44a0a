//! # trendsmooth — Gaussian kernel smoothing for trend curves
//!
//! Turns a sparse, noisy `(x, y)` trend curve into a densely resampled smooth
//! curve ready for plotting, using a Nadaraya-Watson estimator with a
//! Gaussian kernel.
//!
//! ## What is kernel smoothing?
//!
//! The value of the curve at a point `x` is the weighted average of all
//! observed values, each weighted by how close its sample lies to `x`:
//!
//! ```text
//! f(x) = sum_i y_i * w_i / sum_i w_i,   w_i = exp(-(x - x_i)^2 / (2 * sigma^2))
//! ```
//!
//! The bandwidth `sigma` sets how far the averaging reaches; larger values
//! give smoother curves.
//!
//! ## Quick Start
//!
//! ### One-shot
//!
//! ```rust
//! use trendsmooth::prelude::*;
//!
//! let t = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let v = vec![1.0, 2.5, 2.0, 3.5, 3.0];
//!
//! // 11 points from 0 to 4 with sigma = 0.7
//! let (grid, fitted) = kernel_smooth(&t, &v, 4.0, 0.0, 11, 0.7)?;
//! assert_eq!(grid.len(), 11);
//! assert_eq!(fitted.len(), 11);
//!
//! // A single point of the smoothed curve
//! let mid = interpolate(2.0, &t, &v, 0.7)?;
//! assert!(mid > 1.0 && mid < 3.5);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use trendsmooth::prelude::*;
//!
//! let t = vec![0.5, 1.0, 2.0, 3.0, 6.0];
//! let v = vec![0.1, 0.4, 0.3, 0.8, 0.9];
//!
//! let smoother = KernelSmoother::new()
//!     .sigma(0.7)                          // Kernel bandwidth
//!     .steps(200)                          // Grid points
//!     .bounds(OriginToLast)                // From 0 to the last sample's x
//!     .spacing(Direct)                     // start + i * step
//!     .zero_weight_fallback(NearestSample) // Recover from underflowed weights
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = smoother.smooth(&t, &v)?;
//! assert_eq!(result.x[0], 0.0);
//! println!("{}", result);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, SmoothError>`. All errors are
//! invalid-argument conditions: empty or mismatched samples, non-finite
//! values, `sigma <= 0` or `steps < 2`.
//!
//! ```rust
//! use trendsmooth::prelude::*;
//!
//! let err = kernel_smooth(&[0.0, 1.0], &[1.0, 2.0], 1.0, 0.0, 1, 0.7).unwrap_err();
//! assert!(err.is_invalid_argument());
//! assert_eq!(err, SmoothError::TooFewSteps { got: 1, min: 2 });
//! ```
//!
//! ## Features
//!
//! * `std` (default): standard library support. Without it the crate is
//!   `no_std` + `alloc`.
//! * `parallel`: evaluate grid points with rayon when `.parallel(true)` is set.
//! * `serde`: the `Traces` adapter for trajectory responses
//!   (`dataset_name_to_traces`).
//! * `dev`: exposes the `internals` module for tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors and grid construction.
mod primitives;

// Layer 2: Math - the Gaussian kernel.
mod math;

// Layer 3: Algorithms - the Nadaraya-Watson estimator.
mod algorithms;

// Layer 4: Engine - validation, execution and output.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

pub use api::{DEFAULT_SIGMA, DEFAULT_STEPS, interpolate, kernel_smooth};

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "serde")]
    pub use crate::api::{
        DatasetTraces, Traces, TracesSmoother, TrajectoryResponse, TrajectoryTrace,
    };
    pub use crate::api::{
        Adapter::Batch,
        BatchSmoother,
        GridBounds::{self, DataExtent, OriginToLast},
        GridSpacing::{self, Accumulated, Direct},
        KernelSmootherBuilder as KernelSmoother,
        SmoothError, SmoothResult,
        ZeroWeightFallback::{self, NearestSample, Propagate, SampleMean},
        interpolate, kernel_smooth,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
