//! Gaussian kernel for trend smoothing.
//!
//! ## Purpose
//!
//! This module maps the distance between a query point and each sample to an
//! unnormalized Gaussian weight `exp(-(x - x_i)^2 / (2 * sigma^2))`.
//!
//! ## Design notes
//!
//! * **Order of operations**: The weight is evaluated as `d = x - x_i`,
//!   `d *= -d`, `exp(d / (2 * sigma^2))`. Reordering the arithmetic would
//!   change the last bits of the result, so it is kept fixed.
//! * **No cutoff**: Weights are allowed to underflow to zero. Recovery from an
//!   all-zero weight vector is the estimator's business.
//!
//! ## Invariants
//!
//! * Weights are in `[0, 1]` and symmetric in `x - x_i`.
//! * `weight(x, x) == 1` exactly.
//!
//! ## Non-goals
//!
//! * This module does not normalize weights.
//! * This module does not validate sigma (handled by `validator`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Gaussian kernel with a fixed bandwidth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    /// Bandwidth.
    sigma: T,

    /// Precomputed `2 * sigma^2`.
    two_sigma_sq: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel with bandwidth `sigma`.
    #[inline]
    pub fn new(sigma: T) -> Self {
        let two = T::one() + T::one();
        Self {
            sigma,
            two_sigma_sq: two * sigma.powi(2),
        }
    }

    /// Bandwidth of the kernel.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Denominator of the exponent, `2 * sigma^2`.
    #[inline]
    pub fn two_sigma_sq(&self) -> T {
        self.two_sigma_sq
    }

    /// Unnormalized weight of a sample at `xi` for the query point `x`.
    #[inline]
    pub fn weight(&self, x: T, xi: T) -> T {
        let mut d = x - xi;
        d = d * -d;
        (d / self.two_sigma_sq).exp()
    }
}
