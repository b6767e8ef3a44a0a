//! Nadaraya-Watson estimation with a Gaussian kernel.
//!
//! ## Purpose
//!
//! This module computes the kernel-weighted average of the sample values at a
//! single query point:
//!
//! ```text
//! f(x) = sum_i y_i * w_i / sum_i w_i,   w_i = exp(-(x - x_i)^2 / (2 * sigma^2))
//! ```
//!
//! ## Design notes
//!
//! * **Single pass**: The weight sum and the weighted value sum are
//!   accumulated together in sample order, which yields the same bits as
//!   computing all weights first and summing afterwards.
//! * **Zero weights**: When the query point is far from every sample relative
//!   to sigma, all weights underflow and the ratio is `0 / 0`. The default
//!   policy lets the resulting NaN through; the others substitute a value.
//!
//! ## Invariants
//!
//! * With a nonzero weight sum the estimate lies in `[min(y), max(y)]`, up to
//!   rounding.
//! * A single sample always estimates to its own value.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not stabilize the computation in log space.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::primitives::grid::cast_count;

// ============================================================================
// Zero Weight Fallback
// ============================================================================

/// Policy for query points where every kernel weight underflowed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroWeightFallback {
    /// Return `0 / 0` (NaN), exactly as the unguarded formula does.
    #[default]
    Propagate,

    /// Return the value of the sample whose x is closest to the query point.
    /// The first such sample wins on ties.
    NearestSample,

    /// Return the arithmetic mean of all sample values.
    SampleMean,
}

impl ZeroWeightFallback {
    /// Get the name of the fallback policy.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ZeroWeightFallback::Propagate => "Propagate",
            ZeroWeightFallback::NearestSample => "NearestSample",
            ZeroWeightFallback::SampleMean => "SampleMean",
        }
    }

    /// Value to report when the weight sum is zero.
    fn resolve<T: Float>(&self, x: T, xi: &[T], yi: &[T], weighted: T, weight_sum: T) -> T {
        match self {
            ZeroWeightFallback::Propagate => weighted / weight_sum,
            ZeroWeightFallback::NearestSample => nearest_value(x, xi, yi).unwrap_or_else(T::nan),
            ZeroWeightFallback::SampleMean => {
                if yi.is_empty() {
                    return T::nan();
                }
                let total = yi.iter().fold(T::zero(), |acc, &v| acc + v);
                total / cast_count::<T>(yi.len())
            }
        }
    }
}

/// Value of the sample closest to `x`.
fn nearest_value<T: Float>(x: T, xi: &[T], yi: &[T]) -> Option<T> {
    let mut best: Option<(T, T)> = None;
    for (&sx, &sy) in xi.iter().zip(yi) {
        let distance = (x - sx).abs();
        match best {
            Some((d, _)) if distance >= d => {}
            _ => best = Some((distance, sy)),
        }
    }
    best.map(|(_, y)| y)
}

// ============================================================================
// Estimator
// ============================================================================

/// Kernel-weighted average of `yi` at the query point `x`.
///
/// `xi` and `yi` are expected to have equal, nonzero length.
#[inline]
pub fn estimate<T: Float>(
    x: T,
    xi: &[T],
    yi: &[T],
    kernel: &GaussianKernel<T>,
    fallback: ZeroWeightFallback,
) -> T {
    let mut weight_sum = T::zero();
    let mut weighted = T::zero();

    for (&sx, &sy) in xi.iter().zip(yi) {
        let w = kernel.weight(x, sx);
        weight_sum = weight_sum + w;
        weighted = weighted + sy * w;
    }

    if weight_sum == T::zero() {
        return fallback.resolve(x, xi, yi, weighted, weight_sum);
    }

    weighted / weight_sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_propagates_nan_by_default() {
        let k = GaussianKernel::new(0.01_f64);
        let v = estimate(1.0e3, &[0.0, 1.0], &[2.0, 4.0], &k, ZeroWeightFallback::Propagate);
        assert!(v.is_nan());
    }

    #[test]
    fn nearest_sample_prefers_first_on_ties() {
        let k = GaussianKernel::new(0.01_f64);
        let v = estimate(
            50.0,
            &[0.0, 100.0],
            &[2.0, 4.0],
            &k,
            ZeroWeightFallback::NearestSample,
        );
        assert_eq!(v, 2.0);
    }

    #[test]
    fn sample_mean_fallback() {
        let k = GaussianKernel::new(0.01_f64);
        let v = estimate(
            -500.0,
            &[0.0, 1.0, 2.0],
            &[3.0, 6.0, 9.0],
            &k,
            ZeroWeightFallback::SampleMean,
        );
        assert_eq!(v, 6.0);
    }
}
