#![cfg(feature = "dev")]
//! Tests for the Gaussian kernel.
//!
//! These tests verify the weight function used by the estimator:
//! - Values at known distances
//! - Symmetry and monotone decay
//! - Underflow far from the sample
//!
//! ## Test Organization
//!
//! 1. **Weight Values** - Known points of the Gaussian
//! 2. **Mathematical Properties** - Symmetry, decay, range

use approx::assert_relative_eq;

use trendsmooth::internals::math::kernel::GaussianKernel;

// ============================================================================
// Weight Value Tests
// ============================================================================

/// Kernel stores sigma and the exponent denominator.
#[test]
fn test_kernel_parameters() {
    let k = GaussianKernel::new(0.7_f64);

    assert_eq!(k.sigma(), 0.7);
    assert_relative_eq!(k.two_sigma_sq(), 0.98, epsilon = 1e-15);
}

/// Weights at whole multiples of sigma follow exp(-k^2 / 2).
#[test]
fn test_weight_at_sigma_multiples() {
    let sigma = 1.3_f64;
    let k = GaussianKernel::new(sigma);

    for m in 0..5 {
        let d = m as f64 * sigma;
        let expected = (-(m * m) as f64 / 2.0).exp();
        assert_relative_eq!(k.weight(d, 0.0), expected, max_relative = 1e-12);
    }
}

/// Weight of a coincident sample is exactly one.
#[test]
fn test_weight_at_zero_distance() {
    let k = GaussianKernel::new(0.25_f32);
    assert_eq!(k.weight(-4.5, -4.5), 1.0);
}

// ============================================================================
// Mathematical Property Tests
// ============================================================================

/// K(x, xi) == K(xi, x).
#[test]
fn test_weight_symmetry() {
    let k = GaussianKernel::new(0.7_f64);

    for &(a, b) in &[(0.0, 1.0), (2.5, -1.0), (10.0, 9.3)] {
        assert_eq!(k.weight(a, b), k.weight(b, a));
    }
}

/// Weights decay monotonically with distance and stay in [0, 1].
#[test]
fn test_weight_decay() {
    let k = GaussianKernel::new(0.7_f64);
    let mut prev = k.weight(0.0, 0.0);

    for i in 1..200 {
        let w = k.weight(i as f64 * 0.1, 0.0);
        assert!(w <= prev, "weight increased at distance {}", i as f64 * 0.1);
        assert!((0.0..=1.0).contains(&w));
        prev = w;
    }
}

/// Far samples underflow to exactly zero instead of turning negative or NaN.
#[test]
fn test_weight_underflow() {
    let k = GaussianKernel::new(0.01_f64);
    let w = k.weight(1.0, 0.0);

    assert_eq!(w, 0.0);
    assert!(!w.is_nan());
}
