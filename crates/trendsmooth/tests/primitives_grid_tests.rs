#![cfg(feature = "dev")]
//! Tests for resampling grid construction.
//!
//! These tests verify:
//! - Grid length and endpoints for both spacing modes
//! - Bit-level parity of accumulated grids with repeated addition
//! - Resolution of grid bounds from samples
//!
//! ## Test Organization
//!
//! 1. **Step Size** - Step computation
//! 2. **Grid Construction** - Direct and accumulated spacing
//! 3. **Bounds Resolution** - Explicit, origin-to-last, data extent

use approx::assert_relative_eq;

use trendsmooth::internals::primitives::grid::{GridBounds, GridSpacing, build_grid, step_size};

// ============================================================================
// Step Size Tests
// ============================================================================

/// Step is (stop - start) / (steps - 1).
#[test]
fn test_step_size() {
    assert_eq!(step_size(0.0_f64, 10.0, 11), 1.0);
    assert_eq!(step_size(4.0_f64, 2.0, 3), -1.0);
    assert_eq!(step_size(1.0_f64, 1.0, 5), 0.0);
}

// ============================================================================
// Grid Construction Tests
// ============================================================================

/// Both spacing modes give `steps` points starting at `start`.
#[test]
fn test_grid_length_and_start() {
    for spacing in [GridSpacing::Direct, GridSpacing::Accumulated] {
        for steps in [2, 3, 17, 1000] {
            let grid = build_grid(-1.5_f64, 3.25, steps, spacing);
            assert_eq!(grid.len(), steps);
            assert_eq!(grid[0], -1.5);
            assert_relative_eq!(grid[steps - 1], 3.25, epsilon = 1e-9);
        }
    }
}

/// Accumulated spacing is bit-identical to repeated addition.
#[test]
fn test_accumulated_bit_parity() {
    let (start, stop, steps) = (0.0_f64, 7.3, 1000);
    let grid = build_grid(start, stop, steps, GridSpacing::Accumulated);

    let step = (stop - start) / (steps - 1) as f64;
    let mut expected = start;
    for &g in &grid {
        assert_eq!(g.to_bits(), expected.to_bits());
        expected += step;
    }
}

/// Direct spacing computes each point independently.
#[test]
fn test_direct_no_drift() {
    let (start, stop, steps) = (0.0_f64, 7.3, 1000);
    let grid = build_grid(start, stop, steps, GridSpacing::Direct);

    let step = (stop - start) / (steps - 1) as f64;
    for (i, &g) in grid.iter().enumerate() {
        assert_eq!(g, start + i as f64 * step);
    }
}

/// A zero-width interval repeats the start value.
#[test]
fn test_degenerate_interval() {
    let grid = build_grid(2.0_f64, 2.0, 4, GridSpacing::Direct);
    assert_eq!(grid, vec![2.0; 4]);
}

/// Spacing names.
#[test]
fn test_spacing_names() {
    assert_eq!(GridSpacing::default(), GridSpacing::Direct);
    assert_eq!(GridSpacing::Direct.name(), "Direct");
    assert_eq!(GridSpacing::Accumulated.name(), "Accumulated");
}

// ============================================================================
// Bounds Resolution Tests
// ============================================================================

/// Each bounds mode resolves as documented.
#[test]
fn test_bounds_resolution() {
    let x = [2.0_f64, -1.0, 8.0, 4.0];

    assert_eq!(
        GridBounds::Explicit {
            start: 1.0,
            stop: 3.0
        }
        .resolve(&x),
        Some((1.0, 3.0))
    );
    assert_eq!(GridBounds::OriginToLast.resolve(&x), Some((0.0, 4.0)));
    assert_eq!(GridBounds::DataExtent.resolve(&x), Some((-1.0, 8.0)));
    assert_eq!(GridBounds::<f64>::default(), GridBounds::OriginToLast);
}

/// Sample-dependent bounds need samples.
#[test]
fn test_bounds_on_empty_samples() {
    let empty: [f64; 0] = [];

    assert_eq!(GridBounds::OriginToLast.resolve(&empty), None);
    assert_eq!(GridBounds::DataExtent.resolve(&empty), None);
    assert_eq!(
        GridBounds::Explicit {
            start: 0.0,
            stop: 1.0
        }
        .resolve(&empty),
        Some((0.0, 1.0))
    );
}
