//! Resampling grid construction.
//!
//! ## Purpose
//!
//! This module builds the evenly spaced x-grid a trend curve is resampled on,
//! and resolves the grid bounds from the sample set when the caller does not
//! give them explicitly.
//!
//! ## Design notes
//!
//! * **Spacing**: `Direct` computes `start + i * step` per index. `Accumulated`
//!   adds `step` repeatedly, which reproduces the rounding drift of the
//!   browser client bit for bit.
//! * **Bounds**: `OriginToLast` is what the trajectory view used: the grid
//!   starts at time zero and ends at the x of the last sample in input order,
//!   which is not necessarily the maximum.
//!
//! ## Invariants
//!
//! * The grid has exactly `steps` points and `grid[0] == start`.
//! * `steps >= 2` (enforced by the validator before this module is reached).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Grid Spacing
// ============================================================================

/// How grid points are derived from the step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSpacing {
    /// `x[i] = start + i * step`.
    #[default]
    Direct,

    /// `x[i] = x[i - 1] + step`, accumulating rounding error like the
    /// browser client.
    Accumulated,
}

impl GridSpacing {
    /// Get the name of the spacing mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            GridSpacing::Direct => "Direct",
            GridSpacing::Accumulated => "Accumulated",
        }
    }
}

// ============================================================================
// Grid Bounds
// ============================================================================

/// Source of the `[start, stop]` resampling interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridBounds<T> {
    /// Fixed interval supplied by the caller.
    Explicit {
        /// First grid point.
        start: T,
        /// Last grid point.
        stop: T,
    },

    /// `start = 0`, `stop` = x of the last sample in input order.
    OriginToLast,

    /// `start = min(x)`, `stop = max(x)`.
    DataExtent,
}

impl<T> Default for GridBounds<T> {
    fn default() -> Self {
        GridBounds::OriginToLast
    }
}

impl<T: Float> GridBounds<T> {
    /// Resolve the interval against a non-empty sample set.
    ///
    /// Returns `None` only when `x` is empty and the bounds depend on it.
    pub fn resolve(&self, x: &[T]) -> Option<(T, T)> {
        match *self {
            GridBounds::Explicit { start, stop } => Some((start, stop)),
            GridBounds::OriginToLast => x.last().map(|&last| (T::zero(), last)),
            GridBounds::DataExtent => {
                let first = *x.first()?;
                Some(
                    x.iter()
                        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
                )
            }
        }
    }
}

// ============================================================================
// Grid Construction
// ============================================================================

/// Convert a count to the working float type.
#[inline]
pub(crate) fn cast_count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::infinity)
}

/// Distance between consecutive grid points: `(stop - start) / (steps - 1)`.
#[inline]
pub fn step_size<T: Float>(start: T, stop: T, steps: usize) -> T {
    (stop - start) / cast_count::<T>(steps.saturating_sub(1))
}

/// Build `steps` evenly spaced points over `[start, stop]`.
pub fn build_grid<T: Float>(start: T, stop: T, steps: usize, spacing: GridSpacing) -> Vec<T> {
    let step = step_size(start, stop, steps);
    let mut grid = Vec::with_capacity(steps);

    match spacing {
        GridSpacing::Direct => {
            for i in 0..steps {
                grid.push(start + cast_count::<T>(i) * step);
            }
        }
        GridSpacing::Accumulated => {
            let mut current = start;
            for _ in 0..steps {
                grid.push(current);
                current = current + step;
            }
        }
    }

    grid
}
