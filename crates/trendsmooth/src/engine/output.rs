//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines `SmoothResult`, the resampled curve together with the
//! parameters that produced it.
//!
//! ## Design notes
//!
//! * **Plot-ready**: `x` and `y` are parallel vectors that can be handed to a
//!   plotting collaborator as they are.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * `x` is in grid order (ascending unless `start > stop`), or in query order
//!   for point evaluations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::nadaraya_watson::ZeroWeightFallback;
use crate::primitives::grid::GridSpacing;

// ============================================================================
// Result Structure
// ============================================================================

/// A smoothed, resampled trend curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothResult<T> {
    /// Grid (or query) x-values.
    pub x: Vec<T>,

    /// Smoothed value at each x.
    pub y: Vec<T>,

    /// Bandwidth used.
    pub sigma: T,

    /// Number of input samples.
    pub samples: usize,

    /// Grid construction mode; `None` for caller-supplied query points.
    pub spacing: Option<GridSpacing>,

    /// Policy applied where every weight underflowed.
    pub zero_weight_fallback: ZeroWeightFallback,
}

impl<T: Float> SmoothResult<T> {
    /// Number of output points.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` when there are no output points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Number of outputs that are not finite (all weights underflowed under
    /// `ZeroWeightFallback::Propagate`).
    pub fn undefined_points(&self) -> usize {
        self.y.iter().filter(|v| !v.is_finite()).count()
    }

    /// Split into `(x, y)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.y)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:     {}", self.samples)?;
        writeln!(f, "  Grid points: {}", self.len())?;
        writeln!(f, "  Sigma:       {}", self.sigma)?;
        if let Some(spacing) = self.spacing {
            writeln!(f, "  Spacing:     {}", spacing.name())?;
        }
        let undefined = self.undefined_points();
        if undefined > 0 {
            writeln!(
                f,
                "  Undefined:   {} ({})",
                undefined,
                self.zero_weight_fallback.name()
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>10} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "{:-<23}", "")?;

        // Show first 10 and last 10 rows of long curves
        let n = self.len();
        let write_row = |f: &mut Formatter<'_>, i: usize| -> Result {
            let x = self.x[i].to_f64().unwrap_or(f64::NAN);
            let y = self.y[i].to_f64().unwrap_or(f64::NAN);
            writeln!(f, "{:>10.4} {:>12.6}", x, y)
        };

        if n <= 20 {
            for i in 0..n {
                write_row(f, i)?;
            }
        } else {
            for i in 0..10 {
                write_row(f, i)?;
            }
            writeln!(f, "{:>10}", "...")?;
            for i in n - 10..n {
                write_row(f, i)?;
            }
        }

        Ok(())
    }
}
