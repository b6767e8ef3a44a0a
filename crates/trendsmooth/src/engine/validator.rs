//! Input validation for smoothing parameters and samples.
//!
//! ## Purpose
//!
//! This module rejects the degenerate inputs the smoothing formulas cannot
//! handle: empty or mismatched samples, non-finite values, non-positive
//! bandwidths and grids with fewer than two points.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Non-goals
//!
//! * This module does not sort or filter input data.
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// Smallest grid that has a defined step size.
pub const MIN_STEPS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing inputs.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sample Validation
    // ========================================================================

    /// Validate the sample set: non-empty, equal lengths, all finite.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T]) -> Result<(), SmoothError> {
        // Check 1: Non-empty samples
        if x.is_empty() || y.is_empty() {
            return Err(SmoothError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: All values finite
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), SmoothError> {
        if !val.is_finite() {
            return Err(SmoothError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate every query point for finiteness.
    pub fn validate_queries<T: Float>(queries: &[T]) -> Result<(), SmoothError> {
        for (i, &q) in queries.iter().enumerate() {
            if !q.is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "query[{}]={}",
                    i,
                    q.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel bandwidth.
    pub fn validate_sigma<T: Float>(sigma: T) -> Result<(), SmoothError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(SmoothError::InvalidSigma(sigma.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate the number of grid points.
    pub fn validate_steps(steps: usize) -> Result<(), SmoothError> {
        if steps < MIN_STEPS {
            return Err(SmoothError::TooFewSteps {
                got: steps,
                min: MIN_STEPS,
            });
        }
        Ok(())
    }

    /// Validate resolved grid bounds.
    ///
    /// `start > stop` is accepted and produces a descending grid.
    pub fn validate_bounds<T: Float>(start: T, stop: T) -> Result<(), SmoothError> {
        Self::validate_scalar(start, "start")?;
        Self::validate_scalar(stop, "stop")
    }

    /// Report a parameter that was configured more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SmoothError> {
        match duplicate {
            Some(parameter) => Err(SmoothError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
