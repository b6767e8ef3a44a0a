//! Error types for kernel smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while smoothing a
//! trend curve: empty or mismatched samples, non-finite values, degenerate
//! bandwidths and grids, and failures attributed to a named trajectory trace.
//!
//! ## Design notes
//!
//! * **Invalid arguments only**: Every variant describes a caller error. Once
//!   the inputs validate, the computation always terminates with a result.
//! * **Contextual**: Errors carry the offending values (lengths, sigma, steps).
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for kernel smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// The sample set is empty; the weight normalization needs at least one sample.
    EmptyInput,

    /// `x` and `y` samples must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` samples.
        x_len: usize,
        /// Number of elements in the `y` samples.
        y_len: usize,
    },

    /// A sample, query point, or grid bound is NaN or infinite.
    InvalidNumericValue(String),

    /// Bandwidth must be positive and finite.
    InvalidSigma(f64),

    /// The resampling grid needs at least `min` points.
    TooFewSteps {
        /// Number of steps requested.
        got: usize,
        /// Minimum number of steps.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A named trajectory trace failed to smooth.
    InvalidTrace {
        /// Dataset the trace belongs to.
        dataset: String,
        /// Trace name (or its position when unnamed).
        trace: String,
        /// Underlying failure.
        source: Box<SmoothError>,
    },
}

impl SmoothError {
    /// Every smoothing error is an invalid-argument condition.
    ///
    /// Provided so callers can classify failures without matching on the
    /// individual variants.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        true
    }

    /// The innermost error, unwrapping trace context.
    pub fn root_cause(&self) -> &SmoothError {
        match self {
            Self::InvalidTrace { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input samples are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidSigma(sigma) => {
                write!(f, "Invalid sigma: {sigma} (must be > 0 and finite)")
            }
            Self::TooFewSteps { got, min } => {
                write!(f, "Invalid steps: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidTrace {
                dataset,
                trace,
                source,
            } => {
                write!(f, "Trace '{trace}' in dataset '{dataset}': {source}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTrace { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
