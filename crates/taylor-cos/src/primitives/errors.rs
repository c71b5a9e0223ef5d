//! Error types for series configuration and evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can be raised before a
//! summation starts: non-finite inputs, an empty index range, and builder
//! misuse. The summation engine itself is total over finite inputs and never
//! produces an error.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values.
//! * **Deferred**: Builder misuse is recorded and surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: `x` must be finite.
//! 2. **Parameter validation**: the iteration cap must exceed the first index.
//! 3. **Builder validation**: each setter may be used once.
//!
//! ## Non-goals
//!
//! * Precision loss, degenerate true values and non-convergence are not
//!   errors; they are reported through the error-log observations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for series evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Input contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The iteration cap must be strictly greater than the first series index.
    InvalidIndexRange {
        /// First index of the series.
        min: usize,
        /// Requested iteration cap.
        max: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidIndexRange { min, max } => {
                write!(
                    f,
                    "Invalid index range: max_index {max} (must be greater than min_index {min})"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeriesError {}
