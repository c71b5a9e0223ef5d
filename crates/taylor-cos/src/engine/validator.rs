//! Input validation for series configuration and evaluation.
//!
//! ## Purpose
//!
//! The summation engine assumes finite input and a non-empty index range.
//! This module checks those assumptions at the API boundary so the engine
//! itself can stay total.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reduce, clamp or otherwise correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeriesError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for series parameters and input values.
pub struct Validator;

impl Validator {
    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), SeriesError> {
        if !val.is_finite() {
            return Err(SeriesError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that the iteration cap leaves at least one recurrence step.
    pub fn validate_index_range(min_index: usize, max_index: usize) -> Result<(), SeriesError> {
        if max_index <= min_index {
            return Err(SeriesError::InvalidIndexRange {
                min: min_index,
                max: max_index,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SeriesError> {
        if let Some(param) = duplicate_param {
            return Err(SeriesError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
