//! High-level API for Taylor-series evaluation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. It implements a fluent
//! builder for the summation parameters and a transition to an evaluator
//! bound to one [`TaylorExpansion`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Builder misuse is reported by `.build()`; input values are
//!   checked by `.evaluate()`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SeriesBuilder`] via `Taylor::new()`.
//! 2. Chain configuration methods (`.max_index()`, `.report_error()`).
//! 3. Select a function via `.expansion(Cosine)` and call `.build()`.
//! 4. Call `.evaluate(x)` as often as needed; each call is independent.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::debug;
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::algorithms::error::{ErrorEvaluator, RelativeLogError};
use crate::engine::summer::{DEFAULT_MAX_INDEX, SeriesRequest, SeriesSummer, SummationMode};
use crate::engine::validator::Validator;
use crate::primitives::point::ResultPoint;

// Publicly re-exported types
pub use crate::algorithms::expansion::{Cosine, Exponential, Sine, TaylorExpansion};
pub use crate::engine::output::{LineColor, ObservationMode, PlotStyleHint, SeriesResult};
pub use crate::primitives::errors::SeriesError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for summation parameters.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    /// Inclusive iteration cap (default 100).
    pub max_index: Option<usize>,

    /// Record log10 relative errors instead of running values.
    pub report_error: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SeriesBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive iteration cap.
    pub fn max_index(mut self, max_index: usize) -> Self {
        if self.max_index.is_some() {
            self.duplicate_param = Some("max_index");
        }
        self.max_index = Some(max_index);
        self
    }

    /// Choose whether observations are log10 relative errors.
    pub fn report_error(mut self, enabled: bool) -> Self {
        if self.report_error.is_some() {
            self.duplicate_param = Some("report_error");
        }
        self.report_error = Some(enabled);
        self
    }

    /// Bind the builder to a function's expansion.
    pub fn expansion<E>(self, expansion: E) -> ExpansionBuilder<E> {
        ExpansionBuilder {
            expansion,
            max_index: self.max_index.unwrap_or(DEFAULT_MAX_INDEX),
            report_error: self.report_error.unwrap_or(false),
            duplicate_param: self.duplicate_param,
        }
    }
}

/// Builder bound to an expansion, ready to be validated.
#[derive(Debug, Clone)]
pub struct ExpansionBuilder<E> {
    /// Expansion to evaluate.
    pub expansion: E,

    /// Inclusive iteration cap.
    pub max_index: usize,

    /// Record log10 relative errors instead of running values.
    pub report_error: bool,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<E> ExpansionBuilder<E> {
    /// Validate the configuration and produce an evaluator.
    pub fn build(self) -> Result<SeriesEvaluator<E>, SeriesError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(SeriesEvaluator {
            expansion: self.expansion,
            max_index: self.max_index,
            report_error: self.report_error,
        })
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Evaluates one function through its Taylor series.
#[derive(Debug, Clone)]
pub struct SeriesEvaluator<E> {
    expansion: E,
    max_index: usize,
    report_error: bool,
}

impl<E> SeriesEvaluator<E> {
    /// Inclusive iteration cap.
    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// Whether observations are log10 relative errors.
    pub fn reports_error(&self) -> bool {
        self.report_error
    }

    /// Evaluate the function at `x`.
    ///
    /// `x` is range-reduced first. When the expansion factors out a constant
    /// term, the observations start with a point at index 0 for the
    /// constant-only approximation, followed by the engine's observations.
    pub fn evaluate<T>(&self, x: T) -> Result<SeriesResult<T>, SeriesError>
    where
        T: Float + FloatConst,
        E: TaylorExpansion<T>,
    {
        Validator::validate_scalar(x, "x")?;

        let expansion = &self.expansion;
        let min_index = expansion.min_index();
        Validator::validate_index_range(min_index, self.max_index)?;

        let reduced_x = expansion.reduce(x);
        let offset = expansion.offset();
        debug!(
            "evaluating {} at x = {}, reduced to {}",
            expansion.label(),
            x.to_f64().unwrap_or(f64::NAN),
            reduced_x.to_f64().unwrap_or(f64::NAN)
        );

        let errors = RelativeLogError::new(|v: T| expansion.closed_form(v), offset);
        let evaluator: &dyn ErrorEvaluator<T> = &errors;
        let mode: SummationMode<'_, T> = if self.report_error {
            SummationMode::ReportError(evaluator)
        } else {
            SummationMode::Accumulate
        };
        let observation = if mode.reports_error() {
            ObservationMode::Error
        } else {
            ObservationMode::Value
        };

        let request = SeriesRequest {
            x: reduced_x,
            min_index,
            max_index: self.max_index,
            first_term: expansion.first_term(reduced_x),
            offset,
            mode,
        };
        let recurrence = |n: usize, v: T| expansion.multiplier(n, v);
        let summation = SeriesSummer::summarize(&recurrence, &request);

        let mut series = Vec::with_capacity(summation.series.len() + 1);
        if offset != T::zero() {
            let constant = match observation {
                ObservationMode::Value => offset,
                ObservationMode::Error => evaluator.log_error(0, reduced_x, T::zero()),
            };
            series.push(ResultPoint::at(0, constant));
        }
        series.extend(summation.series);

        Ok(SeriesResult {
            label: expansion.label(),
            x,
            reduced_x,
            value: summation.sum + offset,
            sum: summation.sum,
            mode: observation,
            series,
            style: PlotStyleHint::for_mode(expansion.label(), observation),
            last_index: summation.last_index,
            converged: summation.converged,
        })
    }
}

// ============================================================================
// Convenience
// ============================================================================

/// Approximate `cos(x)` with the default iteration cap.
pub fn cos<T: Float + FloatConst>(x: T) -> Result<T, SeriesError> {
    SeriesBuilder::new()
        .expansion(Cosine)
        .build()?
        .evaluate(x)
        .map(|result| result.value)
}
