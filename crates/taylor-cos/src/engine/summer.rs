//! Adaptive summation engine for recurrence-defined series.
//!
//! ## Purpose
//!
//! This module drives the summation of a series whose terms are generated by
//! a [`TermRecurrence`]. It seeds the sum with a first term, repeatedly derives
//! the next term from the previous one, and stops once a term is smaller than
//! the unit in the last place of the running sum. Along the way it records one
//! observation per term: either the running approximation or its log10
//! relative error.
//!
//! ## Design notes
//!
//! * **Constant state**: Only the previous term and the running sum are kept.
//! * **Total**: The engine never fails. Non-convergence only means the loop
//!   ran to `max_index`; precision loss shows up in the error observations.
//! * **Pure**: Identical requests produce bit-identical results.
//! * **Generic**: Over `Float` types and over the recurrence strategy.
//!
//! ## Key concepts
//!
//! ```text
//!   previous = first_term, sum = first_term
//!   for n in min_index + 1 ..= max_index:
//!       current   = multiplier(n, x) * previous
//!       sum      += current
//!       observe(n)
//!       stop if |current| < ulp(sum)
//! ```
//!
//! The stopping rule is relative to the magnitude of the accumulated sum, not
//! of the terms. A sum that passes close to zero can therefore stop early.
//!
//! ## Invariants
//!
//! * The observation sequence has at most `max_index - min_index + 1` points.
//! * Observations are appended in increasing index order, seed first.
//!
//! ## Non-goals
//!
//! * This module does not validate the request (handled by `validator`).
//! * This module does not apply range reduction (handled by the API layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Formatter, Result};
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::error::ErrorEvaluator;
use crate::algorithms::recurrence::TermRecurrence;
use crate::math::ulp::ulp;
use crate::primitives::point::{ResultPoint, SeriesTerm};

/// Default iteration cap.
pub const DEFAULT_MAX_INDEX: usize = 100;

// ============================================================================
// Request Types
// ============================================================================

/// What each observation records.
#[derive(Clone, Copy)]
pub enum SummationMode<'a, T> {
    /// Record the running approximation (`sum + offset`).
    Accumulate,

    /// Record the log10 relative error of each partial sum.
    ReportError(&'a dyn ErrorEvaluator<T>),
}

impl<T> SummationMode<'_, T> {
    /// Whether observations are error values.
    pub fn reports_error(&self) -> bool {
        matches!(self, Self::ReportError(_))
    }
}

impl<T> Debug for SummationMode<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Accumulate => write!(f, "Accumulate"),
            Self::ReportError(_) => write!(f, "ReportError"),
        }
    }
}

/// Parameters of a single summation.
#[derive(Debug, Clone, Copy)]
pub struct SeriesRequest<'a, T> {
    /// Point of evaluation.
    pub x: T,

    /// Index of the first term.
    pub min_index: usize,

    /// Hard iteration cap (inclusive).
    pub max_index: usize,

    /// Value of the term at `min_index`.
    pub first_term: T,

    /// Constant term factored out of the series.
    pub offset: T,

    /// Observation mode.
    pub mode: SummationMode<'a, T>,
}

/// Output of a summation.
#[derive(Debug, Clone, PartialEq)]
pub struct Summation<T> {
    /// Sum of the series terms, offset excluded.
    pub sum: T,

    /// One observation per term, seed included.
    pub series: Vec<ResultPoint<T>>,

    /// Index of the last term added.
    pub last_index: usize,

    /// Whether the stopping rule fired before `max_index` was exhausted.
    pub converged: bool,
}

// ============================================================================
// Summer
// ============================================================================

/// Summation driver.
pub struct SeriesSummer;

impl SeriesSummer {
    /// Sum the series described by `request`, deriving terms with `recurrence`.
    pub fn summarize<T, R>(recurrence: &R, request: &SeriesRequest<'_, T>) -> Summation<T>
    where
        T: Float,
        R: TermRecurrence<T> + ?Sized,
    {
        let x = request.x;
        // `max_index` bounds the loop, not the expected length.
        let capacity = request
            .max_index
            .saturating_sub(request.min_index)
            .saturating_add(1)
            .min(DEFAULT_MAX_INDEX + 1);
        let mut series = Vec::with_capacity(capacity);

        let mut previous = SeriesTerm {
            index: request.min_index,
            value: request.first_term,
        };
        let mut sum = request.first_term;

        // Seed observation
        let seed = match request.mode {
            SummationMode::Accumulate => previous.value,
            SummationMode::ReportError(errors) => {
                errors.log_error(previous.index, x, previous.value)
            }
        };
        series.push(ResultPoint::at(previous.index, seed));

        let mut converged = false;
        for n in (request.min_index + 1)..=request.max_index {
            let current = previous.advance(recurrence.multiplier(n, x));
            sum = sum + current.value;

            let observed = match request.mode {
                SummationMode::Accumulate => sum + request.offset,
                SummationMode::ReportError(errors) => errors.log_error(n, x, sum),
            };
            series.push(ResultPoint::at(n, observed));

            trace!(
                "n = {}, term = {:e}, sum = {:e}",
                n,
                current.value.to_f64().unwrap_or(f64::NAN),
                sum.to_f64().unwrap_or(f64::NAN)
            );

            previous = current;

            if current.magnitude() < ulp(sum) {
                converged = true;
                break;
            }
        }

        if converged {
            debug!("series converged at n = {}", previous.index);
        } else {
            debug!(
                "series stopped at iteration cap n = {} without converging",
                previous.index
            );
        }

        Summation {
            sum,
            series,
            last_index: previous.index,
            converged,
        }
    }
}
