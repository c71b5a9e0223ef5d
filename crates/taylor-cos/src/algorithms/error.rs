//! Log-scale relative error of partial sums.
//!
//! ## Purpose
//!
//! When the closed form of a series is known, each partial sum can be scored
//! by `log10(|approx - true| / |true|)`. The negation of this value is the
//! number of correct decimal digits.
//!
//! ## Design notes
//!
//! * **Offset**: Series are often summed with their constant term factored out
//!   (`cos(x) = 1 + Σ`). The evaluator adds the offset back before comparing.
//! * **Strategy**: The engine accepts any [`ErrorEvaluator`]; closures
//!   `Fn(usize, T, T) -> T` implement it.
//!
//! ## Key concepts
//!
//! * **Degenerate true value**: When the closed form is exactly zero the
//!   relative error is undefined. The error is reported as `0`. This is a
//!   convention, not a measurement.
//! * **Exact match**: When the approximation equals the true value exactly,
//!   the numerator is replaced by `ulp(approx)` so the result stays finite.
//!
//! ## Invariants
//!
//! * The result is finite for finite inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::ulp::ulp;

// ============================================================================
// Evaluator Trait
// ============================================================================

/// Scores a partial sum against the true value.
pub trait ErrorEvaluator<T> {
    /// `log10` of the relative error of `partial` (offset excluded) at term `n`.
    fn log_error(&self, n: usize, x: T, partial: T) -> T;
}

impl<T, F> ErrorEvaluator<T> for F
where
    F: Fn(usize, T, T) -> T,
{
    #[inline]
    fn log_error(&self, n: usize, x: T, partial: T) -> T {
        self(n, x, partial)
    }
}

// ============================================================================
// Relative Log Error
// ============================================================================

/// Relative log error against a closed-form function.
#[derive(Debug, Clone, Copy)]
pub struct RelativeLogError<T, F> {
    closed_form: F,
    offset: T,
}

impl<T: Float, F: Fn(T) -> T> RelativeLogError<T, F> {
    /// Score partial sums of a series whose constant term `offset` was factored out.
    pub fn new(closed_form: F, offset: T) -> Self {
        Self {
            closed_form,
            offset,
        }
    }
}

impl<T: Float> RelativeLogError<T, fn(T) -> T> {
    /// Evaluator for the `cos(x) - 1` series.
    pub fn cosine() -> Self {
        Self::new(<T as Float>::cos, T::one())
    }
}

impl<T: Float, F: Fn(T) -> T> ErrorEvaluator<T> for RelativeLogError<T, F> {
    fn log_error(&self, _n: usize, x: T, partial: T) -> T {
        let truth = (self.closed_form)(x);
        if truth == T::zero() {
            return T::zero();
        }

        let approx = partial + self.offset;
        let mut numerator = approx - truth;
        if numerator == T::zero() {
            numerator = ulp(approx);
        }

        (numerator / truth).abs().log10()
    }
}

/// Relative log error of a `cos(x) - 1` partial sum.
#[inline]
pub fn cos_log_error<T: Float>(n: usize, x: T, partial: T) -> T {
    RelativeLogError::<T, fn(T) -> T>::cosine().log_error(n, x, partial)
}
