//! Taylor expansions of elementary functions.
//!
//! ## Purpose
//!
//! A [`TaylorExpansion`] describes everything the summation engine needs to
//! evaluate one function: where the series starts, its first term, the
//! recurrence between terms, the constant factored out of the sum, the
//! closed form used for error scoring, and the range reduction to apply first.
//!
//! ## Key concepts
//!
//! ```text
//!                  ∞         n  2n
//!   cos(x) = 1 +   Σ    (-1)   x   / (2n)!          first term -x²/2 at n = 1
//!                 n=1
//!
//!                  ∞         n  2n+1
//!   sin(x) =       Σ    (-1)   x     / (2n+1)!      first term x at n = 0
//!                 n=0
//!
//!                  ∞     n
//!   exp(x) =       Σ    x  / n!                     first term 1 at n = 0
//!                 n=0
//! ```
//!
//! ## Invariants
//!
//! * `multiplier(n, x) * term(n - 1) == term(n)` for `n > min_index`.
//! * `offset + Σ terms` converges to `closed_form(x)`.

// External dependencies
use num_traits::{Float, FloatConst};

// Internal dependencies
use crate::algorithms::recurrence::{cos_multiplier, exp_multiplier, sin_multiplier};
use crate::math::reduction::reduce_to_principal;

// ============================================================================
// Expansion Trait
// ============================================================================

/// A function expressed as a recurrence-defined Taylor series.
pub trait TaylorExpansion<T: Float> {
    /// Display label of the function, e.g. `cos(x)`.
    fn label(&self) -> &'static str;

    /// Index of the first summed term.
    fn min_index(&self) -> usize;

    /// Constant term excluded from the summation.
    fn offset(&self) -> T;

    /// Value of the term at `min_index`.
    fn first_term(&self, x: T) -> T;

    /// Ratio of term `n` to term `n - 1`.
    fn multiplier(&self, n: usize, x: T) -> T;

    /// Reference value the series converges to.
    fn closed_form(&self, x: T) -> T;

    /// Map `x` into the domain where the series converges fastest.
    fn reduce(&self, x: T) -> T {
        x
    }
}

// ============================================================================
// Cosine
// ============================================================================

/// `cos(x)`, summed as `1 + (cos(x) - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cosine;

impl<T: Float + FloatConst> TaylorExpansion<T> for Cosine {
    fn label(&self) -> &'static str {
        "cos(x)"
    }

    fn min_index(&self) -> usize {
        1
    }

    fn offset(&self) -> T {
        T::one()
    }

    fn first_term(&self, x: T) -> T {
        let half = T::one() / (T::one() + T::one());
        -half * (x * x)
    }

    fn multiplier(&self, n: usize, x: T) -> T {
        cos_multiplier(n, x)
    }

    fn closed_form(&self, x: T) -> T {
        x.cos()
    }

    fn reduce(&self, x: T) -> T {
        reduce_to_principal(x)
    }
}

// ============================================================================
// Sine
// ============================================================================

/// `sin(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sine;

impl<T: Float + FloatConst> TaylorExpansion<T> for Sine {
    fn label(&self) -> &'static str {
        "sin(x)"
    }

    fn min_index(&self) -> usize {
        0
    }

    fn offset(&self) -> T {
        T::zero()
    }

    fn first_term(&self, x: T) -> T {
        x
    }

    fn multiplier(&self, n: usize, x: T) -> T {
        sin_multiplier(n, x)
    }

    fn closed_form(&self, x: T) -> T {
        x.sin()
    }

    fn reduce(&self, x: T) -> T {
        reduce_to_principal(x)
    }
}

// ============================================================================
// Exponential
// ============================================================================

/// `exp(x)`. No range reduction; large `|x|` needs more terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Exponential;

impl<T: Float> TaylorExpansion<T> for Exponential {
    fn label(&self) -> &'static str {
        "exp(x)"
    }

    fn min_index(&self) -> usize {
        0
    }

    fn offset(&self) -> T {
        T::zero()
    }

    fn first_term(&self, _x: T) -> T {
        T::one()
    }

    fn multiplier(&self, n: usize, x: T) -> T {
        exp_multiplier(n, x)
    }

    fn closed_form(&self, x: T) -> T {
        x.exp()
    }
}
