//! Range reduction into the principal period.
//!
//! ## Purpose
//!
//! Trigonometric series converge fastest near zero. This module folds an
//! arbitrary real input into `[-π, π]` without changing the value of any
//! 2π-periodic function.
//!
//! ## Design notes
//!
//! * A single `%` step replaces the naive "subtract 2π until in range" loop,
//!   so the cost is constant for any magnitude.
//! * The correction after `%` is exact: the operands are within a factor of
//!   two of each other, so the subtraction does not round.
//!
//! ## Invariants
//!
//! * The result lies in `[-π, π]`.
//! * Inputs already in `[-π, π]` (including `±π`) are returned unchanged.
//!
//! ## Non-goals
//!
//! * This is not a Payne–Hanek reduction; accuracy degrades for very large
//!   `|x|` because `2π` itself is rounded.

// External dependencies
use num_traits::{Float, FloatConst};

/// Fold `x` into `[-π, π]`.
#[inline]
pub fn reduce_to_principal<T: Float + FloatConst>(x: T) -> T {
    let pi = T::PI();
    if x.abs() <= pi {
        return x;
    }

    let two_pi = pi + pi;
    let folded = x % two_pi;

    if folded > pi {
        folded - two_pi
    } else if folded < -pi {
        folded + two_pi
    } else {
        folded
    }
}
