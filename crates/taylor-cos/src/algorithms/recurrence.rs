//! Term recurrences for Taylor series.
//!
//! ## Purpose
//!
//! Each term of a Taylor series is derived from its predecessor by a
//! multiplier, `term(n) = multiplier(n, x) * term(n - 1)`. Building terms this
//! way never forms a factorial or a large power explicitly, so nothing
//! overflows before the terms themselves become negligible.
//!
//! ## Design notes
//!
//! * **Strategy**: The engine accepts any [`TermRecurrence`]; plain closures
//!   `Fn(usize, T) -> T` implement it.
//! * **Pure**: Multipliers depend only on `(n, x)`.
//!
//! ## Key concepts
//!
//! ```text
//!   cos: -x² / (2n (2n - 1))     n ≥ 1
//!   sin: -x² / (2n (2n + 1))     n ≥ 1
//!   exp:  x / n                   n ≥ 1
//! ```
//!
//! ## Invariants
//!
//! * Denominators are strictly positive for `n ≥ 1`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Recurrence Trait
// ============================================================================

/// Ratio between consecutive terms of a series.
pub trait TermRecurrence<T> {
    /// Multiplier taking term `n - 1` to term `n`.
    fn multiplier(&self, n: usize, x: T) -> T;
}

impl<T, F> TermRecurrence<T> for F
where
    F: Fn(usize, T) -> T,
{
    #[inline]
    fn multiplier(&self, n: usize, x: T) -> T {
        self(n, x)
    }
}

// ============================================================================
// Built-in Multipliers
// ============================================================================

#[inline]
fn index<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Multiplier of the cosine series, `-x² / (2n (2n - 1))`.
#[inline]
pub fn cos_multiplier<T: Float>(n: usize, x: T) -> T {
    let two = T::one() + T::one();
    let n = index::<T>(n);
    let denominator = two * n * (two * n - T::one());

    -(x * x) / denominator
}

/// Multiplier of the sine series, `-x² / (2n (2n + 1))`.
#[inline]
pub fn sin_multiplier<T: Float>(n: usize, x: T) -> T {
    let two = T::one() + T::one();
    let n = index::<T>(n);
    let denominator = two * n * (two * n + T::one());

    -(x * x) / denominator
}

/// Multiplier of the exponential series, `x / n`.
#[inline]
pub fn exp_multiplier<T: Float>(n: usize, x: T) -> T {
    x / index::<T>(n)
}
