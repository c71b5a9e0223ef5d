//! Term and observation records produced while summing a series.
//!
//! A [`SeriesTerm`] is the engine's only iteration state besides the running
//! sum; a [`ResultPoint`] is what gets recorded for visualization.

// External dependencies
use num_traits::Float;

/// One term of a series together with its index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm<T> {
    /// Index `n` of the term.
    pub index: usize,

    /// Value of the term.
    pub value: T,
}

impl<T: Float> SeriesTerm<T> {
    /// Derive the next term by applying a recurrence multiplier.
    #[inline]
    pub fn advance(self, multiplier: T) -> Self {
        Self {
            index: self.index + 1,
            value: multiplier * self.value,
        }
    }

    /// Magnitude of the term.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.value.abs()
    }
}

/// A single `(index, value)` observation.
///
/// `x` is the term index cast to float; `y` is either the running
/// approximation or the log10 relative error, depending on the mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultPoint<T> {
    /// Term index.
    pub x: T,

    /// Observed value.
    pub y: T,
}

impl<T: Float> ResultPoint<T> {
    /// Build an observation for term `index`.
    #[inline]
    pub fn at(index: usize, y: T) -> Self {
        Self {
            x: T::from(index).unwrap_or_else(T::nan),
            y,
        }
    }
}
