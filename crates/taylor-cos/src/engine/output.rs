//! Output types for series evaluation.
//!
//! ## Purpose
//!
//! This module defines [`SeriesResult`], which carries the approximation, the
//! per-term observations, and a [`PlotStyleHint`] describing how a host might
//! render those observations. Presentation is returned as data; nothing here
//! draws or mutates shared state.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for human-readable output.
//! * **Generics**: Results are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `series` is ordered by increasing term index.
//! * `value == sum + offset` of the expansion that produced it.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not render plots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::ResultPoint;

// ============================================================================
// Observation Mode
// ============================================================================

/// What the observation series records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObservationMode {
    /// Running approximation after each term.
    #[default]
    Value,

    /// `log10` relative error after each term.
    Error,
}

// ============================================================================
// Plot Style
// ============================================================================

/// Line colour suggested for a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineColor {
    /// Red line, used for both value and error plots.
    #[default]
    Red,
}

/// Axis bounds, labels and colour a host may use to render a series.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyleHint<T> {
    /// Lower bound of the index axis.
    pub x_min: T,

    /// Upper bound of the index axis.
    pub x_max: T,

    /// Lower bound of the value axis.
    pub y_min: T,

    /// Upper bound of the value axis.
    pub y_max: T,

    /// Index axis label.
    pub x_label: String,

    /// Value axis label.
    pub y_label: String,

    /// Plot title.
    pub title: String,

    /// Line colour.
    pub line_color: LineColor,
}

impl<T: Float> PlotStyleHint<T> {
    /// Style for a series of observations of `label` in the given mode.
    pub fn for_mode(label: &str, mode: ObservationMode) -> Self {
        let c = |v: f64| T::from(v).unwrap_or_else(T::nan);
        match mode {
            ObservationMode::Value => Self {
                x_min: c(-1.0),
                x_max: c(15.0),
                y_min: c(-1.5),
                y_max: c(1.5),
                x_label: String::from("n"),
                y_label: String::from(label),
                title: format!("{label} vs n"),
                line_color: LineColor::Red,
            },
            ObservationMode::Error => Self {
                x_min: c(-1.0),
                x_max: c(15.0),
                y_min: c(-18.1),
                y_max: c(18.0),
                x_label: String::from("n"),
                y_label: String::from("Abs(log(Error))"),
                title: format!("Error {label} vs n"),
                line_color: LineColor::Red,
            },
        }
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of evaluating a function through its Taylor series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesResult<T> {
    /// Label of the evaluated function, e.g. `cos(x)`.
    pub label: &'static str,

    /// Input as given.
    pub x: T,

    /// Input after range reduction.
    pub reduced_x: T,

    /// Approximation of the function at `x`.
    pub value: T,

    /// Sum of the series terms, constant term excluded.
    pub sum: T,

    /// What `series` records.
    pub mode: ObservationMode,

    /// Observations for visualization.
    pub series: Vec<ResultPoint<T>>,

    /// Presentation hints for `series`.
    pub style: PlotStyleHint<T>,

    /// Index of the last term added.
    pub last_index: usize,

    /// Whether the stopping rule fired before the iteration cap.
    pub converged: bool,
}

impl<T: Float> SeriesResult<T> {
    /// Most recent observation.
    pub fn last_point(&self) -> Option<&ResultPoint<T>> {
        self.series.last()
    }

    /// Correct decimal digits at the last observation, in error mode.
    pub fn correct_digits(&self) -> Option<T> {
        match self.mode {
            ObservationMode::Error => self.last_point().map(|p| -p.y),
            ObservationMode::Value => None,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SeriesResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Function:    {}", self.label)?;
        writeln!(f, "  x:           {}", self.x)?;
        if self.reduced_x != self.x {
            writeln!(f, "  Reduced x:   {}", self.reduced_x)?;
        }
        writeln!(f, "  Value:       {}", self.value)?;
        writeln!(f, "  Last term:   {}", self.last_index)?;
        if !self.converged {
            writeln!(f, "  Converged:   no (iteration cap reached)")?;
        }
        writeln!(f)?;

        writeln!(f, "{}:", self.style.title)?;
        let column = match self.mode {
            ObservationMode::Value => "Value",
            ObservationMode::Error => "Log10_Err",
        };
        writeln!(f, "{:>6} {:>24}", "n", column)?;
        writeln!(f, "{:-<31}", "")?;

        for point in &self.series {
            writeln!(f, "{:>6} {:>24.16}", point.x, point.y)?;
        }

        Ok(())
    }
}
