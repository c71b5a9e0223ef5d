//! # taylor-cos — Adaptive Taylor-series evaluation for Rust
//!
//! Computes `cos(x)` by summing its Taylor series until the next term can no
//! longer change the result, and optionally reports the `log10` relative
//! error of every partial sum against the library cosine. The summation
//! engine is generic: `sin(x)` and `exp(x)` reuse it unchanged.
//!
//! ## How it works
//!
//! ```text
//!                    ∞         n  2n
//!   cos(x) - 1  =    Σ    (-1)   x   / (2n)!
//!                   n=1
//!
//!   term(n) = -x² / (2n (2n - 1)) · term(n - 1)
//! ```
//!
//! 1. `x` is folded into `[-π, π]`.
//! 2. Starting from `-x²/2`, each term is derived from the previous one; no
//!    factorial is ever formed.
//! 3. Summation stops when `|term| < ulp(sum)`, or at the iteration cap
//!    (default 100).
//!
//! ## Quick Start
//!
//! ```rust
//! use taylor_cos::prelude::*;
//!
//! let model = Taylor::new()
//!     .max_index(100)      // Hard cap on the number of terms
//!     .expansion(Cosine)
//!     .build()?;
//!
//! let result = model.evaluate(core::f64::consts::FRAC_PI_4)?;
//! assert!((result.value - core::f64::consts::FRAC_PI_4.cos()).abs() < 1e-14);
//!
//! println!("{}", result);
//! # Result::<(), SeriesError>::Ok(())
//! ```
//!
//! ### Error Reporting
//!
//! With `.report_error(true)` every observation is
//! `log10(|approx - cos(x)| / |cos(x)|)`; its negation is the number of
//! correct decimal digits after that many terms.
//!
//! ```rust
//! use taylor_cos::prelude::*;
//!
//! let model = Taylor::new().report_error(true).expansion(Cosine).build()?;
//! let result = model.evaluate(1.0_f64)?;
//!
//! for point in &result.series {
//!     println!("n = {:>2}  log10(err) = {:.3}", point.x, point.y);
//! }
//! # Result::<(), SeriesError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `evaluate` returns `Err(SeriesError)` only for non-finite input or an
//! iteration cap that leaves no room for a recurrence step. Precision loss and
//! non-convergence are never errors: they show up in the observations and in
//! `SeriesResult::converged`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! taylor-cos = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, `num-traits` falls back to `libm` for `cos` and `log10`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - records and errors.
mod primitives;

// Layer 2: Math - ULP and range reduction.
mod math;

// Layer 3: Algorithms - recurrences, error scoring, expansions.
mod algorithms;

// Layer 4: Engine - summation loop, validation, output.
mod engine;

// High-level fluent API.
mod api;

pub use api::cos;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Cosine, Exponential, LineColor, ObservationMode, PlotStyleHint, SeriesBuilder as Taylor,
        SeriesError, SeriesEvaluator, SeriesResult, Sine, TaylorExpansion,
    };
    pub use crate::primitives::point::ResultPoint;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
