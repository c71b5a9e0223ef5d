//! Layer 3: Algorithms
//!
//! Series-specific building blocks: term recurrences, error scoring, and the
//! expansions that bundle them per target function.

/// Term recurrences.
pub mod recurrence;

/// Log-scale relative error.
pub mod error;

/// Taylor expansions of cos, sin and exp.
pub mod expansion;
