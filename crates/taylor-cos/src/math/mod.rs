//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure floating-point helpers:
//! - Unit in the last place (ULP)
//! - Range reduction into the principal period
//!
//! These are reusable building blocks with no series-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unit in the last place.
pub mod ulp;

/// Range reduction into `[-π, π]`.
pub mod reduction;
