//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer drives the summation loop, checks inputs at the boundary, and
//! packages results.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Adaptive summation engine.
pub mod summer;

/// Validation utilities.
pub mod validator;

/// Output types for series evaluation.
pub mod output;
