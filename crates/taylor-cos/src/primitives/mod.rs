//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the record types and error definitions used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Series terms and observation points.
pub mod point;

/// Shared error types.
pub mod errors;
