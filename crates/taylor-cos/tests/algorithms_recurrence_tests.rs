#![cfg(feature = "dev")]
//! Tests for term recurrences.
//!
//! These tests verify the multipliers that derive each Taylor term from its
//! predecessor, and that closures can stand in for them.

use approx::assert_relative_eq;
use core::f64::consts::PI;

use taylor_cos::internals::algorithms::recurrence::{
    TermRecurrence, cos_multiplier, exp_multiplier, sin_multiplier,
};

// ============================================================================
// Cosine
// ============================================================================

/// Test cosine multiplier at known points.
#[test]
fn test_cos_multiplier_values() {
    assert_eq!(cos_multiplier(1, 0.0f64), 0.0);
    assert_relative_eq!(cos_multiplier(2, PI), -PI * PI / 12.0, epsilon = 1e-15);
    assert_relative_eq!(cos_multiplier(1, 2.0f64), -2.0, epsilon = 1e-15);
    assert_relative_eq!(cos_multiplier(3, 1.0f64), -1.0 / 30.0, epsilon = 1e-15);
}

/// Test chained cosine multipliers reproduce the factorial form.
///
/// Verifies term(4) = x^8 / 8! starting from term(1) = -x²/2.
#[test]
fn test_cos_multiplier_chain() {
    let x = 0.7f64;
    let mut term = -x * x / 2.0;
    for n in 2..=4 {
        term *= cos_multiplier(n, x);
    }
    assert_relative_eq!(term, x.powi(8) / 40320.0, max_relative = 1e-14);
}

// ============================================================================
// Sine and Exponential
// ============================================================================

/// Test sine and exponential multipliers.
#[test]
fn test_sin_and_exp_multipliers() {
    assert_relative_eq!(sin_multiplier(1, 3.0f64), -9.0 / 6.0, epsilon = 1e-15);
    assert_relative_eq!(sin_multiplier(2, 1.0f64), -1.0 / 20.0, epsilon = 1e-15);
    assert_relative_eq!(exp_multiplier(3, 6.0f64), 2.0, epsilon = 1e-15);
}

// ============================================================================
// Strategy
// ============================================================================

/// Test closures and function items implement the recurrence trait.
#[test]
fn test_closure_is_recurrence() {
    let halving = |_n: usize, _x: f64| 0.5;
    assert_eq!(halving.multiplier(10, 3.0), 0.5);

    let f = cos_multiplier::<f64>;
    assert_eq!(f.multiplier(2, 1.0), cos_multiplier(2, 1.0));
}
