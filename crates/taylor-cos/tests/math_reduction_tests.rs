#![cfg(feature = "dev")]
//! Tests for range reduction into `[-π, π]`.
//!
//! ## Test Organization
//!
//! 1. **No-op Cases** - Inputs already in range
//! 2. **Folding** - Inputs outside the principal period
//! 3. **Properties** - Bounds and cosine preservation over a sweep

use approx::assert_abs_diff_eq;
use core::f64::consts::PI;

use taylor_cos::internals::math::reduction::reduce_to_principal;

// ============================================================================
// No-op Cases
// ============================================================================

/// Test in-range inputs are returned unchanged.
///
/// Verifies the boundaries `±π` are inclusive.
#[test]
fn test_in_range_is_noop() {
    for &x in &[0.0, 1.0, -2.5, PI, -PI, PI - 1e-12] {
        assert_eq!(reduce_to_principal(x), x);
    }
}

// ============================================================================
// Folding
// ============================================================================

/// Test inputs one period away fold back.
#[test]
fn test_single_period() {
    assert_abs_diff_eq!(reduce_to_principal(2.0 * PI + 0.5), 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(reduce_to_principal(-2.0 * PI - 0.5), -0.5, epsilon = 1e-12);
}

/// Test inputs just beyond `π` wrap to the negative side.
#[test]
fn test_wraps_past_pi() {
    let r = reduce_to_principal(4.0);
    assert_abs_diff_eq!(r, 4.0 - 2.0 * PI, epsilon = 1e-12);

    let r = reduce_to_principal(-4.0);
    assert_abs_diff_eq!(r, 2.0 * PI - 4.0, epsilon = 1e-12);
}

/// Test many periods away.
#[test]
fn test_many_periods() {
    let x = 20.0 * PI + 1.0;
    assert_abs_diff_eq!(reduce_to_principal(x), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Properties
// ============================================================================

/// Test the result is bounded and preserves cosine.
#[test]
fn test_sweep_bounds_and_cosine() {
    let mut x = -100.0f64;
    while x <= 100.0 {
        let r = reduce_to_principal(x);
        assert!((-PI..=PI).contains(&r), "reduce({x}) = {r} out of range");
        assert_abs_diff_eq!(r.cos(), x.cos(), epsilon = 1e-12);
        x += 0.37;
    }
}

/// Test odd multiples of `π` stay in range.
#[test]
fn test_odd_multiples_of_pi() {
    for k in [3.0, 5.0, -3.0, -7.0] {
        let r = reduce_to_principal(k * PI);
        assert!((-PI..=PI).contains(&r));
        assert_abs_diff_eq!(r.abs(), PI, epsilon = 1e-12);
    }
}
