#![cfg(feature = "dev")]
//! Tests for unit-in-the-last-place computation.
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Powers of two, zero, extremes
//! 2. **Spacing** - Agreement with the next representable value
//! 3. **Precision** - Behaviour for `f32`

use taylor_cos::internals::math::ulp::ulp;

// ============================================================================
// Known Values
// ============================================================================

/// Test ULP of one equals machine epsilon.
#[test]
fn test_ulp_of_one() {
    assert_eq!(ulp(1.0f64), f64::EPSILON);
    assert_eq!(ulp(-1.0f64), f64::EPSILON);
    assert_eq!(ulp(1.5f64), f64::EPSILON);
    assert_eq!(ulp(2.0f64), 2.0 * f64::EPSILON);
}

/// Test ULP of zero is the smallest subnormal.
#[test]
fn test_ulp_of_zero() {
    let smallest = f64::from_bits(1);
    assert_eq!(ulp(0.0f64), smallest);
    assert_eq!(ulp(-0.0f64), smallest);
    assert_eq!(ulp(f64::MIN_POSITIVE), smallest);
}

/// Test ULP is symmetric and positive.
#[test]
fn test_ulp_symmetric() {
    for &v in &[0.1f64, 3.7, 1e-300, 1e300, -42.0] {
        assert!(ulp(v) > 0.0);
        assert_eq!(ulp(v), ulp(-v));
    }
}

// ============================================================================
// Spacing
// ============================================================================

/// Test ULP matches the gap to the next representable value.
///
/// Verifies normals, the top of a binade and subnormals.
#[test]
fn test_ulp_matches_next_representable() {
    let values = [
        0.1f64,
        0.5,
        3.7,
        123_456.789,
        1e-300,
        1e300,
        1e-310,
        f64::from_bits(2.0f64.to_bits() - 1),
    ];

    for &v in &values {
        let next = f64::from_bits(v.to_bits() + 1);
        assert_eq!(ulp(v), next - v, "ulp mismatch for {v:e}");
    }
}

/// Test half an ULP does not change the value.
#[test]
fn test_half_ulp_is_absorbed() {
    let one = 1.0f64;
    assert_ne!(one + ulp(one), one);
    assert_eq!(one + ulp(one) / 2.0, one);
}

// ============================================================================
// Precision
// ============================================================================

/// Test ULP for single precision.
#[test]
fn test_ulp_f32() {
    assert_eq!(ulp(1.0f32), f32::EPSILON);
    let v = 0.3f32;
    let next = f32::from_bits(v.to_bits() + 1);
    assert_eq!(ulp(v), next - v);
}
