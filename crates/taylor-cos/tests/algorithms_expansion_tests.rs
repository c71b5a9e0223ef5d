#![cfg(feature = "dev")]
//! Tests for the built-in Taylor expansions.

use approx::assert_relative_eq;
use core::f64::consts::PI;

use taylor_cos::internals::algorithms::expansion::{Cosine, Exponential, Sine, TaylorExpansion};
use taylor_cos::internals::algorithms::recurrence::cos_multiplier;

/// Test the cosine expansion parameters.
#[test]
fn test_cosine_parameters() {
    let e = Cosine;
    assert_eq!(TaylorExpansion::<f64>::label(&e), "cos(x)");
    assert_eq!(TaylorExpansion::<f64>::min_index(&e), 1);
    assert_eq!(TaylorExpansion::<f64>::offset(&e), 1.0);
    assert_eq!(e.first_term(2.0f64), -2.0);
    assert_eq!(e.multiplier(3, 0.4f64), cos_multiplier(3, 0.4f64));
    assert_eq!(e.closed_form(0.4f64), 0.4f64.cos());
    assert_relative_eq!(e.reduce(2.0 * PI + 0.25), 0.25, epsilon = 1e-12);
}

/// Test the sine expansion parameters.
#[test]
fn test_sine_parameters() {
    let e = Sine;
    assert_eq!(TaylorExpansion::<f64>::min_index(&e), 0);
    assert_eq!(TaylorExpansion::<f64>::offset(&e), 0.0);
    assert_eq!(e.first_term(0.3f64), 0.3);
    assert_relative_eq!(e.reduce(-2.0 * PI - 0.25), -0.25, epsilon = 1e-12);
}

/// Test the exponential expansion does not reduce its input.
#[test]
fn test_exponential_parameters() {
    let e = Exponential;
    assert_eq!(TaylorExpansion::<f64>::min_index(&e), 0);
    assert_eq!(e.first_term(5.0f64), 1.0);
    assert_eq!(e.reduce(10.0f64), 10.0);
    assert_eq!(e.multiplier(4, 2.0f64), 0.5);
}

/// Test chained multipliers reproduce each closed form.
#[test]
fn test_manual_summation_matches_closed_form() {
    fn sum_series<E: TaylorExpansion<f64>>(e: &E, x: f64) -> f64 {
        let mut term = e.first_term(x);
        let mut sum = term;
        for n in (e.min_index() + 1)..=60 {
            term *= e.multiplier(n, x);
            sum += term;
        }
        sum + e.offset()
    }

    for &x in &[0.2, 1.0, -2.0] {
        assert_relative_eq!(sum_series(&Cosine, x), x.cos(), max_relative = 1e-13);
        assert_relative_eq!(sum_series(&Sine, x), x.sin(), max_relative = 1e-13);
        assert_relative_eq!(sum_series(&Exponential, x), x.exp(), max_relative = 1e-13);
    }
}
