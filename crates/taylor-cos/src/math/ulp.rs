//! Unit in the last place for generic floats.
//!
//! ## Purpose
//!
//! The summation engine stops once a term can no longer move the running sum,
//! and the error evaluator uses the same quantity as a floor when a partial sum
//! matches the true value exactly. Both need the spacing of representable
//! values at a given magnitude.
//!
//! ## Key concepts
//!
//! * For a normal value `v` with `2^e <= |v| < 2^(e+1)`, `ulp(v) = 2^e * epsilon`.
//! * For zero and subnormals the spacing is constant: the smallest positive
//!   subnormal, `min_positive_value * epsilon`.
//!
//! ## Invariants
//!
//! * `ulp(v) == ulp(-v)`.
//! * `ulp(v) > 0` for every finite `v`.
//! * `ulp(1) == epsilon`.
//!
//! ## Non-goals
//!
//! * Behaviour for NaN and infinities is unspecified.

// External dependencies
use num_traits::Float;

/// Distance from `|value|` to the next representable float of larger magnitude.
#[inline]
pub fn ulp<T: Float>(value: T) -> T {
    let magnitude = value.abs();

    // Zero and subnormals share the smallest spacing.
    if magnitude < T::min_positive_value() {
        return T::min_positive_value() * T::epsilon();
    }

    // `integer_decode` yields `mantissa * 2^exponent` with the implicit bit set,
    // so the binade is `2^(exponent + precision)`.
    let (mantissa, exponent, _) = magnitude.integer_decode();
    let precision = 63 - mantissa.leading_zeros() as i32;
    let two = T::one() + T::one();
    let binade = two.powi(i32::from(exponent) + precision);

    binade * T::epsilon()
}
