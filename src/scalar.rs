//! Comparison and utility functions for single scalars.

use crate::num::Float;

/// Whether the two values differ by at most the default epsilon for their
/// precision ([`Float::EQUALITY_EPSILON`]).
#[inline]
pub fn equals<F: Float>(a: F, b: F) -> bool {
    equals_with_epsilon(a, b, F::EQUALITY_EPSILON)
}

/// Whether the two values differ by at most the given epsilon. NaN is never
/// equal to anything.
#[inline]
pub fn equals_with_epsilon<F: Float>(a: F, b: F, epsilon: F) -> bool {
    (a - b).abs() <= epsilon
}

/// Whether the value is within the default epsilon of zero.
#[inline]
pub fn is_zero<F: Float>(value: F) -> bool {
    value.abs() <= F::EQUALITY_EPSILON
}

/// Restricts the value to the inclusive range `[min, max]`.
#[inline]
pub fn clamp<F: Float>(value: F, min: F, max: F) -> F {
    debug_assert!(min <= max);
    value.max(min).min(max)
}

#[inline]
pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees * F::RADIANS_PER_DEGREE
}

#[inline]
pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians * F::DEGREES_PER_RADIAN
}
