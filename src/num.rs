//! Numbers and numerics.

#![allow(clippy::excessive_precision)]

use num_traits as nt;
use std::fmt;

/// Floating point type used throughout the kernel.
#[cfg(not(feature = "single-precision"))]
#[allow(non_camel_case_types)]
pub type fhy = f64;

/// Floating point type used throughout the kernel.
#[cfg(feature = "single-precision")]
#[allow(non_camel_case_types)]
pub type fhy = f32;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + nt::ToPrimitive
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + bytemuck::Pod
    + fmt::Debug
    + fmt::Display
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const ONE_FOURTH: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const RADIANS_PER_DEGREE: Self;
    const DEGREES_PER_RADIAN: Self;

    /// Largest absolute difference for which two values of this type are
    /// considered equal.
    const EQUALITY_EPSILON: Self;
}

macro_rules! impl_float {
    ($f:tt, $epsilon:expr) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const ONE_FOURTH: Self = 0.25;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = std::$f::consts::TAU;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const RADIANS_PER_DEGREE: Self = std::$f::consts::PI / 180.0;
            const DEGREES_PER_RADIAN: Self = 180.0 / std::$f::consts::PI;
            const EQUALITY_EPSILON: Self = $epsilon;
        }
    };
}

impl_float!(f32, 1e-5);
impl_float!(f64, 1e-7);
