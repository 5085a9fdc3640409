//! Representations of angles.

use crate::{
    num::Float,
    scalar::{degrees_to_radians, radians_to_degrees},
};
use approx::{AbsDiffEq, RelativeEq};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle<F>: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;
}

/// An angle in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians::from(self)
    }

    fn radians(self) -> F {
        degrees_to_radians(self.0)
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn as_degrees(self) -> Degrees<F> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<F> {
        self
    }

    fn radians(self) -> F {
        self.0
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(radians_to_degrees(rad.0))
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(degrees_to_radians(deg.0))
    }
}

macro_rules! impl_angle_arithmetic {
    ($angle:ident) => {
        impl<F: Float> Add for $angle<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<F: Float> Sub for $angle<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<F: Float> Mul<F> for $angle<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<F: Float> Neg for $angle<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<F: Float> AbsDiffEq for $angle<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::EQUALITY_EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<F: Float> RelativeEq for $angle<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_arithmetic!(Degrees);
impl_angle_arithmetic!(Radians);

impl<F: Float> fmt::Display for Degrees<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        write!(f, "°")
    }
}

impl<F: Float> fmt::Display for Radians<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)?;
        write!(f, " rad")
    }
}
