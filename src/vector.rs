//! Vectors.

use crate::{
    error::{MathError, Result},
    num::Float,
    scalar::{clamp, is_zero},
};
use std::{
    fmt,
    ops::{Deref, Index, IndexMut},
};

/// A 2-dimensional vector.
///
/// The components live in a single array, so they can be accessed both by
/// name ([`x`](Self::x), [`y`](Self::y)) and by index.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector2<F> {
    components: [F; 2],
}

/// A 3-dimensional vector.
///
/// The components live in a single array, so they can be accessed both by
/// name ([`x`](Self::x), [`y`](Self::y), [`z`](Self::z)) and by index.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector3<F> {
    components: [F; 3],
}

/// A 4-dimensional vector.
///
/// The components live in a single array, so they can be accessed both by
/// name ([`x`](Self::x), [`y`](Self::y), [`z`](Self::z), [`w`](Self::w)) and
/// by index.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector4<F> {
    components: [F; 4],
}

/// A 3-dimensional vector of unit length.
///
/// The only ways to obtain one are the axis constructors, checked
/// normalization and the explicitly unchecked constructors.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct UnitVector3<F> {
    vector: Vector3<F>,
}

/// Writes a scalar, honoring the precision requested by the formatter.
pub(crate) fn write_scalar<F: Float>(f: &mut fmt::Formatter<'_>, value: F) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{value:.precision$}"),
        None => write!(f, "{value}"),
    }
}

fn write_components<F: Float>(f: &mut fmt::Formatter<'_>, components: &[F]) -> fmt::Result {
    write!(f, "(")?;
    for (idx, &component) in components.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write_scalar(f, component)?;
    }
    write!(f, ")")
}

macro_rules! impl_vector_common {
    ($t:ident, $n:literal, [$($name:ident),+]) => {
        impl<F: Float> $t<F> {
            /// Creates a vector from an array of components.
            #[inline]
            pub const fn from_array(components: [F; $n]) -> Self {
                Self { components }
            }

            /// Creates a new vector with all zeros.
            #[inline]
            pub fn zeros() -> Self {
                Self::same(F::ZERO)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub fn same(value: F) -> Self {
                Self::from_array([value; $n])
            }

            /// The components as an array.
            #[inline]
            pub const fn as_array(&self) -> &[F; $n] {
                &self.components
            }

            /// The components as a slice.
            #[inline]
            pub fn as_slice(&self) -> &[F] {
                &self.components
            }

            /// The components as a mutable slice.
            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [F] {
                &mut self.components
            }

            /// Sets all components to zero.
            #[inline]
            pub fn set_zero(&mut self) -> &mut Self {
                self.components = [F::ZERO; $n];
                self
            }

            /// Copies the components of `other` into this vector.
            #[inline]
            pub fn set(&mut self, other: &Self) -> &mut Self {
                self.components = other.components;
                self
            }

            /// Flips the sign of every component.
            #[inline]
            pub fn negate(&mut self) -> &mut Self {
                *self = -*self;
                self
            }

            /// Computes the magnitude (Euclidean length) of the vector.
            #[inline]
            pub fn magnitude(&self) -> F {
                self.magnitude_squared().sqrt()
            }

            /// Computes the square of the magnitude of the vector.
            #[inline]
            pub fn magnitude_squared(&self) -> F {
                self.dot(self)
            }

            /// Computes the distance between the points this and another vector
            /// point to.
            #[inline]
            pub fn distance(&self, other: &Self) -> F {
                (self - other).magnitude()
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> F {
                self.components
                    .iter()
                    .zip(&other.components)
                    .fold(F::ZERO, |sum, (&a, &b)| sum + a * b)
            }

            /// Scales the vector to unit magnitude.
            ///
            /// # Errors
            /// Returns [`MathError::ZeroMagnitude`] and leaves the vector
            /// unchanged if its magnitude is within epsilon of zero.
            #[inline]
            pub fn normalize(&mut self) -> Result<&mut Self> {
                let magnitude = self.magnitude();
                if is_zero(magnitude) {
                    return Err(MathError::ZeroMagnitude);
                }
                *self /= magnitude;
                Ok(self)
            }

            /// Computes the normalized version of the vector.
            ///
            /// # Errors
            /// Returns [`MathError::ZeroMagnitude`] if the magnitude is within
            /// epsilon of zero.
            #[inline]
            pub fn normalized(&self) -> Result<Self> {
                let mut normalized = *self;
                normalized.normalize()?;
                Ok(normalized)
            }

            /// Computes the angle in radians between this vector and another, in
            /// the range `[0, π]`.
            ///
            /// # Errors
            /// Returns [`MathError::ZeroMagnitude`] if either vector has a
            /// magnitude within epsilon of zero.
            pub fn angle_between(&self, other: &Self) -> Result<F> {
                let magnitude = self.magnitude();
                let other_magnitude = other.magnitude();
                if is_zero(magnitude) || is_zero(other_magnitude) {
                    return Err(MathError::ZeroMagnitude);
                }
                let cos_angle = clamp(
                    self.dot(other) / (magnitude * other_magnitude),
                    F::NEG_ONE,
                    F::ONE,
                );
                Ok(cos_angle.acos())
            }

            /// Divides each component by the given scalar.
            ///
            /// # Errors
            /// Returns [`MathError::DivisionByZero`] if the divisor is within
            /// epsilon of zero.
            #[inline]
            pub fn try_div_scalar(&self, divisor: F) -> Result<Self> {
                if is_zero(divisor) {
                    return Err(MathError::DivisionByZero);
                }
                Ok(self / divisor)
            }

            /// Divides each component by the corresponding component in
            /// another vector.
            ///
            /// # Errors
            /// Returns [`MathError::DivisionByZero`] if any component of the
            /// divisor is within epsilon of zero.
            #[inline]
            pub fn try_div(&self, divisor: &Self) -> Result<Self> {
                if divisor.components.iter().any(|&component| is_zero(component)) {
                    return Err(MathError::DivisionByZero);
                }
                Ok(self / divisor)
            }

            /// Multiplies each component by the corresponding component in
            /// another vector.
            #[inline]
            pub fn component_mul(&self, other: &Self) -> Self {
                self * other
            }

            /// Returns a vector where each component is the minimum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::from_array(std::array::from_fn(|i| {
                    self.components[i].min(other.components[i])
                }))
            }

            /// Returns a vector where each component is the maximum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::from_array(std::array::from_fn(|i| {
                    self.components[i].max(other.components[i])
                }))
            }

            /// Returns a vector with the given closure applied to each component.
            #[inline]
            pub fn mapped(&self, f: impl FnMut(F) -> F) -> Self {
                Self::from_array(self.components.map(f))
            }

            /// Linearly interpolates between this vector (`t = 0`) and another
            /// (`t = 1`).
            #[inline]
            pub fn lerp(&self, other: &Self, t: F) -> Self {
                self + (other - self) * t
            }
        }

        impl<F: Float> From<[F; $n]> for $t<F> {
            #[inline]
            fn from(components: [F; $n]) -> Self {
                Self::from_array(components)
            }
        }

        impl<F: Float> From<$t<F>> for [F; $n] {
            #[inline]
            fn from(vector: $t<F>) -> Self {
                vector.components
            }
        }

        impl<F: Float> Index<usize> for $t<F> {
            type Output = F;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.components[index]
            }
        }

        impl<F: Float> IndexMut<usize> for $t<F> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.components[index]
            }
        }

        impl_binop!(Add, add, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_array(std::array::from_fn(|i| a.components[i] + b.components[i]))
        });

        impl_binop!(Sub, sub, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_array(std::array::from_fn(|i| a.components[i] - b.components[i]))
        });

        impl_binop!(Mul, mul, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_array(std::array::from_fn(|i| a.components[i] * b.components[i]))
        });

        impl_binop!(Div, div, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_array(std::array::from_fn(|i| a.components[i] / b.components[i]))
        });

        impl_binop!(Add, add, $t<F>, F, $t<F>, |a, b| {
            a.mapped(|component| component + *b)
        });

        impl_binop!(Sub, sub, $t<F>, F, $t<F>, |a, b| {
            a.mapped(|component| component - *b)
        });

        impl_binop!(Mul, mul, $t<F>, F, $t<F>, |a, b| {
            a.mapped(|component| component * *b)
        });

        impl_binop!(Div, div, $t<F>, F, $t<F>, |a, b| {
            a.mapped(|component| component / *b)
        });

        impl_scalar_lhs_mul!($t);

        impl_binop_assign!(AddAssign, add_assign, $t<F>, $t<F>, |a, b| {
            *a = &*a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t<F>, $t<F>, |a, b| {
            *a = &*a - b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t<F>, $t<F>, |a, b| {
            *a = &*a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t<F>, $t<F>, |a, b| {
            *a = &*a / b;
        });

        impl_binop_assign!(AddAssign, add_assign, $t<F>, F, |a, b| {
            *a = &*a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t<F>, F, |a, b| {
            *a = &*a - b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t<F>, F, |a, b| {
            *a = &*a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t<F>, F, |a, b| {
            *a = &*a / b;
        });

        impl_unary_op!(Neg, neg, $t<F>, $t<F>, |val| {
            val.mapped(|component| -component)
        });

        impl_componentwise_approx_eq!($t<F>);

        impl_pod!($t);

        impl<F: Float> fmt::Debug for $t<F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($t))
                    $(.field(stringify!($name), &self.$name()))+
                    .finish()
            }
        }

        impl<F: Float> fmt::Display for $t<F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_components(f, &self.components)
            }
        }
    };
}

impl_vector_common!(Vector2, 2, [x, y]);
impl_vector_common!(Vector3, 3, [x, y, z]);
impl_vector_common!(Vector4, 4, [x, y, z, w]);

impl<F: Float> Vector2<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F, y: F) -> Self {
        Self::from_array([x, y])
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE)
    }

    /// Sets the components to the given values.
    #[inline]
    pub fn set_components(&mut self, x: F, y: F) -> &mut Self {
        self.components = [x, y];
        self
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> F {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> F {
        self.components[1]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: F) -> Vector3<F> {
        Vector3::new(self.x(), self.y(), z)
    }

    /// Computes the 2D cross product with another vector. This is the
    /// z-component of the 3D cross product of the two vectors embedded in the
    /// xy-plane, so it is positive when `other` lies counter-clockwise of this
    /// vector.
    #[inline]
    pub fn cross(&self, other: &Self) -> F {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Returns the vector rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Finds the unit vector perpendicular to `a` that lies on the same side
    /// of `a` as `b`. When `b` is parallel to `a`, the counter-clockwise
    /// perpendicular is returned.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if either vector has a magnitude
    /// within epsilon of zero.
    pub fn find_normal_axis_between(a: &Self, b: &Self) -> Result<Self> {
        let a_direction = a.normalized()?;
        let b_direction = b.normalized()?;
        let perpendicular = a_direction.perpendicular();
        let cross = a_direction.cross(&b_direction);
        if is_zero(cross) || cross > F::ZERO {
            Ok(perpendicular)
        } else {
            Ok(-perpendicular)
        }
    }
}

impl<F: Float> Vector3<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F, y: F, z: F) -> Self {
        Self::from_array([x, y, z])
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE, F::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ONE)
    }

    /// Sets the components to the given values.
    #[inline]
    pub fn set_components(&mut self, x: F, y: F, z: F) -> &mut Self {
        self.components = [x, y, z];
        self
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> F {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> F {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> F {
        self.components[2]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut F {
        &mut self.components[2]
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub const fn xy(&self) -> Vector2<F> {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: F) -> Vector4<F> {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Computes the right-handed cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Finds the unit axis normal to the plane spanned by `a` and `b`,
    /// oriented so that rotating `a` towards `b` is counter-clockwise about
    /// it.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if either vector has a magnitude
    /// within epsilon of zero, and [`MathError::DegenerateInput`] if the
    /// vectors are parallel or antiparallel.
    pub fn find_normal_axis_between(a: &Self, b: &Self) -> Result<UnitVector3<F>> {
        let a_direction = a.normalized()?;
        let b_direction = b.normalized()?;
        let normal = a_direction.cross(&b_direction);
        let sin_angle = normal.magnitude();
        if is_zero(sin_angle) {
            return Err(MathError::DegenerateInput);
        }
        Ok(UnitVector3::unchecked_from(normal / sin_angle))
    }
}

impl<F: Float> Vector4<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO, F::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE, F::ZERO, F::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ONE, F::ZERO)
    }

    /// The w-axis unit vector.
    #[inline]
    pub fn unit_w() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE)
    }

    /// Sets the components to the given values.
    #[inline]
    pub fn set_components(&mut self, x: F, y: F, z: F, w: F) -> &mut Self {
        self.components = [x, y, z, w];
        self
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> F {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> F {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> F {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> F {
        self.components[3]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut F {
        &mut self.components[2]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut F {
        &mut self.components[3]
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3<F> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl<F: Float> UnitVector3<F> {
    /// Converts the given vector to a unit vector, assuming it is already
    /// normalized.
    #[inline]
    pub const fn unchecked_from(vector: Vector3<F>) -> Self {
        Self { vector }
    }

    /// Creates a unit vector with the given components. The components are
    /// assumed to describe a vector of unit length.
    #[inline]
    pub const fn new_unchecked(x: F, y: F, z: F) -> Self {
        Self::unchecked_from(Vector3::new(x, y, z))
    }

    /// Creates a unit vector by normalizing the given vector.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if the vector's magnitude is
    /// within epsilon of zero.
    #[inline]
    pub fn normalized_from(vector: Vector3<F>) -> Result<Self> {
        vector.normalized().map(Self::unchecked_from)
    }

    /// Creates a unit vector by normalizing the given vector, and returns
    /// both the unit vector and the original magnitude.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if the vector's magnitude is
    /// within epsilon of zero.
    #[inline]
    pub fn normalized_from_and_magnitude(vector: Vector3<F>) -> Result<(Self, F)> {
        let magnitude = vector.magnitude();
        Self::normalized_from(vector).map(|unit_vector| (unit_vector, magnitude))
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::unchecked_from(Vector3::unit_x())
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::unchecked_from(Vector3::unit_y())
    }

    /// The z-axis unit vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::unchecked_from(Vector3::unit_z())
    }

    /// The negative x-axis unit vector.
    #[inline]
    pub fn neg_unit_x() -> Self {
        -Self::unit_x()
    }

    /// The negative y-axis unit vector.
    #[inline]
    pub fn neg_unit_y() -> Self {
        -Self::unit_y()
    }

    /// The negative z-axis unit vector.
    #[inline]
    pub fn neg_unit_z() -> Self {
        -Self::unit_z()
    }

    /// The underlying vector.
    #[inline]
    pub const fn as_vector(&self) -> &Vector3<F> {
        &self.vector
    }

    #[inline]
    pub fn as_slice(&self) -> &[F] {
        self.vector.as_slice()
    }
}

impl<F: Float> Deref for UnitVector3<F> {
    type Target = Vector3<F>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vector
    }
}

impl<F: Float> From<UnitVector3<F>> for Vector3<F> {
    #[inline]
    fn from(unit_vector: UnitVector3<F>) -> Self {
        unit_vector.vector
    }
}

impl_binop!(Mul, mul, UnitVector3<F>, F, Vector3<F>, |a, b| {
    a.vector * *b
});

impl_unary_op!(Neg, neg, UnitVector3<F>, UnitVector3<F>, |val| {
    UnitVector3::unchecked_from(-val.vector)
});

impl<F: Float> Index<usize> for UnitVector3<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vector[index]
    }
}

impl_componentwise_approx_eq!(UnitVector3<F>);

impl<F: Float> fmt::Debug for UnitVector3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitVector3")
            .field("x", &self.vector.x())
            .field("y", &self.vector.y())
            .field("z", &self.vector.z())
            .finish()
    }
}

impl<F: Float> fmt::Display for UnitVector3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vector, f)
    }
}
