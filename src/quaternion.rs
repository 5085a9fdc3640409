//! Quaternions.

use crate::{
    angle::Angle,
    error::{MathError, Result},
    matrix::{Matrix3, Matrix4},
    num::Float,
    scalar::{equals, is_zero},
    vector::{UnitVector3, Vector3, write_scalar},
};
use std::{fmt, ops::Index};

/// A quaternion with imaginary part `(x, y, z)` and real part `w`.
///
/// Quaternions of any magnitude are allowed. To represent a rotation, use
/// [`UnitQuaternion`].
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct Quaternion<F> {
    components: [F; 4],
}

/// A quaternion of unit magnitude, representing a rotation.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct UnitQuaternion<F> {
    quaternion: Quaternion<F>,
}

impl<F: Float> Quaternion<F> {
    /// Creates a new quaternion with the given imaginary (`x`, `y`, `z`) and
    /// real (`w`) components.
    #[inline]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self::from_array([x, y, z, w])
    }

    /// Creates a quaternion from an array of components ordered `x`, `y`,
    /// `z`, `w`.
    #[inline]
    pub const fn from_array(components: [F; 4]) -> Self {
        Self { components }
    }

    /// Creates a quaternion from the given real and imaginary parts.
    #[inline]
    pub const fn from_parts(real: F, imag: Vector3<F>) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    /// Creates a quaternion with the given imaginary part and zero real part.
    #[inline]
    pub fn from_imag(imag: Vector3<F>) -> Self {
        Self::from_parts(F::ZERO, imag)
    }

    /// The identity quaternion `(0, 0, 0; 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE)
    }

    /// A quaternion with all components zero.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_array([F::ZERO; 4])
    }

    #[inline]
    pub const fn as_array(&self) -> &[F; 4] {
        &self.components
    }

    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &self.components
    }

    #[inline]
    pub const fn x(&self) -> F {
        self.components[0]
    }

    #[inline]
    pub const fn y(&self) -> F {
        self.components[1]
    }

    #[inline]
    pub const fn z(&self) -> F {
        self.components[2]
    }

    #[inline]
    pub const fn w(&self) -> F {
        self.components[3]
    }

    #[inline]
    pub const fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    #[inline]
    pub const fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    #[inline]
    pub const fn z_mut(&mut self) -> &mut F {
        &mut self.components[2]
    }

    #[inline]
    pub const fn w_mut(&mut self) -> &mut F {
        &mut self.components[3]
    }

    /// The real part `w`.
    #[inline]
    pub const fn real(&self) -> F {
        self.w()
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub const fn imag(&self) -> Vector3<F> {
        Vector3::new(self.x(), self.y(), self.z())
    }

    /// Copies the components of `other` into this quaternion.
    #[inline]
    pub fn set(&mut self, other: &Self) -> &mut Self {
        self.components = other.components;
        self
    }

    /// Sets the components to the given values.
    #[inline]
    pub fn set_components(&mut self, x: F, y: F, z: F, w: F) -> &mut Self {
        self.components = [x, y, z, w];
        self
    }

    /// Computes the dot product with another quaternion, treating both as
    /// 4-dimensional vectors.
    #[inline]
    pub fn dot(&self, other: &Self) -> F {
        self.components
            .iter()
            .zip(&other.components)
            .fold(F::ZERO, |sum, (&a, &b)| sum + a * b)
    }

    #[inline]
    pub fn magnitude(&self) -> F {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> F {
        self.dot(self)
    }

    /// Scales the quaternion to unit magnitude.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] and leaves the quaternion
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

    /// Computes the normalized version of the quaternion.
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

    /// Negates the imaginary part in place.
    #[inline]
    pub fn conjugate(&mut self) -> &mut Self {
        *self = self.conjugated();
        self
    }

    /// Computes the conjugate, which has the imaginary part negated.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Computes the multiplicative inverse, the conjugate divided by the
    /// squared magnitude.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if the magnitude is within
    /// epsilon of zero.
    #[inline]
    pub fn inverted(&self) -> Result<Self> {
        if is_zero(self.magnitude()) {
            return Err(MathError::ZeroMagnitude);
        }
        Ok(self.conjugated() / self.magnitude_squared())
    }

    /// Inverts the quaternion in place.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] and leaves the quaternion
    /// unchanged if its magnitude is within epsilon of zero.
    #[inline]
    pub fn invert(&mut self) -> Result<&mut Self> {
        *self = self.inverted()?;
        Ok(self)
    }

    #[inline]
    pub fn mapped(&self, f: impl FnMut(F) -> F) -> Self {
        Self::from_array(self.components.map(f))
    }
}

impl<F: Float> Default for Quaternion<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> Index<usize> for Quaternion<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl_binop!(Add, add, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    Quaternion::from_array(std::array::from_fn(|i| a.components[i] + b.components[i]))
});

impl_binop!(Sub, sub, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    Quaternion::from_array(std::array::from_fn(|i| a.components[i] - b.components[i]))
});

// Hamilton product
impl_binop!(Mul, mul, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    let a_imag = a.imag();
    let b_imag = b.imag();
    Quaternion::from_parts(
        a.real() * b.real() - a_imag.dot(&b_imag),
        b_imag * a.real() + a_imag * b.real() + a_imag.cross(&b_imag),
    )
});

impl_binop!(Mul, mul, Quaternion<F>, F, Quaternion<F>, |a, b| {
    a.mapped(|component| component * *b)
});

impl_binop!(Div, div, Quaternion<F>, F, Quaternion<F>, |a, b| {
    a.mapped(|component| component / *b)
});

impl_scalar_lhs_mul!(Quaternion);

impl_binop_assign!(AddAssign, add_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    *a = &*a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    *a = &*a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion<F>, F, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(DivAssign, div_assign, Quaternion<F>, F, |a, b| {
    *a = &*a / b;
});

impl_unary_op!(Neg, neg, Quaternion<F>, Quaternion<F>, |val| {
    val.mapped(|component| -component)
});

impl_componentwise_approx_eq!(Quaternion<F>);

impl_pod!(Quaternion);

impl<F: Float> fmt::Debug for Quaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl<F: Float> fmt::Display for Quaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_scalar(f, self.x())?;
        write!(f, ", ")?;
        write_scalar(f, self.y())?;
        write!(f, ", ")?;
        write_scalar(f, self.z())?;
        write!(f, "; ")?;
        write_scalar(f, self.w())?;
        write!(f, ")")
    }
}

impl<F: Float> UnitQuaternion<F> {
    /// The identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::unchecked_from(Quaternion::identity())
    }

    /// Converts the given quaternion to a unit quaternion, assuming it is
    /// already normalized.
    #[inline]
    pub const fn unchecked_from(quaternion: Quaternion<F>) -> Self {
        Self { quaternion }
    }

    /// Creates a unit quaternion by normalizing the given quaternion.
    ///
    /// # Errors
    /// Returns [`MathError::ZeroMagnitude`] if the magnitude of the
    /// quaternion is within epsilon of zero.
    #[inline]
    pub fn normalized_from(quaternion: Quaternion<F>) -> Result<Self> {
        quaternion.normalized().map(Self::unchecked_from)
    }

    /// Creates the rotation by the given angle about the given axis,
    /// counter-clockwise when looking down the axis.
    pub fn from_axis_angle(axis: &UnitVector3<F>, angle: impl Angle<F>) -> Self {
        let (sin_half_angle, cos_half_angle) = (angle.radians() * F::ONE_HALF).sin_cos();
        Self::unchecked_from(Quaternion::from_parts(
            cos_half_angle,
            *axis.as_vector() * sin_half_angle,
        ))
    }

    /// Creates the rotation described by the given rotation matrix.
    ///
    /// # Errors
    /// Returns [`MathError::NotARotation`] if the matrix is not orthonormal
    /// with a determinant of one, within epsilon.
    pub fn from_rotation_matrix(matrix: &Matrix3<F>) -> Result<Self> {
        if !matrix.is_orthonormal() || !equals(matrix.determinant(), F::ONE) {
            return Err(MathError::NotARotation);
        }
        Ok(Self::from_rotation_matrix_unchecked(matrix))
    }

    /// Creates the rotation described by the upper left 3x3 part of the given
    /// homogeneous transform. The translation part is ignored.
    ///
    /// # Errors
    /// Returns [`MathError::NotARotation`] if the 3x3 part is not orthonormal
    /// with a determinant of one, within epsilon.
    #[inline]
    pub fn from_homogeneous_matrix(matrix: &Matrix4<F>) -> Result<Self> {
        Self::from_rotation_matrix(&matrix.linear_part())
    }

    /// Creates the rotation described by the given matrix, assuming it is a
    /// valid rotation matrix.
    ///
    /// The component with the largest magnitude is computed first from the
    /// diagonal, which keeps the divisions well conditioned.
    pub fn from_rotation_matrix_unchecked(m: &Matrix3<F>) -> Self {
        let trace = m.trace();

        let quaternion = if trace > F::ZERO {
            let s = F::TWO * (F::ONE + trace).sqrt();
            Quaternion::new(
                (m[(2, 1)] - m[(1, 2)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(1, 0)] - m[(0, 1)]) / s,
                F::ONE_FOURTH * s,
            )
        } else if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
            let s = F::TWO * (F::ONE + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]).sqrt();
            Quaternion::new(
                F::ONE_FOURTH * s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(2, 1)] - m[(1, 2)]) / s,
            )
        } else if m[(1, 1)] > m[(2, 2)] {
            let s = F::TWO * (F::ONE + m[(1, 1)] - m[(0, 0)] - m[(2, 2)]).sqrt();
            Quaternion::new(
                (m[(0, 1)] + m[(1, 0)]) / s,
                F::ONE_FOURTH * s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
            )
        } else {
            let s = F::TWO * (F::ONE + m[(2, 2)] - m[(0, 0)] - m[(1, 1)]).sqrt();
            Quaternion::new(
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                F::ONE_FOURTH * s,
                (m[(1, 0)] - m[(0, 1)]) / s,
            )
        };

        Self::unchecked_from(quaternion / quaternion.magnitude())
    }

    /// The underlying quaternion.
    #[inline]
    pub const fn as_quaternion(&self) -> &Quaternion<F> {
        &self.quaternion
    }

    #[inline]
    pub fn as_slice(&self) -> &[F] {
        self.quaternion.as_slice()
    }

    #[inline]
    pub const fn real(&self) -> F {
        self.quaternion.real()
    }

    #[inline]
    pub const fn imag(&self) -> Vector3<F> {
        self.quaternion.imag()
    }

    /// The inverse rotation, which for a unit quaternion is the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::unchecked_from(self.quaternion.conjugated())
    }

    /// Rotates the given vector.
    #[inline]
    pub fn rotate_vector(&self, vector: &Vector3<F>) -> Vector3<F> {
        let imag = self.imag();
        let imag_cross_vector = imag.cross(vector);
        vector
            + imag_cross_vector * (F::TWO * self.real())
            + imag.cross(&imag_cross_vector) * F::TWO
    }

    /// Rotates the given unit vector.
    #[inline]
    pub fn rotate_unit_vector(&self, vector: &UnitVector3<F>) -> UnitVector3<F> {
        UnitVector3::unchecked_from(self.rotate_vector(vector.as_vector()))
    }

    /// Computes the rotation matrix performing the same rotation.
    ///
    /// The entries are scaled by the inverse squared magnitude, so a
    /// quaternion that has drifted slightly off unit length still yields an
    /// orthonormal matrix.
    pub fn to_rotation_matrix(&self) -> Matrix3<F> {
        let (x, y, z, w) = (
            self.quaternion.x(),
            self.quaternion.y(),
            self.quaternion.z(),
            self.quaternion.w(),
        );
        let two = F::TWO / self.quaternion.magnitude_squared();
        Matrix3::from_rows(
            Vector3::new(
                F::ONE - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
            ),
            Vector3::new(
                two * (x * y + z * w),
                F::ONE - two * (x * x + z * z),
                two * (y * z - x * w),
            ),
            Vector3::new(
                two * (x * z - y * w),
                two * (y * z + x * w),
                F::ONE - two * (x * x + y * y),
            ),
        )
    }

    /// Computes the homogeneous transform performing the same rotation.
    #[inline]
    pub fn to_homogeneous_matrix(&self) -> Matrix4<F> {
        self.to_rotation_matrix().to_homogeneous()
    }

    /// The rotation angle in radians, in the range `[0, π]`.
    #[inline]
    pub fn angle(&self) -> F {
        F::TWO * self.imag().magnitude().atan2(self.real().abs())
    }

    /// The rotation axis and angle, with the angle in the range `[0, π]`.
    /// Returns [`None`] if the rotation is the identity, which has no
    /// defined axis.
    pub fn axis_angle(&self) -> Option<(UnitVector3<F>, F)> {
        let imag = self.imag();
        let sin_half_angle = imag.magnitude();
        if is_zero(sin_half_angle) {
            return None;
        }
        let axis = if self.real() < F::ZERO {
            -imag / sin_half_angle
        } else {
            imag / sin_half_angle
        };
        Some((UnitVector3::unchecked_from(axis), self.angle()))
    }

    /// Interpolates linearly between this rotation (`t = 0`) and another
    /// (`t = 1`) along the shortest path and normalizes the result.
    pub fn nlerp(&self, other: &Self, t: F) -> Self {
        let end = if self.quaternion.dot(&other.quaternion) < F::ZERO {
            -other.quaternion
        } else {
            other.quaternion
        };
        let interpolated = self.quaternion + (end - self.quaternion) * t;
        Self::unchecked_from(interpolated / interpolated.magnitude())
    }

    /// Interpolates between this rotation (`t = 0`) and another (`t = 1`) at
    /// constant angular velocity along the shortest path. Nearly identical
    /// rotations are interpolated with [`nlerp`](Self::nlerp).
    pub fn slerp(&self, other: &Self, t: F) -> Self {
        let mut cos_angle = self.quaternion.dot(&other.quaternion);
        let mut end = other.quaternion;
        if cos_angle < F::ZERO {
            cos_angle = -cos_angle;
            end = -end;
        }

        if cos_angle > F::ONE - F::EQUALITY_EPSILON {
            return self.nlerp(other, t);
        }

        let angle = cos_angle.acos();
        let sin_angle = angle.sin();
        let start_weight = ((F::ONE - t) * angle).sin() / sin_angle;
        let end_weight = (t * angle).sin() / sin_angle;

        Self::unchecked_from(self.quaternion * start_weight + end * end_weight)
    }
}

impl<F: Float> Default for UnitQuaternion<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<UnitQuaternion<F>> for Quaternion<F> {
    #[inline]
    fn from(unit_quaternion: UnitQuaternion<F>) -> Self {
        unit_quaternion.quaternion
    }
}

impl<F: Float> Index<usize> for UnitQuaternion<F> {
    type Output = F;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.quaternion[index]
    }
}

// Composition: `a * b` rotates by `b` first. The product is renormalized so
// that repeated composition does not drift off unit length.
impl_binop!(
    Mul,
    mul,
    UnitQuaternion<F>,
    UnitQuaternion<F>,
    UnitQuaternion<F>,
    |a, b| {
        let product = a.quaternion * b.quaternion;
        UnitQuaternion::unchecked_from(product / product.magnitude())
    }
);

impl_unary_op!(Neg, neg, UnitQuaternion<F>, UnitQuaternion<F>, |val| {
    UnitQuaternion::unchecked_from(-val.quaternion)
});

impl_componentwise_approx_eq!(UnitQuaternion<F>);

impl<F: Float> fmt::Debug for UnitQuaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnitQuaternion").field(&self.quaternion).finish()
    }
}

impl<F: Float> fmt::Display for UnitQuaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.quaternion, f)
    }
}
