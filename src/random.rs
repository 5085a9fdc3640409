//! Generation of random kernel values.

use crate::{
    matrix::{Matrix3, Matrix4},
    num::Float,
    quaternion::{Quaternion, UnitQuaternion},
    vector::{Vector2, Vector3, Vector4},
};
use rand::{Rng, distr::uniform::SampleUniform};

/// Draws a scalar uniformly from `[-1, 1]`.
#[inline]
pub fn scalar<F, R>(rng: &mut R) -> F
where
    F: Float + SampleUniform,
    R: Rng + ?Sized,
{
    rng.random_range(F::NEG_ONE..=F::ONE)
}

fn array<F, R, const N: usize>(rng: &mut R) -> [F; N]
where
    F: Float + SampleUniform,
    R: Rng + ?Sized,
{
    std::array::from_fn(|_| scalar(rng))
}

/// Creates a 2D vector with components drawn uniformly from `[-1, 1]`.
pub fn vector2<F: Float + SampleUniform, R: Rng + ?Sized>(rng: &mut R) -> Vector2<F> {
    Vector2::from_array(array(rng))
}

/// Creates a 3D vector with components drawn uniformly from `[-1, 1]`.
pub fn vector3<F: Float + SampleUniform, R: Rng + ?Sized>(rng: &mut R) -> Vector3<F> {
    Vector3::from_array(array(rng))
}

/// Creates a 4D vector with components drawn uniformly from `[-1, 1]`.
pub fn vector4<F: Float + SampleUniform, R: Rng + ?Sized>(rng: &mut R) -> Vector4<F> {
    Vector4::from_array(array(rng))
}

/// Creates a 3x3 matrix with elements drawn uniformly from `[-1, 1]`.
pub fn matrix3<F: Float + SampleUniform, R: Rng + ?Sized>(rng: &mut R) -> Matrix3<F> {
    Matrix3::from_column_major_array(array(rng))
}

/// Creates a 4x4 matrix with elements drawn uniformly from `[-1, 1]`.
pub fn matrix4<F: Float + SampleUniform, R: Rng + ?Sized>(rng: &mut R) -> Matrix4<F> {
    Matrix4::from_column_major_array(array(rng))
}

/// Creates a quaternion with components drawn uniformly from `[-1, 1]`.
pub fn quaternion<F: Float + SampleUniform, R: Rng + ?Sized>(rng: &mut R) -> Quaternion<F> {
    Quaternion::from_array(array(rng))
}

/// Creates a random rotation by normalizing a random quaternion. Draws that
/// are too close to zero to normalize are rejected.
pub fn unit_quaternion<F: Float + SampleUniform, R: Rng + ?Sized>(
    rng: &mut R,
) -> UnitQuaternion<F> {
    loop {
        if let Ok(rotation) = UnitQuaternion::normalized_from(quaternion(rng)) {
            return rotation;
        }
    }
}
