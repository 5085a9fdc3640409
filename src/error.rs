//! Errors for operations that are undefined for some inputs.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

/// A domain error from a kernel operation. Operations returning this error
/// leave any value they were called on unchanged.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum MathError {
    #[error("Magnitude is too close to zero")]
    ZeroMagnitude,

    #[error("Matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f64 },

    #[error("Divisor is too close to zero")]
    DivisionByZero,

    #[error("Inputs do not determine a unique result")]
    DegenerateInput,

    #[error("Matrix is not a proper rotation")]
    NotARotation,
}
