//! Fixed-size geometry kernel: vectors, matrices and quaternions with
//! epsilon-tolerant comparison.

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod matrix;
pub mod num;
pub mod quaternion;
#[cfg(feature = "random")]
pub mod random;
pub mod reference;
pub mod scalar;
pub mod vector;

pub use error::{MathError, Result};
pub use num::{Float, fhy};
