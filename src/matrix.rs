//! Matrices.

use crate::{
    angle::Angle,
    error::{MathError, Result},
    num::Float,
    scalar::is_zero,
    vector::{Vector3, Vector4, write_scalar},
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 3x3 matrix.
///
/// The elements are stored in column-major order, so element `(row, col)`
/// lives at index `col * 3 + row` of [`as_slice`](Self::as_slice). Matrices
/// act on column vectors, so in `a * b` the transform `b` is applied first.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix3<F> {
    elements: [F; 9],
}

/// A 4x4 matrix.
///
/// The elements are stored in column-major order, so element `(row, col)`
/// lives at index `col * 4 + row` of [`as_slice`](Self::as_slice). Matrices
/// act on column vectors, so in `a * b` the transform `b` is applied first.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix4<F> {
    elements: [F; 16],
}

/// The order in which the elements of a matrix are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatrixLayout {
    /// One matrix row per line.
    #[default]
    RowMajor,
    /// One storage column per line.
    ColumnMajor,
}

/// Helper for printing a matrix in a given [`MatrixLayout`].
#[derive(Clone, Copy, Debug)]
pub struct MatrixDisplay<'a, F> {
    elements: &'a [F],
    dimension: usize,
    layout: MatrixLayout,
}

impl<F: Float> fmt::Display for MatrixDisplay<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension;
        for line in 0..n {
            if line > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for k in 0..n {
                if k > 0 {
                    write!(f, ", ")?;
                }
                let idx = match self.layout {
                    MatrixLayout::RowMajor => k * n + line,
                    MatrixLayout::ColumnMajor => line * n + k,
                };
                write_scalar(f, self.elements[idx])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

macro_rules! impl_matrix_common {
    ($t:ident, $v:ident, $n:literal, $len:literal) => {
        impl<F: Float> $t<F> {
            /// Creates a matrix from an array of elements in column-major
            /// order.
            #[inline]
            pub const fn from_column_major_array(elements: [F; $len]) -> Self {
                Self { elements }
            }

            /// Creates a matrix from a slice of elements in column-major
            /// order.
            ///
            /// # Panics
            /// If the length of the slice is not the number of elements in the
            /// matrix.
            #[inline]
            pub fn from_column_major_slice(elements: &[F]) -> Self {
                let mut matrix = Self::zeros();
                matrix.elements.copy_from_slice(elements);
                matrix
            }

            /// Creates a matrix where each element is given by calling the
            /// closure with its row and column index.
            #[inline]
            pub fn from_fn(mut f: impl FnMut(usize, usize) -> F) -> Self {
                Self::from_column_major_array(std::array::from_fn(|idx| f(idx % $n, idx / $n)))
            }

            /// Creates the identity matrix.
            #[inline]
            pub fn identity() -> Self {
                Self::from_fn(|row, col| if row == col { F::ONE } else { F::ZERO })
            }

            /// Creates a matrix with all zeros.
            #[inline]
            pub fn zeros() -> Self {
                Self::from_column_major_array([F::ZERO; $len])
            }

            /// Creates a diagonal matrix with the given vector as the diagonal.
            #[inline]
            pub fn from_diagonal(diagonal: &$v<F>) -> Self {
                Self::from_fn(|row, col| if row == col { diagonal[row] } else { F::ZERO })
            }

            /// The elements in column-major order.
            #[inline]
            pub const fn as_array(&self) -> &[F; $len] {
                &self.elements
            }

            /// The elements in column-major order.
            #[inline]
            pub fn as_slice(&self) -> &[F] {
                &self.elements
            }

            /// The element at the given row and column.
            ///
            /// # Panics
            /// If the row or column is out of bounds.
            #[inline]
            pub fn element(&self, row: usize, col: usize) -> F {
                self[(row, col)]
            }

            /// A mutable reference to the element at the given row and column.
            ///
            /// # Panics
            /// If the row or column is out of bounds.
            #[inline]
            pub fn element_mut(&mut self, row: usize, col: usize) -> &mut F {
                &mut self[(row, col)]
            }

            /// The column with the given index.
            #[inline]
            pub fn column(&self, col: usize) -> $v<F> {
                $v::from_array(std::array::from_fn(|row| self.element(row, col)))
            }

            /// The row with the given index.
            #[inline]
            pub fn row(&self, row: usize) -> $v<F> {
                $v::from_array(std::array::from_fn(|col| self.element(row, col)))
            }

            /// The diagonal of the matrix.
            #[inline]
            pub fn diagonal(&self) -> $v<F> {
                $v::from_array(std::array::from_fn(|idx| self.element(idx, idx)))
            }

            /// The sum of the diagonal elements.
            #[inline]
            pub fn trace(&self) -> F {
                (0..$n).fold(F::ZERO, |sum, idx| sum + self.element(idx, idx))
            }

            /// Returns a matrix with the given closure applied to each element.
            #[inline]
            pub fn mapped(&self, f: impl FnMut(F) -> F) -> Self {
                Self::from_column_major_array(self.elements.map(f))
            }

            /// Computes the transpose of the matrix.
            #[inline]
            pub fn transposed(&self) -> Self {
                Self::from_fn(|row, col| self.element(col, row))
            }

            /// Transposes the matrix in place.
            #[inline]
            pub fn transpose(&mut self) -> &mut Self {
                *self = self.transposed();
                self
            }

            /// Computes the inverse of the matrix as its adjugate divided by
            /// its determinant.
            ///
            /// # Errors
            /// Returns [`MathError::SingularMatrix`] if the determinant is
            /// within epsilon of zero.
            pub fn inverted(&self) -> Result<Self> {
                let determinant = self.determinant();
                if is_zero(determinant) {
                    return Err(MathError::SingularMatrix {
                        determinant: determinant.to_f64().unwrap_or(f64::NAN),
                    });
                }
                Ok(self.adjugate() / determinant)
            }

            /// Inverts the matrix in place.
            ///
            /// # Errors
            /// Returns [`MathError::SingularMatrix`] and leaves the matrix
            /// unchanged if the determinant is within epsilon of zero.
            #[inline]
            pub fn invert(&mut self) -> Result<&mut Self> {
                *self = self.inverted()?;
                Ok(self)
            }

            /// Whether the columns of the matrix are mutually orthogonal unit
            /// vectors, within epsilon.
            #[inline]
            pub fn is_orthonormal(&self) -> bool {
                (self.transposed() * self).equals(&Self::identity())
            }

            /// Returns a helper for printing the matrix with the given layout.
            #[inline]
            pub fn display(&self, layout: MatrixLayout) -> MatrixDisplay<'_, F> {
                MatrixDisplay {
                    elements: &self.elements,
                    dimension: $n,
                    layout,
                }
            }
        }

        impl<F: Float> Index<(usize, usize)> for $t<F> {
            type Output = F;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                assert!(row < $n && col < $n, "matrix index ({row}, {col}) out of bounds");
                &self.elements[col * $n + row]
            }
        }

        impl<F: Float> IndexMut<(usize, usize)> for $t<F> {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                assert!(row < $n && col < $n, "matrix index ({row}, {col}) out of bounds");
                &mut self.elements[col * $n + row]
            }
        }

        impl_binop!(Add, add, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_column_major_array(std::array::from_fn(|i| a.elements[i] + b.elements[i]))
        });

        impl_binop!(Sub, sub, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_column_major_array(std::array::from_fn(|i| a.elements[i] - b.elements[i]))
        });

        impl_binop!(Mul, mul, $t<F>, $t<F>, $t<F>, |a, b| {
            $t::from_fn(|row, col| {
                (0..$n).fold(F::ZERO, |sum, k| sum + a.element(row, k) * b.element(k, col))
            })
        });

        impl_binop!(Mul, mul, $t<F>, $v<F>, $v<F>, |a, b| {
            $v::from_array(std::array::from_fn(|row| {
                (0..$n).fold(F::ZERO, |sum, k| sum + a.element(row, k) * b[k])
            }))
        });

        impl_binop!(Mul, mul, $t<F>, F, $t<F>, |a, b| {
            a.mapped(|element| element * *b)
        });

        impl_binop!(Div, div, $t<F>, F, $t<F>, |a, b| {
            a.mapped(|element| element / *b)
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

        impl_binop_assign!(MulAssign, mul_assign, $t<F>, F, |a, b| {
            *a = &*a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t<F>, F, |a, b| {
            *a = &*a / b;
        });

        impl_unary_op!(Neg, neg, $t<F>, $t<F>, |val| {
            val.mapped(|element| -element)
        });

        impl_componentwise_approx_eq!($t<F>);

        impl_pod!($t);

        impl<F: Float> fmt::Display for $t<F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.display(MatrixLayout::RowMajor), f)
            }
        }
    };
}

impl_matrix_common!(Matrix3, Vector3, 3, 9);
impl_matrix_common!(Matrix4, Vector4, 4, 16);

impl<F: Float> Matrix3<F> {
    /// Creates a matrix with the given columns.
    #[inline]
    pub fn from_columns(column_1: Vector3<F>, column_2: Vector3<F>, column_3: Vector3<F>) -> Self {
        let columns = [column_1, column_2, column_3];
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(row_1: Vector3<F>, row_2: Vector3<F>, row_3: Vector3<F>) -> Self {
        let rows = [row_1, row_2, row_3];
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a matrix that rotates by the given angle about the x-axis.
    pub fn rotation_x(angle: impl Angle<F>) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::from_rows(
            Vector3::new(F::ONE, F::ZERO, F::ZERO),
            Vector3::new(F::ZERO, cos, -sin),
            Vector3::new(F::ZERO, sin, cos),
        )
    }

    /// Creates a matrix that rotates by the given angle about the y-axis.
    pub fn rotation_y(angle: impl Angle<F>) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::from_rows(
            Vector3::new(cos, F::ZERO, sin),
            Vector3::new(F::ZERO, F::ONE, F::ZERO),
            Vector3::new(-sin, F::ZERO, cos),
        )
    }

    /// Creates a matrix that rotates by the given angle about the z-axis.
    pub fn rotation_z(angle: impl Angle<F>) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self::from_rows(
            Vector3::new(cos, -sin, F::ZERO),
            Vector3::new(sin, cos, F::ZERO),
            Vector3::new(F::ZERO, F::ZERO, F::ONE),
        )
    }

    /// Creates a matrix that scales each axis by the corresponding component
    /// of the given vector.
    #[inline]
    pub fn scaling(scaling: &Vector3<F>) -> Self {
        Self::from_diagonal(scaling)
    }

    /// Computes the determinant as the scalar triple product of the columns.
    #[inline]
    pub fn determinant(&self) -> F {
        self.column(0).dot(&self.column(1).cross(&self.column(2)))
    }

    /// Computes the adjugate (transposed cofactor matrix). Its rows are the
    /// cross products of pairs of columns.
    pub fn adjugate(&self) -> Self {
        let column_1 = self.column(0);
        let column_2 = self.column(1);
        let column_3 = self.column(2);
        Self::from_rows(
            column_2.cross(&column_3),
            column_3.cross(&column_1),
            column_1.cross(&column_2),
        )
    }

    /// Embeds the matrix in the upper left corner of a 4x4 identity matrix.
    #[inline]
    pub fn to_homogeneous(&self) -> Matrix4<F> {
        Matrix4::from_fn(|row, col| {
            if row < 3 && col < 3 {
                self.element(row, col)
            } else if row == col {
                F::ONE
            } else {
                F::ZERO
            }
        })
    }
}

impl<F: Float> Matrix4<F> {
    /// Creates a matrix with the given columns.
    #[inline]
    pub fn from_columns(
        column_1: Vector4<F>,
        column_2: Vector4<F>,
        column_3: Vector4<F>,
        column_4: Vector4<F>,
    ) -> Self {
        let columns = [column_1, column_2, column_3, column_4];
        Self::from_fn(|row, col| columns[col][row])
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(row_1: Vector4<F>, row_2: Vector4<F>, row_3: Vector4<F>, row_4: Vector4<F>) -> Self {
        let rows = [row_1, row_2, row_3, row_4];
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a homogeneous transform that translates points by the given
    /// vector.
    #[inline]
    pub fn translation(translation: &Vector3<F>) -> Self {
        let mut matrix = Self::identity();
        *matrix.element_mut(0, 3) = translation.x();
        *matrix.element_mut(1, 3) = translation.y();
        *matrix.element_mut(2, 3) = translation.z();
        matrix
    }

    /// Creates a homogeneous transform that scales each axis by the
    /// corresponding component of the given vector.
    #[inline]
    pub fn scaling(scaling: &Vector3<F>) -> Self {
        Self::from_diagonal(&scaling.extended(F::ONE))
    }

    /// Creates a homogeneous transform that rotates by the given angle about
    /// the x-axis.
    #[inline]
    pub fn rotation_x(angle: impl Angle<F>) -> Self {
        Matrix3::rotation_x(angle).to_homogeneous()
    }

    /// Creates a homogeneous transform that rotates by the given angle about
    /// the y-axis.
    #[inline]
    pub fn rotation_y(angle: impl Angle<F>) -> Self {
        Matrix3::rotation_y(angle).to_homogeneous()
    }

    /// Creates a homogeneous transform that rotates by the given angle about
    /// the z-axis.
    #[inline]
    pub fn rotation_z(angle: impl Angle<F>) -> Self {
        Matrix3::rotation_z(angle).to_homogeneous()
    }

    /// The 3x3 matrix remaining after removing the given row and column.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3<F> {
        Matrix3::from_fn(|i, j| {
            let source_row = if i < row { i } else { i + 1 };
            let source_col = if j < col { j } else { j + 1 };
            self.element(source_row, source_col)
        })
    }

    /// The signed determinant of the minor for the given row and column.
    #[inline]
    pub fn cofactor(&self, row: usize, col: usize) -> F {
        let minor_determinant = self.minor(row, col).determinant();
        if (row + col) % 2 == 0 {
            minor_determinant
        } else {
            -minor_determinant
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> F {
        (0..4).fold(F::ZERO, |sum, col| {
            sum + self.element(0, col) * self.cofactor(0, col)
        })
    }

    /// Computes the adjugate (transposed cofactor matrix).
    pub fn adjugate(&self) -> Self {
        Self::from_fn(|row, col| self.cofactor(col, row))
    }

    /// The upper left 3x3 part of the matrix.
    #[inline]
    pub fn linear_part(&self) -> Matrix3<F> {
        Matrix3::from_fn(|row, col| self.element(row, col))
    }

    /// Transforms the given point, treating it as having a homogeneous
    /// coordinate of one, and divides the result by its homogeneous
    /// coordinate.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if the transformed homogeneous
    /// coordinate is within epsilon of zero.
    pub fn transform_point(&self, point: &Vector3<F>) -> Result<Vector3<F>> {
        let transformed = self * point.extended(F::ONE);
        transformed.xyz().try_div_scalar(transformed.w())
    }

    /// Transforms the given direction, treating it as having a homogeneous
    /// coordinate of zero so that translation does not apply.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3<F>) -> Vector3<F> {
        (self * vector.extended(F::ZERO)).xyz()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::angle::Radians;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::FRAC_PI_2;

    fn example_matrix3() -> Matrix3<f64> {
        Matrix3::from_rows(
            Vector3::new(2.0, -1.0, 0.5),
            Vector3::new(1.0, 3.0, -2.0),
            Vector3::new(0.0, 4.0, 1.0),
        )
    }

    fn example_matrix4() -> Matrix4<f64> {
        Matrix4::from_rows(
            Vector4::new(4.0, 1.0, -2.0, 0.5),
            Vector4::new(0.0, 3.0, 1.0, -1.0),
            Vector4::new(2.0, -1.0, 5.0, 2.0),
            Vector4::new(1.0, 0.0, 1.0, 3.0),
        )
    }

    fn to_nalgebra3(m: &Matrix3<f64>) -> nalgebra::Matrix3<f64> {
        nalgebra::Matrix3::from_column_slice(m.as_slice())
    }

    fn to_nalgebra4(m: &Matrix4<f64>) -> nalgebra::Matrix4<f64> {
        nalgebra::Matrix4::from_column_slice(m.as_slice())
    }

    // === Matrix3 Tests ===

    #[test]
    fn creating_matrix3_identity_gives_identity_matrix() {
        let m = Matrix3::<f64>::identity();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(m[(row, col)], if row == col { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn matrix3_storage_is_column_major() {
        let m = Matrix3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.as_slice(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(m.element(0, 2), 3.0);
        assert_eq!(m.column(1), Vector3::new(2.0, 5.0, 8.0));
        assert_eq!(m.row(2), Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(Matrix3::from_column_major_slice(m.as_slice()), m);
    }

    #[test]
    fn creating_matrix3_from_columns_and_rows_are_transposes() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let c = Vector3::new(7.0, 8.0, 9.0);
        assert_eq!(Matrix3::from_columns(a, b, c), Matrix3::from_rows(a, b, c).transposed());
    }

    #[test]
    #[should_panic]
    fn indexing_matrix3_out_of_bounds_panics() {
        let m = Matrix3::<f64>::identity();
        let _ = m[(3, 0)];
    }

    #[test]
    fn transposing_matrix3_in_place_works() {
        let mut m = example_matrix3();
        let original = m;
        m.transpose();
        assert_eq!(m.element(0, 1), original.element(1, 0));
        m.transpose();
        assert_eq!(m, original);
    }

    #[test]
    fn computing_matrix3_determinant_matches_nalgebra() {
        let m = example_matrix3();
        assert_abs_diff_eq!(m.determinant(), to_nalgebra3(&m).determinant(), epsilon = 1e-12);
        assert_abs_diff_eq!(Matrix3::<f64>::identity().determinant(), 1.0);
    }

    #[test]
    fn inverting_matrix3_matches_nalgebra() {
        let m = example_matrix3();
        let inverse = m.inverted().unwrap();
        let expected = to_nalgebra3(&m).try_inverse().unwrap();
        for (&a, &b) in inverse.as_slice().iter().zip(expected.as_slice()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(m * inverse, Matrix3::identity());
        assert_abs_diff_eq!(inverse * m, Matrix3::identity());
    }

    #[test]
    fn inverting_singular_matrix3_fails_and_leaves_it_unchanged() {
        let mut m = Matrix3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(2.0, 4.0, 6.0),
            Vector3::new(0.0, 1.0, 1.0),
        );
        let original = m;
        assert!(matches!(
            m.invert(),
            Err(MathError::SingularMatrix { determinant }) if determinant.abs() <= 1e-7
        ));
        assert_eq!(m, original);
    }

    #[test]
    fn inverting_matrix3_in_place_chains() {
        let mut m = Matrix3::from_diagonal(&Vector3::new(2.0, 4.0, -0.5));
        m.invert().unwrap().transpose();
        assert_abs_diff_eq!(m, Matrix3::from_diagonal(&Vector3::new(0.5, 0.25, -2.0)));
    }

    #[test]
    fn matrix3_arithmetic_operations_work() {
        let a = example_matrix3();
        let b = Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0));

        assert_eq!((a + b).element(1, 1), 5.0);
        assert_eq!((a - b).element(2, 2), -2.0);
        assert_eq!((a * 2.0).element(0, 0), 4.0);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!((a / 2.0).element(2, 1), 2.0);
        assert_eq!(-a + a, Matrix3::zeros());

        let product = a * b;
        assert_abs_diff_eq!(
            product,
            Matrix3::from_columns(a.column(0), a.column(1) * 2.0, a.column(2) * 3.0)
        );

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        c /= 2.0;
        c *= Matrix3::identity();
        assert_abs_diff_eq!(c, a);
    }

    #[test]
    fn matrix3_vector_multiplication_works() {
        let m = example_matrix3();
        let v = Vector3::new(1.0, -1.0, 2.0);
        assert_abs_diff_eq!(m * v, Vector3::new(4.0, -6.0, -2.0));
        assert_abs_diff_eq!(&m * &v, m * v);
    }

    #[test]
    fn matrix3_product_applies_right_operand_first() {
        let rotate = Matrix3::rotation_z(Radians(FRAC_PI_2));
        let stretch = Matrix3::scaling(&Vector3::new(2.0, 1.0, 1.0));
        let v = Vector3::unit_x();
        assert_abs_diff_eq!((rotate * stretch) * v, Vector3::new(0.0, 2.0, 0.0));
        assert_abs_diff_eq!((stretch * rotate) * v, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn axis_rotation_matrices_are_right_handed() {
        assert_abs_diff_eq!(
            Matrix3::rotation_x(Radians(FRAC_PI_2)) * Vector3::unit_y(),
            Vector3::unit_z()
        );
        assert_abs_diff_eq!(
            Matrix3::rotation_y(Radians(FRAC_PI_2)) * Vector3::unit_z(),
            Vector3::unit_x()
        );
        assert_abs_diff_eq!(
            Matrix3::rotation_z(Radians(FRAC_PI_2)) * Vector3::unit_x(),
            Vector3::unit_y()
        );
    }

    #[test]
    fn axis_rotation_matrices_are_orthonormal() {
        for m in [
            Matrix3::rotation_x(Radians(0.3)),
            Matrix3::rotation_y(Radians(-1.2)),
            Matrix3::rotation_z(Radians(2.5)),
        ] {
            assert!(m.is_orthonormal());
            assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
        }
        assert!(!example_matrix3().is_orthonormal());
    }

    #[test]
    fn matrix3_trace_and_diagonal_work() {
        let m = example_matrix3();
        assert_eq!(m.trace(), 6.0);
        assert_eq!(m.diagonal(), Vector3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn displaying_matrix3_shows_requested_layout() {
        let m = Matrix3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(format!("{m}"), "[1, 2, 3]\n[4, 5, 6]\n[7, 8, 9]");
        assert_eq!(
            format!("{}", m.display(MatrixLayout::ColumnMajor)),
            "[1, 4, 7]\n[2, 5, 8]\n[3, 6, 9]"
        );
        assert_eq!(
            format!("{:.1}", Matrix3::<f64>::identity()),
            "[1.0, 0.0, 0.0]\n[0.0, 1.0, 0.0]\n[0.0, 0.0, 1.0]"
        );
    }

    // === Matrix4 Tests ===

    #[test]
    fn computing_matrix4_determinant_matches_nalgebra() {
        let m = example_matrix4();
        assert_abs_diff_eq!(m.determinant(), to_nalgebra4(&m).determinant(), epsilon = 1e-10);
        assert_abs_diff_eq!(Matrix4::<f64>::identity().determinant(), 1.0);
    }

    #[test]
    fn inverting_matrix4_matches_nalgebra() {
        let m = example_matrix4();
        let inverse = m.inverted().unwrap();
        let expected = to_nalgebra4(&m).try_inverse().unwrap();
        for (&a, &b) in inverse.as_slice().iter().zip(expected.as_slice()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(m * inverse, Matrix4::identity());
    }

    #[test]
    fn inverting_singular_matrix4_fails() {
        let m = Matrix4::from_rows(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(5.0, 6.0, 7.0, 8.0),
            Vector4::new(2.0, 4.0, 6.0, 8.0),
            Vector4::new(0.0, 1.0, 0.0, 1.0),
        );
        assert!(matches!(
            m.inverted(),
            Err(MathError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn matrix4_minor_removes_row_and_column() {
        let m = example_matrix4();
        let minor = m.minor(1, 2);
        assert_eq!(minor.row(0), Vector3::new(4.0, 1.0, 0.5));
        assert_eq!(minor.row(1), Vector3::new(2.0, -1.0, 2.0));
        assert_eq!(minor.row(2), Vector3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn transforming_point_applies_scaling_before_translation() {
        let transform = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::scaling(&Vector3::new(2.0, 2.0, 2.0));
        let point = transform.transform_point(&Vector3::new(1.0, 1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(point, Vector3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn transforming_vector_ignores_translation() {
        let transform = Matrix4::translation(&Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::rotation_z(Radians(FRAC_PI_2));
        assert_abs_diff_eq!(
            transform.transform_vector(&Vector3::unit_x()),
            Vector3::unit_y()
        );
    }

    #[test]
    fn transforming_point_performs_perspective_divide() {
        let mut projection = Matrix4::<f64>::identity();
        *projection.element_mut(3, 3) = 0.0;
        *projection.element_mut(3, 2) = 1.0;

        let point = projection.transform_point(&Vector3::new(2.0, 4.0, 2.0)).unwrap();
        assert_abs_diff_eq!(point, Vector3::new(1.0, 2.0, 1.0));

        assert_eq!(
            projection.transform_point(&Vector3::new(2.0, 4.0, 0.0)),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn converting_between_matrix3_and_homogeneous_matrix4_works() {
        let m = example_matrix3();
        let homogeneous = m.to_homogeneous();
        assert_eq!(homogeneous.linear_part(), m);
        assert_eq!(homogeneous.column(3), Vector4::unit_w());
        assert_eq!(homogeneous.row(3), Vector4::unit_w());
        assert_abs_diff_eq!(
            Matrix4::rotation_y(Radians(0.7)).linear_part(),
            Matrix3::rotation_y(Radians(0.7))
        );
    }

    #[test]
    fn matrix4_vector_multiplication_works() {
        let m = example_matrix4();
        let v = Vector4::new(1.0, 0.0, -1.0, 2.0);
        assert_abs_diff_eq!(m * v, Vector4::new(7.0, -3.0, 1.0, 6.0));
    }

    #[test]
    fn matrix4_slices_can_be_cast_to_scalars() {
        let matrices = [Matrix4::<f32>::identity(), Matrix4::zeros()];
        let scalars: &[f32] = bytemuck::cast_slice(&matrices);
        assert_eq!(scalars.len(), 32);
        assert_eq!(scalars[5], 1.0);
        assert_eq!(scalars[21], 0.0);
    }

    prop_compose! {
        fn matrix3_strategy()(elements in prop::array::uniform9(-10.0_f64..10.0)) -> Matrix3<f64> {
            Matrix3::from_column_major_array(elements)
        }
    }

    prop_compose! {
        fn matrix4_strategy()(elements in prop::array::uniform16(-10.0_f64..10.0)) -> Matrix4<f64> {
            Matrix4::from_column_major_array(elements)
        }
    }

    prop_compose! {
        fn single_precision_matrix3_strategy()(
            angles in prop::array::uniform2(-3.0_f32..3.0),
            scales in prop::array::uniform3(0.5_f32..2.0),
        ) -> Matrix3<f32> {
            Matrix3::rotation_x(Radians(angles[0]))
                * Matrix3::rotation_y(Radians(angles[1]))
                * Matrix3::scaling(&Vector3::from(scales))
        }
    }

    prop_compose! {
        fn single_precision_matrix4_strategy()(
            linear in single_precision_matrix3_strategy(),
            translation in prop::array::uniform3(-1.0_f32..1.0),
        ) -> Matrix4<f32> {
            Matrix4::translation(&Vector3::from(translation)) * linear.to_homogeneous()
        }
    }

    proptest! {
        #[test]
        fn multiplying_single_precision_matrix3_with_inverse_gives_identity(
            m in single_precision_matrix3_strategy()
        ) {
            let inverse = m.inverted().unwrap();
            prop_assert!((m * inverse).equals(&Matrix3::identity()));
        }

        #[test]
        fn multiplying_single_precision_matrix4_with_inverse_gives_identity(
            m in single_precision_matrix4_strategy()
        ) {
            let inverse = m.inverted().unwrap();
            prop_assert!((m * inverse).equals(&Matrix4::identity()));
        }

        #[test]
        fn multiplying_matrix3_with_inverse_gives_identity(m in matrix3_strategy()) {
            prop_assume!(m.determinant().abs() > 1.0);
            let inverse = m.inverted().unwrap();
            prop_assert!((m * inverse).equals(&Matrix3::identity()));
        }

        #[test]
        fn multiplying_matrix4_with_inverse_gives_identity(m in matrix4_strategy()) {
            prop_assume!(m.determinant().abs() > 1.0);
            let inverse = m.inverted().unwrap();
            prop_assert!((m * inverse).equals(&Matrix4::identity()));
        }

        #[test]
        fn matrix4_determinant_matches_nalgebra(m in matrix4_strategy()) {
            let expected = to_nalgebra4(&m).determinant();
            prop_assert!((m.determinant() - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
