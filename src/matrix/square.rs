use alloc::vec::Vec;

use crate::linalg::{LuDecomposition, PivotedLu};
use crate::traits::{LinalgScalar, Scalar};

use super::{Matrix, MatrixError};

impl<T: Scalar> Matrix<T> {
    /// Sum of the diagonal elements.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// assert_eq!(m.trace().unwrap(), 15.0);
    /// ```
    pub fn trace(&self) -> Result<T, MatrixError> {
        let n = self.require_square()?;
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self[(i, i)];
        }
        Ok(sum)
    }
}

impl<T: LinalgScalar> Matrix<T> {
    /// Doolittle LU decomposition without pivoting.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 4.0, 5.0]);
    /// let lu = a.lu().unwrap();
    /// assert_eq!(lu.l() * lu.u(), a);
    /// ```
    pub fn lu(&self) -> Result<LuDecomposition<T>, MatrixError> {
        LuDecomposition::new(self)
    }

    /// LU decomposition with partial pivoting.
    pub fn lu_pivoted(&self) -> Result<PivotedLu<T>, MatrixError> {
        self.require_square()?;
        PivotedLu::new(self)
    }

    /// Determinant as the product of the pivots of the unpivoted LU.
    ///
    /// Exactly zero whenever a pivot is exactly zero, which includes every
    /// matrix with a zero first row.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let a = Matrix::from_rows(3, 3, &[2.0_f64, 1.0, 1.0, 4.0, -6.0, 0.0, -2.0, 7.0, 2.0]);
    /// assert!((a.determinant().unwrap() + 16.0).abs() < 1e-12);
    /// assert_eq!(Matrix::<f64>::eye(4).determinant().unwrap(), 1.0);
    /// ```
    pub fn determinant(&self) -> Result<T, MatrixError> {
        Ok(self.lu()?.det())
    }

    /// Inverse via one LU factorisation and `n` substitution passes.
    ///
    /// ```
    /// use advmath::{Matrix, MatrixError};
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let inv = a.inverse().unwrap();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(1, 0)] + 0.2).abs() < 1e-12);
    ///
    /// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert_eq!(singular.inverse().unwrap_err(), MatrixError::Singular);
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        self.lu()?.inverse()
    }

    /// Solve `A x = b` for a single right-hand side.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, MatrixError> {
        self.lu()?.solve(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_non_square() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.trace().unwrap_err(), MatrixError::NonSquare { nrows: 2, ncols: 3 });
    }

    #[test]
    fn square_only_operations_reject_rectangles() {
        let m = Matrix::<f64>::fill(3, 2, 1.0);
        let err = MatrixError::NonSquare { nrows: 3, ncols: 2 };
        assert_eq!(m.lu().unwrap_err(), err);
        assert_eq!(m.lu_pivoted().unwrap_err(), err);
        assert_eq!(m.determinant().unwrap_err(), err);
        assert_eq!(m.inverse().unwrap_err(), err);
        assert_eq!(m.solve(&[1.0, 2.0, 3.0]).unwrap_err(), err);
    }

    #[test]
    fn det_4x4() {
        let a = Matrix::<f64>::from_rows(
            4,
            4,
            &[1.0, 2.0, 3.0, 4.0, 0.0, 2.0, 3.0, 4.0, 1.0, 2.0, 0.0, 4.0, 1.0, 0.0, 3.0, 4.0],
        );
        assert!((a.determinant().unwrap() + 24.0).abs() < 1e-10);
    }

    #[test]
    fn det_zero_first_row() {
        let a = Matrix::<f64>::from_rows(3, 3, &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(a.determinant().unwrap(), 0.0);
        assert_eq!(a.inverse().unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn solve_matches_inverse() {
        let a = Matrix::<f64>::from_rows(3, 3, &[4.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 4.0]);
        let b = [11.0, -16.0, 17.0];
        let x = a.solve(&b).unwrap();
        let inv = a.inverse().unwrap();
        for i in 0..3 {
            let mut xi = 0.0;
            for j in 0..3 {
                xi += inv[(i, j)] * b[j];
            }
            assert!((x[i] - xi).abs() < 1e-12);
        }
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] + 2.0).abs() < 1e-12);
        assert!((x[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn f32_inverse() {
        let a = Matrix::from_rows(2, 2, &[2.0_f32, 0.0, 0.0, 4.0]);
        let inv = a.inverse().unwrap();
        assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.25]);
    }
}
