use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::substitute::{back_substitute, forward_substitute};
use crate::matrix::MatrixError;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// Doolittle factorisation `A = L U` without pivoting.
///
/// `l` and `u` must be zero-initialised `n x n` buffers. For each `i` in
/// increasing order, row `i` of `U` is filled before column `i` of `L`:
///
/// ```text
/// U[i][k] = A[i][k] - Σ_{j<i} L[i][j] U[j][k]            k >= i
/// L[i][i] = 1
/// L[k][i] = (A[k][i] - Σ_{j<i} L[k][j] U[j][i]) / U[i][i]   k > i
/// ```
///
/// A zero pivot is not an error here: the division propagates `inf`/`NaN`
/// into the remaining entries of `L` and `U`.
pub fn doolittle<T: LinalgScalar>(
    a: &impl MatrixRef<T>,
    l: &mut impl MatrixMut<T>,
    u: &mut impl MatrixMut<T>,
) {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    debug_assert_eq!((l.nrows(), l.ncols()), (n, n));
    debug_assert_eq!((u.nrows(), u.ncols()), (n, n));

    for i in 0..n {
        for k in i..n {
            let mut sum = T::zero();
            for j in 0..i {
                sum = sum + *l.get(i, j) * *u.get(j, k);
            }
            *u.get_mut(i, k) = *a.get(i, k) - sum;
        }

        let pivot = *u.get(i, i);
        if pivot == T::zero() {
            log::trace!("doolittle: zero pivot at row {}", i);
        }

        *l.get_mut(i, i) = T::one();
        for k in (i + 1)..n {
            let mut sum = T::zero();
            for j in 0..i {
                sum = sum + *l.get(k, j) * *u.get(j, i);
            }
            *l.get_mut(k, i) = (*a.get(k, i) - sum) / pivot;
        }
    }
}

/// Unpivoted LU decomposition of a square matrix: `A = L U` with `L` unit
/// lower-triangular and `U` upper-triangular.
///
/// ```
/// use advmath::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
/// let lu = a.lu().unwrap();
/// assert_eq!(lu.l().as_slice(), &[1.0, 0.0, 1.5, 1.0]);
/// assert_eq!(lu.u().as_slice(), &[4.0, 3.0, 0.0, -1.5]);
/// assert_eq!(lu.det(), -6.0);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
}

impl<T: LinalgScalar> LuDecomposition<T> {
    /// Factorise `a`. Fails only if `a` is not square.
    pub fn new(a: &Matrix<T>) -> Result<Self, MatrixError> {
        if !a.is_square() {
            return Err(MatrixError::NonSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut l = Matrix::zeros(n, n);
        let mut u = Matrix::zeros(n, n);
        doolittle(a, &mut l, &mut u);
        Ok(Self { l, u })
    }

    /// Unit lower-triangular factor.
    #[inline]
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// Upper-triangular factor.
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Consume the decomposition, returning `(L, U)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.l, self.u)
    }

    /// Product of the diagonal of `U`.
    ///
    /// Returns zero as soon as an exactly-zero pivot is reached, so the
    /// non-finite entries that follow it in `U` never reach the product.
    pub fn det(&self) -> T {
        let mut d = T::one();
        for i in 0..self.u.nrows() {
            let pivot = self.u[(i, i)];
            if pivot == T::zero() {
                return T::zero();
            }
            d = d * pivot;
        }
        d
    }

    /// Solve `A x = b` for a single right-hand side.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, MatrixError> {
        let n = self.u.nrows();
        if b.len() != n {
            return Err(MatrixError::LengthMismatch {
                expected: n,
                got: b.len(),
            });
        }
        if self.det() == T::zero() {
            log::debug!("lu solve: singular {}x{} system", n, n);
            return Err(MatrixError::Singular);
        }
        let mut y = vec![T::zero(); n];
        let mut x = vec![T::zero(); n];
        forward_substitute(&self.l, b, &mut y);
        back_substitute(&self.u, &y, &mut x);
        Ok(x)
    }

    /// Inverse of `A` from the factors.
    ///
    /// Forward substitution `L Y = I` runs over every column of the identity
    /// first, then backward substitution `U X = Y` over every column of `Y`.
    /// Returns [`MatrixError::Singular`] when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        let n = self.u.nrows();
        if self.det() == T::zero() {
            log::debug!("lu inverse: determinant is zero for {}x{} matrix", n, n);
            return Err(MatrixError::Singular);
        }

        let mut e = vec![T::zero(); n];
        let mut col = vec![T::zero(); n];

        let mut y = Matrix::zeros(n, n);
        for c in 0..n {
            e.iter_mut().for_each(|v| *v = T::zero());
            e[c] = T::one();
            forward_substitute(&self.l, &e, &mut col);
            y.set_column(c, &col)?;
        }

        let mut x = Matrix::zeros(n, n);
        for c in 0..n {
            let rhs = y.column(c)?;
            back_substitute(&self.u, &rhs, &mut col);
            x.set_column(c, &col)?;
        }
        Ok(x)
    }
}
