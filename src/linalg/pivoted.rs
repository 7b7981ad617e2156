use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::substitute::{back_substitute, forward_substitute};
use crate::matrix::MatrixError;
use crate::traits::{LinalgScalar, MatrixMut};
use crate::Matrix;

/// LU decomposition with partial pivoting, in place.
///
/// On return, `a` holds both factors packed together:
/// - upper triangle (including diagonal): U
/// - strictly lower triangle: L (unit diagonal implied)
///
/// `perm` receives the row permutation. Returns `true` if the number of row
/// swaps was even. Fails with [`MatrixError::Singular`] when the largest
/// candidate pivot in a column has modulus below machine epsilon.
pub fn lu_in_place<T: LinalgScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
) -> Result<bool, MatrixError> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(MatrixError::NonSquare {
            nrows: n,
            ncols: a.ncols(),
        });
    }
    if perm.len() != n {
        return Err(MatrixError::LengthMismatch {
            expected: n,
            got: perm.len(),
        });
    }

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut even = true;

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = a.get(col, col).modulus();
        for row in (col + 1)..n {
            let val = a.get(row, col).modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < T::lepsilon() {
            log::debug!("pivoted lu: no usable pivot in column {}", col);
            return Err(MatrixError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = *a.get(col, j);
                *a.get_mut(col, j) = *a.get(max_row, j);
                *a.get_mut(max_row, j) = tmp;
            }
            even = !even;
        }

        let inv_pivot = T::one() / *a.get(col, col);
        for row in (col + 1)..n {
            let factor = *a.get(row, col) * inv_pivot;
            *a.get_mut(row, col) = factor;
            for j in (col + 1)..n {
                let upd = *a.get(row, j) - factor * *a.get(col, j);
                *a.get_mut(row, j) = upd;
            }
        }
    }

    Ok(even)
}

/// LU decomposition with partial pivoting: `P A = L U`.
///
/// An opt-in alternative to [`LuDecomposition`](super::LuDecomposition) for
/// matrices whose leading pivots may vanish.
///
/// ```
/// use advmath::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]);
/// assert!(a.inverse().is_err());
///
/// let plu = a.lu_pivoted().unwrap();
/// assert_eq!(plu.det(), -1.0);
/// assert_eq!(plu.inverse().as_slice(), &[0.0, 1.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct PivotedLu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: LinalgScalar> PivotedLu<T> {
    /// Factorise a copy of `a`.
    pub fn new(a: &Matrix<T>) -> Result<Self, MatrixError> {
        let mut lu = a.clone();
        let mut perm = vec![0; a.nrows()];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Packed L/U storage.
    pub fn packed(&self) -> &Matrix<T> {
        &self.lu
    }

    /// Row permutation: row `i` of `P A` is row `perm()[i]` of `A`.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Determinant, including the sign of the permutation.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even {
            T::one()
        } else {
            T::zero() - T::one()
        };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }

    /// Solve `A x = b`.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, MatrixError> {
        let n = self.lu.nrows();
        if b.len() != n {
            return Err(MatrixError::LengthMismatch {
                expected: n,
                got: b.len(),
            });
        }
        let pb: Vec<T> = self.perm.iter().map(|&p| b[p]).collect();
        let mut y = vec![T::zero(); n];
        let mut x = vec![T::zero(); n];
        forward_substitute(&self.lu, &pb, &mut y);
        back_substitute(&self.lu, &y, &mut x);
        Ok(x)
    }

    /// Inverse of `A`. Cannot fail once the factorisation succeeded.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n);
        let mut y = vec![T::zero(); n];
        let mut x = vec![T::zero(); n];
        let mut pe = vec![T::zero(); n];
        for c in 0..n {
            for (i, &p) in self.perm.iter().enumerate() {
                pe[i] = if p == c { T::one() } else { T::zero() };
            }
            forward_substitute(&self.lu, &pe, &mut y);
            back_substitute(&self.lu, &y, &mut x);
            for (r, &v) in x.iter().enumerate() {
                inv[(r, c)] = v;
            }
        }
        inv
    }
}
