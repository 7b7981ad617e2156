use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Fallible arithmetic ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn require_same_shape(&self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    ///
    /// ```
    /// use advmath::{Matrix, MatrixError};
    /// let a = Matrix::<f64>::from_rows(1, 2, &[1.0, 2.0]);
    /// let b = Matrix::<f64>::from_rows(1, 2, &[3.0, 4.0]);
    /// assert_eq!(a.try_add(&b).unwrap().as_slice(), &[4.0, 6.0]);
    ///
    /// let c = Matrix::<f64>::zeros(2, 1);
    /// assert!(matches!(a.try_add(&c), Err(MatrixError::DimensionMismatch { .. })));
    /// ```
    pub fn try_add(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.require_same_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise difference.
    pub fn try_sub(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.require_same_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Matrix product. Requires `self.ncols() == rhs.nrows()`.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let a = Matrix::<f64>::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let b = Matrix::<f64>::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    /// let c = a.try_mul(&b).unwrap();
    /// assert_eq!(c.shape(), (2, 2));
    /// assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    /// ```
    pub fn try_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self.data[self.offset(i, k)] * rhs.data[rhs.offset(k, j)];
                }
                data.push(sum);
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Multiply every element by `k`.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(2, 2, &[1.0, -2.0, 3.0, 0.5]);
    /// assert_eq!(m.scale(2.0).as_slice(), &[2.0, -4.0, 6.0, 1.0]);
    /// ```
    pub fn scale(&self, k: T) -> Matrix<T> {
        Matrix {
            data: self.data.iter().map(|&x| x * k).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

}

impl<T: Scalar + Neg<Output = T>> Matrix<T> {
    /// `scale(-1)`. Only offered for signed element types.
    pub fn negate(&self) -> Matrix<T> {
        self.scale(-T::one())
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// Operators panic on shape mismatch with the `MatrixError` message; the
// `try_*` methods are the non-panicking forms.

fn unwrap_shape<T>(result: Result<Matrix<T>, MatrixError>) -> Matrix<T> {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $try:ident) => {
        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(&rhs))
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(rhs))
            }
        }

        impl<T: Scalar> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(&rhs))
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;
            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                unwrap_shape(self.$try(rhs))
            }
        }
    };
}

impl_binop!(Add, add, try_add);
impl_binop!(Sub, sub, try_sub);
impl_binop!(Mul, mul, try_mul);

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(mut self, k: T) -> Matrix<T> {
        self *= k;
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, k: T) -> Matrix<T> {
        self.scale(k)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, k: T) {
        for x in self.data.iter_mut() {
            *x = *x * k;
        }
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::<f64>::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::<f64>::from_rows(2, 2, &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!((&a + &b).as_slice(), &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!((&a - &b).as_slice(), &[-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(a.try_sub(&a).unwrap(), Matrix::zeros(2, 2));
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = Matrix::<f64>::from_rows(1, 3, &[1.0, 2.0, 3.0]);
        let b = Matrix::<f64>::from_rows(1, 3, &[1.0, 1.0, 1.0]);
        a += &b;
        assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0]);
        a -= &b;
        a -= &b;
        assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_shape_mismatch_panics() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Matrix::<f64>::zeros(2, 3);
        let _ = a + b;
    }

    #[test]
    fn mul_shapes() {
        let a = Matrix::<f64>::fill(2, 3, 1.0);
        let b = Matrix::<f64>::fill(3, 2, 2.0);
        let c = a.try_mul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[6.0, 6.0, 6.0, 6.0]);

        let d = Matrix::<f64>::zeros(2, 2);
        assert_eq!(
            a.try_mul(&d).unwrap_err(),
            MatrixError::DimensionMismatch { lhs: (2, 3), rhs: (2, 2) }
        );
    }

    #[test]
    fn mul_identity() {
        let a = Matrix::<f64>::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = Matrix::<f64>::eye(2);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn mul_shape_mismatch_panics() {
        let a = Matrix::<f64>::zeros(2, 3);
        let _ = &a * &a;
    }

    #[test]
    fn scale_multiplies_every_element() {
        let a = Matrix::<f64>::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.scale(3.0).as_slice(), &[3.0, 6.0, 9.0, 12.0]);
        assert_eq!((2.0 * &a).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((a.clone() * 0.5).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn negate() {
        let a = Matrix::<f64>::from_rows(1, 3, &[1.0, -2.0, 0.0]);
        assert_eq!(a.negate().as_slice(), &[-1.0, 2.0, 0.0]);
        assert_eq!(-&a, a.negate());
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn integer_elements() {
        let a = Matrix::from_rows(2, 2, &[1_i32, 2, 3, 4]);
        let b = a.try_mul(&a).unwrap();
        assert_eq!(b.as_slice(), &[7, 10, 15, 22]);
        assert_eq!(a.negate().as_slice(), &[-1, -2, -3, -4]);
    }

    #[test]
    fn unsigned_difference() {
        let a = Matrix::from_rows(1, 3, &[5_u32, 7, 9]);
        let b = Matrix::from_rows(1, 3, &[1_u32, 2, 3]);
        assert_eq!(a.try_sub(&b).unwrap().as_slice(), &[4, 5, 6]);
        assert_eq!((&a - &b).as_slice(), &[4, 5, 6]);
    }
}
