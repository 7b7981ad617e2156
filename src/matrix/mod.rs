pub mod aliases;
mod access;
mod ops;
mod square;
mod transpose;
mod util;

pub use aliases::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Errors from matrix construction, access, arithmetic and decompositions.
///
/// ```
/// use advmath::{Matrix, MatrixError};
///
/// let rect = Matrix::<f64>::zeros(2, 3);
/// assert_eq!(rect.trace().unwrap_err(), MatrixError::NonSquare { nrows: 2, ncols: 3 });
///
/// let zero_row = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 0.0, 0.0]);
/// assert_eq!(zero_row.inverse().unwrap_err(), MatrixError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A square-only operation was called on a rectangular matrix.
    NonSquare { nrows: usize, ncols: usize },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// The determinant is exactly zero, or no usable pivot exists.
    Singular,
    /// A slice of values does not have the length the operation requires.
    LengthMismatch { expected: usize, got: usize },
    /// An element, row, column or block lies outside the matrix.
    IndexOutOfRange {
        index: (usize, usize),
        shape: (usize, usize),
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            MatrixError::NonSquare { nrows, ncols } => {
                write!(f, "operation requires a square matrix, got {}x{}", nrows, ncols)
            }
            MatrixError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "dimension mismatch: {}x{} and {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::Singular => write!(f, "matrix is singular"),
            MatrixError::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {}, got {}", expected, got)
            }
            MatrixError::IndexOutOfRange { index, shape } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage: element `(r, c)` lives at `r * ncols + c`.
/// The buffer is owned exclusively; every arithmetic operation and
/// decomposition returns a freshly allocated matrix.
///
/// Element access comes in two flavours. [`get`](Matrix::get) /
/// [`set`](Matrix::set) are bounds-checked and return
/// [`MatrixError::IndexOutOfRange`]; `m[(r, c)]` panics like slice indexing.
///
/// # Examples
///
/// ```
/// use advmath::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a matrix filled with a given value.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Same as [`eye`](Matrix::eye).
    #[inline]
    pub fn identity(n: usize) -> Self {
        Self::eye(n)
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`; see
    /// [`try_from_rows`](Matrix::try_from_rows) for the fallible form.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        match Self::try_from_rows(nrows, ncols, row_major) {
            Ok(m) => m,
            Err(e) => panic!("{} for {}x{} matrix", e, nrows, ncols),
        }
    }

    /// Fallible form of [`from_rows`](Matrix::from_rows).
    pub fn try_from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self, MatrixError> {
        Self::try_from_vec(nrows, ncols, row_major.to_vec())
    }

    /// Create a matrix from an owned row-major `Vec<T>`.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        match Self::try_from_vec(nrows, ncols, data) {
            Ok(m) => m,
            Err(e) => panic!("{} for {}x{} matrix", e, nrows, ncols),
        }
    }

    /// Fallible form of [`from_vec`](Matrix::from_vec).
    pub fn try_from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::LengthMismatch {
                expected: nrows * ncols,
                got: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    // The single place where (row, col) becomes a buffer offset.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.ncols + col
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row < self.nrows && col < self.ncols {
            Ok(self.offset(row, col))
        } else {
            Err(MatrixError::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            })
        }
    }

    #[inline]
    fn require_square(&self) -> Result<usize, MatrixError> {
        if self.is_square() {
            Ok(self.nrows)
        } else {
            Err(MatrixError::NonSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.check_index(row, col) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.check_index(row, col) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}
