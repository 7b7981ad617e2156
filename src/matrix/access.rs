use alloc::vec::Vec;

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Element access ──────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Bounds-checked element read.
    ///
    /// ```
    /// use advmath::{Matrix, MatrixError};
    /// let m = Matrix::<f64>::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.get(1, 0), Ok(3.0));
    /// assert!(matches!(m.get(2, 0), Err(MatrixError::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let offset = self.check_index(row, col)?;
        Ok(self.data[offset])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        let offset = self.check_index(row, col)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Copy of row `r`.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
    /// ```
    pub fn row(&self, r: usize) -> Result<Vec<T>, MatrixError> {
        Ok(self.row_slice(r)?.to_vec())
    }

    /// Copy of column `c`.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.column(2).unwrap(), vec![3.0, 6.0]);
    /// ```
    pub fn column(&self, c: usize) -> Result<Vec<T>, MatrixError> {
        if c >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                index: (0, c),
                shape: self.shape(),
            });
        }
        Ok((0..self.nrows).map(|i| self.data[self.offset(i, c)]).collect())
    }

    /// Overwrite row `r` with `values`. Returns `&mut Self` so calls chain.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// m.set_row(0, &[1.0, 2.0]).unwrap().set_row(1, &[3.0, 4.0]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn set_row(&mut self, r: usize, values: &[T]) -> Result<&mut Self, MatrixError> {
        if r >= self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                index: (r, 0),
                shape: self.shape(),
            });
        }
        if values.len() != self.ncols {
            return Err(MatrixError::LengthMismatch {
                expected: self.ncols,
                got: values.len(),
            });
        }
        let start = self.offset(r, 0);
        self.data[start..start + self.ncols].copy_from_slice(values);
        Ok(self)
    }

    /// Overwrite column `c` with `values`.
    pub fn set_column(&mut self, c: usize, values: &[T]) -> Result<&mut Self, MatrixError> {
        if c >= self.ncols {
            return Err(MatrixError::IndexOutOfRange {
                index: (0, c),
                shape: self.shape(),
            });
        }
        if values.len() != self.nrows {
            return Err(MatrixError::LengthMismatch {
                expected: self.nrows,
                got: values.len(),
            });
        }
        for (i, &v) in values.iter().enumerate() {
            let offset = self.offset(i, c);
            self.data[offset] = v;
        }
        Ok(self)
    }
}

// ── Blocks ──────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Copy the `nrows x ncols` block whose top-left corner is `(row, col)`.
    ///
    /// The result owns its own buffer; changing it never touches `self`.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// let b = m.sub_matrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(b.as_slice(), &[5.0, 6.0, 8.0, 9.0]);
    /// ```
    pub fn sub_matrix(
        &self,
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    ) -> Result<Matrix<T>, MatrixError> {
        let row_end = row.checked_add(nrows).filter(|&e| e <= self.nrows);
        let col_end = col.checked_add(ncols).filter(|&e| e <= self.ncols);
        if row_end.is_none() || col_end.is_none() {
            return Err(MatrixError::IndexOutOfRange {
                index: (row, col),
                shape: self.shape(),
            });
        }
        let mut block = Vec::with_capacity(nrows * ncols);
        for i in row..row + nrows {
            let start = self.offset(i, col);
            block.extend_from_slice(&self.data[start..start + ncols]);
        }
        Ok(Matrix {
            data: block,
            nrows,
            ncols,
        })
    }
}

// ── Slices ──────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Row-major view of the whole buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the whole buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrow row `r` as a contiguous slice.
    pub fn row_slice(&self, r: usize) -> Result<&[T], MatrixError> {
        if r >= self.nrows {
            return Err(MatrixError::IndexOutOfRange {
                index: (r, 0),
                shape: self.shape(),
            });
        }
        let start = self.offset(r, 0);
        Ok(&self.data[start..start + self.ncols])
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
