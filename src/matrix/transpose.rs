use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Transpose into a new `ncols x nrows` matrix. `self` is untouched.
    ///
    /// Square matrices swap mirrored pairs in a fresh buffer; rectangular
    /// matrices are copied and then permuted in place by following the
    /// cycles of the index mapping, using O(1) extra scalars.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::<f64>::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// ```
    pub fn transpose(&self) -> Matrix<T> {
        if self.is_square() {
            self.transpose_square()
        } else {
            let mut t = self.clone();
            t.transpose_in_place();
            t
        }
    }

    /// Transpose the matrix's own buffer and swap its shape.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let mut m = Matrix::from_fn(3, 5, |i, j| (i * 5 + j) as f64);
    /// m.transpose_in_place();
    /// assert_eq!(m.shape(), (5, 3));
    /// assert_eq!(m[(4, 2)], 14.0);
    /// ```
    pub fn transpose_in_place(&mut self) {
        if self.is_square() {
            let n = self.nrows;
            for i in 0..n {
                for j in (i + 1)..n {
                    let (a, b) = (self.offset(i, j), self.offset(j, i));
                    self.data.swap(a, b);
                }
            }
        } else {
            cycle_transpose(&mut self.data, self.nrows, self.ncols);
            core::mem::swap(&mut self.nrows, &mut self.ncols);
        }
    }

    fn transpose_square(&self) -> Matrix<T> {
        let n = self.nrows;
        let mut t = Matrix::zeros(n, n);
        for i in 0..n {
            t[(i, i)] = self[(i, i)];
        }
        for i in 0..n {
            for j in (i + 1)..n {
                t[(i, j)] = self[(j, i)];
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }
}

/// Index whose value moves into slot `j` when a row-major `rows x cols`
/// buffer is transposed in place.
#[inline]
fn cycle_successor(j: usize, rows: usize, cols: usize) -> usize {
    (j % rows) * cols + j / rows
}

// Each cycle of the permutation is walked once, starting from its smallest
// index. Positions 0 and len-1 are fixed points.
fn cycle_transpose<T: Copy>(data: &mut [T], rows: usize, cols: usize) {
    let len = data.len();
    if len < 3 {
        return;
    }
    for start in 1..len - 1 {
        // Skip unless `start` is the smallest index in its cycle.
        let mut next = cycle_successor(start, rows, cols);
        while next > start {
            next = cycle_successor(next, rows, cols);
        }
        if next != start {
            continue;
        }

        let seed = data[start];
        let mut cur = start;
        loop {
            let src = cycle_successor(cur, rows, cols);
            if src == start {
                data[cur] = seed;
                break;
            }
            data[cur] = data[src];
            cur = src;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_transpose(m: &Matrix<f64>) -> Matrix<f64> {
        Matrix::from_fn(m.ncols(), m.nrows(), |i, j| m[(j, i)])
    }

    #[test]
    fn square() {
        let m = Matrix::<f64>::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transpose();
        assert_eq!(t.as_slice(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        assert_eq!(m[(0, 1)], 2.0);
    }

    #[test]
    fn rectangular_matches_naive() {
        for &(r, c) in &[(1, 4), (4, 1), (2, 3), (3, 2), (2, 5), (5, 2), (3, 4), (4, 6), (7, 3)] {
            let m = Matrix::from_fn(r, c, |i, j| (i * 100 + j) as f64);
            assert_eq!(m.transpose(), naive_transpose(&m), "{}x{}", r, c);
        }
    }

    #[test]
    fn input_unchanged() {
        let m = Matrix::from_fn(2, 5, |i, j| (i * 5 + j) as f64);
        let before = m.clone();
        let _ = m.transpose();
        assert_eq!(m, before);
    }

    #[test]
    fn double_transpose_roundtrip() {
        for &(r, c) in &[(2, 5), (5, 2), (9, 9), (6, 4)] {
            let m = Matrix::from_fn(r, c, |i, j| (i as f64) - 0.5 * (j as f64));
            assert_eq!(m.transpose().transpose(), m);
        }
    }

    #[test]
    fn in_place_square() {
        let mut m = Matrix::<f64>::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.transpose_in_place();
        assert_eq!(m.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn successor_mapping() {
        // 2x3 buffer: [a b c / d e f] -> [a d / b e / c f]
        let mut data = ['a', 'b', 'c', 'd', 'e', 'f'];
        cycle_transpose(&mut data, 2, 3);
        assert_eq!(data, ['a', 'd', 'b', 'e', 'c', 'f']);
        assert_eq!(cycle_successor(1, 2, 3), 3);
    }
}
