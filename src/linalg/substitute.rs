use crate::traits::{LinalgScalar, MatrixRef};

/// Solve `L y = b` top-down for a unit lower-triangular `L`.
///
/// Only the strictly lower triangle of `l` is read, so the packed output of
/// [`lu_in_place`](super::lu_in_place) can be passed directly.
pub fn forward_substitute<T: LinalgScalar>(l: &impl MatrixRef<T>, b: &[T], y: &mut [T]) {
    let n = l.nrows();
    debug_assert_eq!(b.len(), n);
    debug_assert_eq!(y.len(), n);
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum = sum - *l.get(i, j) * y[j];
        }
        y[i] = sum;
    }
}

/// Solve `U x = y` bottom-up for an upper-triangular `U`.
///
/// Reads the diagonal and strictly upper triangle of `u`. A zero on the
/// diagonal yields non-finite entries in `x`.
pub fn back_substitute<T: LinalgScalar>(u: &impl MatrixRef<T>, y: &[T], x: &mut [T]) {
    let n = u.nrows();
    debug_assert_eq!(y.len(), n);
    debug_assert_eq!(x.len(), n);
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum = sum - *u.get(i, j) * x[j];
        }
        x[i] = sum / *u.get(i, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn forward_unit_lower() {
        let l = Matrix::<f64>::from_rows(3, 3, &[1.0, 0.0, 0.0, 2.0, 1.0, 0.0, -1.0, 3.0, 1.0]);
        let b = [1.0, 4.0, 8.0];
        let mut y = [0.0; 3];
        forward_substitute(&l, &b, &mut y);
        // y0 = 1, y1 = 4 - 2 = 2, y2 = 8 + 1 - 6 = 3
        assert_eq!(y, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn forward_ignores_diagonal() {
        let packed = Matrix::<f64>::from_rows(2, 2, &[5.0, 7.0, 2.0, 9.0]);
        let mut y = [0.0; 2];
        forward_substitute(&packed, &[1.0, 1.0], &mut y);
        assert_eq!(y, [1.0, -1.0]);
    }

    #[test]
    fn back_upper() {
        let u = Matrix::<f64>::from_rows(3, 3, &[2.0, 1.0, -1.0, 0.0, 3.0, 2.0, 0.0, 0.0, 4.0]);
        let y = [3.0, 13.0, 8.0];
        let mut x = [0.0; 3];
        back_substitute(&u, &y, &mut x);
        assert_eq!(x, [1.0, 3.0, 2.0]);
    }
}
