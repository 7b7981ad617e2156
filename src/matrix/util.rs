use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Matrix<T> {
    /// Apply `f` to every element, producing a new matrix.
    ///
    /// ```
    /// use advmath::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, n) = self.shape();
        if m == 0 || n == 0 {
            return write!(f, "[{}x{}]", m, n);
        }

        let mut widths: Vec<usize> = alloc::vec![0; n];
        for (j, w) in widths.iter_mut().enumerate() {
            for i in 0..m {
                let len = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                *w = (*w).max(len);
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for (j, &w) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = w)?;
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
