#![cfg(feature = "complex")]

use advmath::{Complex, Matrix, MatrixError, Matrixz64};

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-10;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

fn sample() -> Matrixz64 {
    Matrix::from_rows(
        3,
        3,
        &[
            c(2.0, 1.0),
            c(1.0, -1.0),
            c(0.0, 0.5),
            c(1.0, 0.0),
            c(3.0, 2.0),
            c(-1.0, 0.0),
            c(0.0, -2.0),
            c(1.0, 1.0),
            c(4.0, 0.0),
        ],
    )
}

// ── LU ───────────────────────────────────────────────────────────────

#[test]
fn complex_det_2x2() {
    let a = Matrix::from_rows(2, 2, &[c(1.0, 1.0), c(2.0, 0.0), c(0.0, 1.0), c(1.0, -1.0)]);
    // (1+i)(1-i) - 2i = 2 - 2i
    assert_complex_near(a.determinant().unwrap(), c(2.0, -2.0), TOL, "det");
}

#[test]
fn complex_lu_reconstructs() {
    let a = sample();
    let lu = a.lu().unwrap();
    let prod = lu.l() * lu.u();
    for i in 0..3 {
        for j in 0..3 {
            assert_complex_near(prod[(i, j)], a[(i, j)], TOL, &format!("LU[{},{}]", i, j));
        }
    }
}

#[test]
fn complex_inverse() {
    let a = sample();
    let inv = a.inverse().unwrap();
    let id = &a * &inv;
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { c(1.0, 0.0) } else { c(0.0, 0.0) };
            assert_complex_near(id[(i, j)], expected, TOL, &format!("A*A^-1[{},{}]", i, j));
        }
    }
}

#[test]
fn complex_solve() {
    let a = sample();
    let b = [c(1.0, 0.0), c(0.0, 1.0), c(2.0, -1.0)];
    let x = a.solve(&b).unwrap();
    for i in 0..3 {
        let mut sum = C::default();
        for j in 0..3 {
            sum = sum + a[(i, j)] * x[j];
        }
        assert_complex_near(sum, b[i], TOL, &format!("row {}", i));
    }
}

#[test]
fn complex_pivoted_matches_unpivoted() {
    let a = sample();
    let d1 = a.determinant().unwrap();
    let d2 = a.lu_pivoted().unwrap().det();
    assert_complex_near(d1, d2, TOL, "det");
}

#[test]
fn complex_singular() {
    let a = Matrix::from_rows(2, 2, &[c(1.0, 1.0), c(2.0, 2.0), c(1.0, 1.0), c(2.0, 2.0)]);
    assert_eq!(a.inverse().unwrap_err(), MatrixError::Singular);
    assert_eq!(a.lu_pivoted().unwrap_err(), MatrixError::Singular);
}

// ── Structure ────────────────────────────────────────────────────────

#[test]
fn complex_transpose_is_not_conjugate() {
    let a = Matrix::from_rows(1, 2, &[c(1.0, 2.0), c(3.0, -4.0)]);
    let t = a.transpose();
    assert_eq!(t.shape(), (2, 1));
    assert_eq!(t[(0, 0)], c(1.0, 2.0));
    assert_eq!(t[(1, 0)], c(3.0, -4.0));
}

#[test]
fn complex_trace_and_scale() {
    let a = sample();
    assert_complex_near(a.trace().unwrap(), c(9.0, 3.0), TOL, "trace");
    let s = a.scale(c(0.0, 1.0));
    assert_complex_near(s[(0, 0)], c(-1.0, 2.0), TOL, "i * (2+i)");
}
