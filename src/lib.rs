//! # advmath
//!
//! Dense matrix algebra and scalar calculus routines in pure Rust,
//! no-std compatible (heap allocation through `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use advmath::Matrix;
//!
//! let a = Matrix::<f64>::from_rows(3, 3, &[
//!     2.0, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let x = a.solve(&[8.0, -11.0, -3.0]).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//!
//! let lu = a.lu().unwrap();
//! assert!((a.determinant().unwrap() - lu.det()).abs() < 1e-12);
//!
//! let t = Matrix::<f64>::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).transpose();
//! assert_eq!(t.shape(), (3, 2));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions and
//!   row-major `Vec<T>` storage. Construction, bounds-checked access,
//!   copying blocks, arithmetic (`try_*` methods and operators), trace,
//!   determinant, inverse, solve, and transpose (cycle-following in place for
//!   rectangular shapes). Fallible operations return [`MatrixError`].
//!
//! - [`linalg`] — Doolittle LU without pivoting ([`LuDecomposition`]),
//!   an opt-in partially pivoted LU ([`PivotedLu`]), and forward/backward
//!   substitution. Free functions operate on `impl MatrixRef<T>` /
//!   `impl MatrixMut<T>`.
//!
//! - [`calculus`] — Root finding (Newton, Steffensen), numerical
//!   differentiation (central difference, Ridders) and quadrature
//!   (trapezoidal, Simpson, Romberg) on scalar closures. Requires the
//!   `calculus` feature.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`LinalgScalar`] — real floats and complex numbers, used by the decompositions
//!   - [`FloatScalar`] — real floats, used by the calculus routines
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Logging
//!
//! Singular systems, zero pivots and non-converging iterations are reported
//! through the [`log`](https://docs.rs/log) facade. Nothing is printed unless
//! the application installs a logger.
//!
//! ## Cargo features
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `std`      | yes     | `std::error::Error` impls, hardware FPU via system libm |
//! | `calculus` | yes     | Root finding, differentiation, quadrature |
//! | `complex`  | no      | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`      | no      | All features |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "calculus")]
pub mod calculus;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{LuDecomposition, PivotedLu};
pub use matrix::{Matrix, MatrixError, Matrixf32, Matrixf64};
#[cfg(feature = "complex")]
pub use matrix::{Matrixz32, Matrixz64};
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
