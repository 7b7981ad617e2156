//! Scalar calculus: root finding, numerical differentiation, quadrature.
//!
//! Every routine works on a plain closure `FnMut(T) -> T` over a real float
//! type ([`FloatScalar`]). Nothing here allocates.
//!
//! # Root finding
//!
//! - [`newton`] — Newton's method with a central-difference derivative
//! - [`steffensen`] — Steffensen's method (Aitken acceleration, derivative-free)
//!
//! # Differentiation
//!
//! - [`central_difference`] — single symmetric difference quotient
//! - [`ridders`] — Ridders' polynomial extrapolation with an error estimate
//!
//! # Quadrature
//!
//! - [`trapezoidal`] — composite trapezoidal rule
//! - [`simpson`] — composite Simpson's rule
//! - [`romberg`] — Romberg integration (Richardson-extrapolated trapezoid)

mod derivative;
mod quadrature;
mod root;


pub use derivative::{central_difference, ridders, DerivativeSettings};
pub use quadrature::{romberg, simpson, trapezoidal, RombergSettings};
pub use root::{newton, steffensen, RootSettings};

use crate::traits::FloatScalar;

/// Errors from the calculus routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculusError {
    /// A derivative or an extrapolation denominator vanished.
    DivisionByZero,
    /// Maximum number of iterations exceeded.
    MaxIterations,
    /// A computed value was NaN or infinity.
    NotFinite,
    /// Interval count is zero, or odd where an even count is required.
    InvalidIntervals(usize),
    /// Differentiation step or shrink factor is not usable.
    InvalidStep,
}

impl core::fmt::Display for CalculusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalculusError::DivisionByZero => write!(f, "division by zero"),
            CalculusError::MaxIterations => write!(f, "maximum iterations exceeded"),
            CalculusError::NotFinite => write!(f, "computed value is NaN or infinity"),
            CalculusError::InvalidIntervals(n) => write!(f, "invalid number of intervals: {}", n),
            CalculusError::InvalidStep => write!(f, "step size must be positive and finite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalculusError {}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}

/// Result of a numerical derivative.
#[derive(Debug, Clone, Copy)]
pub struct DerivativeResult<T> {
    /// Derivative estimate.
    pub value: T,
    /// Estimated absolute error of `value`.
    pub error: T,
    /// Number of function evaluations.
    pub evals: usize,
}

/// Result of an adaptive quadrature.
#[derive(Debug, Clone, Copy)]
pub struct QuadResult<T> {
    /// Integral estimate.
    pub value: T,
    /// Difference between the last two extrapolated estimates.
    pub error: T,
    /// Number of function evaluations.
    pub evals: usize,
    /// Whether the tolerance was met before the level limit.
    pub converged: bool,
}

#[inline]
pub(crate) fn cast<T: FloatScalar>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}
