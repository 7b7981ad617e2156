use crate::traits::FloatScalar;

use super::derivative::central_difference;
use super::{CalculusError, RootResult};

/// Settings for scalar root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Stop once successive iterates differ by at most this much. Newton
    /// also uses `sqrt(x_tol)` as its difference step.
    pub x_tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            x_tol: 1e-10,
            max_iter: 1000,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            x_tol: 1e-5,
            max_iter: 1000,
        }
    }
}

/// Newton's method with a numerical derivative.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` where `f'` is the central
/// difference with step `sqrt(x_tol)`. Finds the root nearest the starting
/// point, not all roots.
///
/// # Errors
///
/// - [`CalculusError::DivisionByZero`] if the derivative estimate is exactly zero.
/// - [`CalculusError::NotFinite`] if an iterate is NaN or infinite.
/// - [`CalculusError::MaxIterations`] if `max_iter` steps do not converge.
///
/// # Example
///
/// ```
/// use advmath::calculus::{newton, RootSettings};
///
/// let r = newton(|x: f64| x * x - 2.0, 1.0, &RootSettings::default()).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn newton<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, CalculusError> {
    let h = settings.x_tol.sqrt();
    let mut x = x0;
    let mut evals = 0usize;

    for iter in 0..settings.max_iter {
        let fx = f(x);
        let d = central_difference(&mut f, x, h);
        evals += 3;

        if d == T::zero() {
            log::debug!("newton: vanishing derivative at iteration {}", iter);
            return Err(CalculusError::DivisionByZero);
        }

        let next = x - fx / d;
        if !next.is_finite() {
            return Err(CalculusError::NotFinite);
        }

        if (next - x).abs() <= settings.x_tol {
            let fx = f(next);
            return Ok(RootResult {
                x: next,
                fx,
                iterations: iter + 1,
                evals: evals + 1,
            });
        }
        x = next;
    }

    log::debug!("newton: no convergence after {} iterations", settings.max_iter);
    Err(CalculusError::MaxIterations)
}

/// Steffensen's method.
///
/// Aitken's Δ² acceleration of the fixed-point map `g(x) = x + f(x)`:
///
/// ```text
/// p1 = p0 + f(p0)
/// p2 = p1 + f(p1)
/// p  = p2 - (p2 - p1)² / (p2 - 2 p1 + p0)
/// ```
///
/// Needs no derivative, but the starting point must lie close enough to a
/// root for `g` to contract. Returns `p0` directly if `f(p0) == 0`.
///
/// # Errors
///
/// - [`CalculusError::DivisionByZero`] if the Aitken denominator vanishes.
/// - [`CalculusError::NotFinite`] if an iterate is NaN or infinite.
/// - [`CalculusError::MaxIterations`] if `max_iter` steps do not converge.
///
/// # Example
///
/// ```
/// use advmath::calculus::{steffensen, RootSettings};
///
/// let r = steffensen(|x: f64| x.cos() - x, 0.5, &RootSettings::default()).unwrap();
/// assert!((r.x - 0.739_085_133_215_160_6).abs() < 1e-9);
/// ```
pub fn steffensen<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, CalculusError> {
    let two = T::one() + T::one();
    let mut p0 = x0;
    let mut evals = 0usize;

    for iter in 0..settings.max_iter {
        let f0 = f(p0);
        evals += 1;
        if f0 == T::zero() {
            return Ok(RootResult {
                x: p0,
                fx: f0,
                iterations: iter,
                evals,
            });
        }

        let p1 = p0 + f0;
        let p2 = p1 + f(p1);
        evals += 1;

        let denom = p2 - two * p1 + p0;
        if denom == T::zero() {
            log::debug!("steffensen: zero denominator at iteration {}", iter);
            return Err(CalculusError::DivisionByZero);
        }

        let p = p2 - (p2 - p1) * (p2 - p1) / denom;
        if !p.is_finite() {
            return Err(CalculusError::NotFinite);
        }

        if (p - p0).abs() < settings.x_tol {
            let fx = f(p);
            return Ok(RootResult {
                x: p,
                fx,
                iterations: iter + 1,
                evals: evals + 1,
            });
        }
        p0 = p;
    }

    log::debug!("steffensen: no convergence after {} iterations", settings.max_iter);
    Err(CalculusError::MaxIterations)
}
