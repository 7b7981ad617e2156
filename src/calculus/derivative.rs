use crate::traits::FloatScalar;

use super::{CalculusError, DerivativeResult};

const MAX_TABLE: usize = 20;

/// Settings for [`ridders`].
#[derive(Debug, Clone, Copy)]
pub struct DerivativeSettings<T> {
    /// Initial step. Needs to be large enough for `f` to change noticeably.
    pub step: T,
    /// Factor by which the step shrinks between tableau columns (> 1).
    pub shrink: T,
    /// Tableau size, clamped to `2..=20`.
    pub table_size: usize,
    /// Stop once the error grows by this factor over the best seen so far.
    pub safety: T,
}

impl Default for DerivativeSettings<f64> {
    fn default() -> Self {
        Self {
            step: 0.1,
            shrink: 1.4,
            table_size: 10,
            safety: 2.0,
        }
    }
}

impl Default for DerivativeSettings<f32> {
    fn default() -> Self {
        Self {
            step: 0.1,
            shrink: 1.4,
            table_size: 10,
            safety: 2.0,
        }
    }
}

/// Symmetric difference quotient `(f(x + h) - f(x - h)) / 2h`.
///
/// ```
/// use advmath::calculus::central_difference;
///
/// let d = central_difference(|x: f64| x * x * x, 2.0, 1e-5);
/// assert!((d - 12.0).abs() < 1e-8);
/// ```
pub fn central_difference<T: FloatScalar>(mut f: impl FnMut(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x - h)) / (h + h)
}

/// Derivative by Ridders' extrapolation of central differences.
///
/// Builds a Neville tableau of central differences at steps
/// `step, step/shrink, step/shrink², ...` and extrapolates to zero step,
/// keeping the entry with the smallest error estimate. Stops early when
/// higher orders make the error grow by more than `safety`.
///
/// # Errors
///
/// [`CalculusError::InvalidStep`] if `step` is not positive and finite or
/// `shrink <= 1`.
///
/// # Example
///
/// ```
/// use advmath::calculus::{ridders, DerivativeSettings};
///
/// let d = ridders(|x: f64| x.sin(), 0.0, &DerivativeSettings::default()).unwrap();
/// assert!((d.value - 1.0).abs() < 1e-10);
/// assert!(d.error < 1e-10);
/// ```
pub fn ridders<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x: T,
    settings: &DerivativeSettings<T>,
) -> Result<DerivativeResult<T>, CalculusError> {
    let mut h = settings.step;
    if !(h > T::zero()) || !h.is_finite() || !(settings.shrink > T::one()) {
        return Err(CalculusError::InvalidStep);
    }

    let ntab = settings.table_size.clamp(2, MAX_TABLE);
    let con2 = settings.shrink * settings.shrink;

    let mut a = [[T::zero(); MAX_TABLE]; MAX_TABLE];
    a[0][0] = central_difference(&mut f, x, h);
    let mut evals = 2usize;
    let mut best = a[0][0];
    let mut err = T::infinity();

    for i in 1..ntab {
        h = h / settings.shrink;
        a[0][i] = central_difference(&mut f, x, h);
        evals += 2;

        let mut fac = con2;
        for j in 1..=i {
            a[j][i] = (a[j - 1][i] * fac - a[j - 1][i - 1]) / (fac - T::one());
            fac = con2 * fac;
            let errt = (a[j][i] - a[j - 1][i])
                .abs()
                .max((a[j][i] - a[j - 1][i - 1]).abs());
            if errt <= err {
                err = errt;
                best = a[j][i];
            }
        }

        if (a[i][i] - a[i - 1][i - 1]).abs() >= settings.safety * err {
            log::trace!("ridders: stopped at column {} of {}", i, ntab);
            break;
        }
    }

    Ok(DerivativeResult {
        value: best,
        error: err,
        evals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculus::cast;

    #[test]
    fn central_difference_quadratic_is_exact() {
        let d = central_difference(|x: f64| 3.0 * x * x + 2.0 * x, 1.5, 0.25);
        assert!((d - 11.0).abs() < 1e-12);
    }

    #[test]
    fn ridders_rejects_bad_step() {
        let mut s = DerivativeSettings::<f64>::default();
        s.step = 0.0;
        assert_eq!(ridders(|x| x, 1.0, &s).unwrap_err(), CalculusError::InvalidStep);
        s.step = f64::NAN;
        assert_eq!(ridders(|x| x, 1.0, &s).unwrap_err(), CalculusError::InvalidStep);
        s.step = 0.1;
        s.shrink = 1.0;
        assert_eq!(ridders(|x| x, 1.0, &s).unwrap_err(), CalculusError::InvalidStep);
    }

    #[test]
    fn ridders_exp() {
        let d = ridders(|x: f64| x.exp(), 1.0, &DerivativeSettings::default()).unwrap();
        assert!((d.value - core::f64::consts::E).abs() < 1e-10);
        assert!(d.evals >= 4);
    }

    #[test]
    fn ridders_table_size_clamped() {
        let s = DerivativeSettings {
            table_size: 100,
            ..DerivativeSettings::<f64>::default()
        };
        let d = ridders(|x: f64| x.exp(), 0.0, &s).unwrap();
        assert!(d.evals <= 2 * MAX_TABLE);
        assert!((d.value - 1.0).abs() < 1e-10);
    }

    #[test]
    fn cast_helper() {
        let three: f64 = cast(3);
        assert_eq!(three, 3.0);
    }
}
