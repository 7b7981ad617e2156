use crate::traits::FloatScalar;

use super::{cast, CalculusError, QuadResult};

/// Upper bound on Romberg levels; level `k` evaluates `2^(k-1)` new points.
const MAX_LEVELS: usize = 25;

/// Settings for [`romberg`].
#[derive(Debug, Clone, Copy)]
pub struct RombergSettings<T> {
    /// Stop once consecutive diagonal entries differ by at most this much.
    pub tol: T,
    /// Maximum number of trapezoid halvings, clamped to `1..=25`.
    pub max_levels: usize,
}

impl Default for RombergSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_levels: 20,
        }
    }
}

impl Default for RombergSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_levels: 20,
        }
    }
}

/// Composite trapezoidal rule on `n` equal sub-intervals of `[a, b]`.
///
/// # Errors
///
/// [`CalculusError::InvalidIntervals`] if `n == 0`.
///
/// ```
/// use advmath::calculus::trapezoidal;
///
/// let v = trapezoidal(|x: f64| x, 0.0, 2.0, 4).unwrap();
/// assert!((v - 2.0).abs() < 1e-14);
/// ```
pub fn trapezoidal<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    n: usize,
) -> Result<T, CalculusError> {
    if n == 0 {
        return Err(CalculusError::InvalidIntervals(n));
    }
    let half = T::one() / (T::one() + T::one());
    let h = (b - a) / cast(n);
    let mut sum = half * (f(a) + f(b));
    for i in 1..n {
        sum = sum + f(a + cast::<T>(i) * h);
    }
    Ok(sum * h)
}

/// Composite Simpson's rule on `n` equal sub-intervals of `[a, b]`.
///
/// Exact for cubics.
///
/// # Errors
///
/// [`CalculusError::InvalidIntervals`] if `n` is zero or odd.
///
/// ```
/// use advmath::calculus::simpson;
///
/// let v = simpson(|x: f64| x * x * x, 0.0, 2.0, 2).unwrap();
/// assert!((v - 4.0).abs() < 1e-14);
/// assert!(simpson(|x: f64| x, 0.0, 1.0, 3).is_err());
/// ```
pub fn simpson<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    n: usize,
) -> Result<T, CalculusError> {
    if n == 0 || n % 2 != 0 {
        return Err(CalculusError::InvalidIntervals(n));
    }
    let two = T::one() + T::one();
    let four = two + two;
    let h = (b - a) / cast(n);

    let mut sum = f(a) + f(b);
    for i in (1..n).step_by(2) {
        sum = sum + four * f(a + cast::<T>(i) * h);
    }
    for i in (2..n).step_by(2) {
        sum = sum + two * f(a + cast::<T>(i) * h);
    }
    Ok(sum * h / (two + T::one()))
}

/// Romberg integration.
///
/// Halves the trapezoid step at each level, reusing previous evaluations,
/// and applies Richardson extrapolation across the whole tableau. Stops when
/// two consecutive diagonal entries differ by at most `tol`.
///
/// Hitting `max_levels` is not an error: the last diagonal entry is returned
/// with `converged == false`.
///
/// ```
/// use advmath::calculus::{romberg, RombergSettings};
///
/// let r = romberg(|x: f64| x.exp(), 0.0, 1.0, &RombergSettings::default()).unwrap();
/// assert!(r.converged);
/// assert!((r.value - (core::f64::consts::E - 1.0)).abs() < 1e-10);
/// ```
pub fn romberg<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RombergSettings<T>,
) -> Result<QuadResult<T>, CalculusError> {
    let levels = settings.max_levels.clamp(1, MAX_LEVELS);
    let half = T::one() / (T::one() + T::one());
    let four = cast::<T>(4);

    let mut prev = [T::zero(); MAX_LEVELS];
    let mut cur = [T::zero(); MAX_LEVELS];

    let mut h = b - a;
    prev[0] = half * h * (f(a) + f(b));
    let mut evals = 2usize;
    let mut error = T::infinity();

    for k in 1..levels {
        h = h * half;
        let new_points = 1usize << (k - 1);
        let mut sum = T::zero();
        for i in 1..=new_points {
            sum = sum + f(a + cast::<T>(2 * i - 1) * h);
        }
        evals += new_points;
        cur[0] = half * prev[0] + h * sum;

        let mut pow4 = four;
        for j in 1..=k {
            cur[j] = cur[j - 1] + (cur[j - 1] - prev[j - 1]) / (pow4 - T::one());
            pow4 = pow4 * four;
        }

        error = (cur[k] - prev[k - 1]).abs();
        if !cur[k].is_finite() {
            return Err(CalculusError::NotFinite);
        }
        if error <= settings.tol {
            return Ok(QuadResult {
                value: cur[k],
                error,
                evals,
                converged: true,
            });
        }
        core::mem::swap(&mut prev, &mut cur);
    }

    log::debug!(
        "romberg: tolerance not met after {} levels (last difference {:?})",
        levels,
        error
    );
    Ok(QuadResult {
        value: prev[levels - 1],
        error,
        evals,
        converged: false,
    })
}
