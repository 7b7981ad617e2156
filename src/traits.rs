use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Element type of a [`Matrix`](crate::Matrix).
///
/// Any `Copy` numeric type with `0`, `1` and the four field operations
/// qualifies: integers for structural work and arithmetic, floats and
/// complex numbers for the decompositions as well.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Real IEEE floats (`f32`, `f64`).
///
/// The calculus routines need ordering and `sqrt`/`is_finite`, so they are
/// bounded on this rather than on [`LinalgScalar`].
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Elements the LU routines accept.
///
/// Doolittle only uses field arithmetic; the pivoted variant additionally
/// compares candidate pivots by [`modulus`](LinalgScalar::modulus) against
/// [`lepsilon`](LinalgScalar::lepsilon).
pub trait LinalgScalar: Scalar {
    /// Underlying real type: `Self` for floats, `T` for `Complex<T>`.
    type Real: FloatScalar;

    /// `|x|`, the Euclidean norm for complex values.
    fn modulus(self) -> Self::Real;

    /// Machine epsilon of [`Self::Real`](LinalgScalar::Real).
    fn lepsilon() -> Self::Real;

    /// Embed a real value.
    fn from_real(r: Self::Real) -> Self;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn lepsilon() -> $t { <$t as Float>::epsilon() }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn lepsilon() -> T {
        T::epsilon()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}

/// Shape and element reads for the free functions in [`crate::linalg`].
///
/// Implementations may panic on an out-of-range `(row, col)`.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Element writes, for routines that fill or factor in place.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
