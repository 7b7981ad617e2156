//! LU factorisation and triangular solves.
//!
//! The free functions work on anything implementing [`MatrixRef`] /
//! [`MatrixMut`]; [`LuDecomposition`] and [`PivotedLu`] wrap them for
//! [`Matrix`](crate::Matrix) and back the convenience methods
//! `lu()`, `determinant()`, `inverse()` and `solve()`.
//!
//! [`MatrixRef`]: crate::traits::MatrixRef
//! [`MatrixMut`]: crate::traits::MatrixMut

pub(crate) mod lu;
pub(crate) mod pivoted;
pub(crate) mod substitute;

pub use lu::{doolittle, LuDecomposition};
pub use pivoted::{lu_in_place, PivotedLu};
pub use substitute::{back_substitute, forward_substitute};
