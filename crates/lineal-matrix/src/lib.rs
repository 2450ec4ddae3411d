#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `lineal-matrix` provides the matrix half of the lineal workspace:
//!
//! - **[`Matrix`]**: an n×m matrix with row-major flat storage, validated
//!   construction and shape-checked algebraic operators.
//! - **[`SquareMatrix`]**: the n×n refinement and operand type of the
//!   Gaussian elimination engine — row reduction ([`SquareMatrix::gauss`]
//!   and the forward/backward passes), [`SquareMatrix::determinant`],
//!   [`SquareMatrix::invert`] and [`SquareMatrix::solve`].
//!
//! Pivot checks inside the engine compare against the named
//! [`DEFAULT_PIVOT_TOLERANCE`] constant; every elimination-based
//! operation has a `*_with_tolerance` variant to override it per call.
//!
//! # Quick Start
//!
//! ```
//! use lineal_matrix::{Matrix, SquareMatrix};
//!
//! let a = SquareMatrix::from_rows(&[[2.0f64, 1.0], [1.0, 3.0]])?;
//! assert!((a.determinant() - 5.0).abs() < 1e-12);
//!
//! let inverse = a.invert()?;
//! let product = a.matmul(&inverse)?;
//! assert!((product.trace() - 2.0).abs() < 1e-12);
//! # Ok::<(), lineal_matrix::MatrixError>(())
//! ```

/// Error types for matrix construction and algebra.
pub mod error;

/// Row-reduction kernels, the elimination report and the pivot tolerance.
pub mod gauss;

/// The rectangular matrix implementation.
pub mod matrix;

/// The square matrix refinement and its elimination-based operations.
pub mod square;

#[cfg(feature = "serde")]
mod serde;

pub use crate::error::MatrixError;
pub use crate::gauss::{Elimination, DEFAULT_PIVOT_TOLERANCE};
pub use crate::matrix::{have_same_size, Matrix, MatrixF32, MatrixF64};
pub use crate::square::{SquareMatrix, SquareMatrixF32, SquareMatrixF64};
