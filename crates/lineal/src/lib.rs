#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! This is the top-level crate of the lineal workspace. It re-exports the
//! member crates under short module names and the main types at the crate
//! root.
//!
//! ```
//! use lineal::{SquareMatrix, Vector};
//!
//! let a = SquareMatrix::from_rows(&[[1.0f64, 1.0], [1.0, -1.0]])?;
//! let b = Vector::new([3.0, 1.0])?;
//! let x = a.solve(&b)?;
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! # Ok::<(), lineal::MatrixError>(())
//! ```

#[doc(inline)]
pub use lineal_vector as vector;

#[doc(inline)]
pub use lineal_matrix as matrix;

pub use lineal_matrix::{
    have_same_size, Elimination, Matrix, MatrixError, SquareMatrix, DEFAULT_PIVOT_TOLERANCE,
};
pub use lineal_vector::{
    are_orthogonal, distance, have_same_dimension, Cartesian, Vec2, Vec3, Vector, VectorError,
};
