#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `lineal-vector` provides validated vector values for geometric and
//! algebraic code:
//!
//! - **[`Vector`]**: an n-dimensional vector whose dimension is fixed at
//!   construction; binary operations are dimension-checked at runtime.
//! - **[`Vec2`] / [`Vec3`]**: fixed-dimension specializations adding
//!   polar, spherical and cylindrical coordinate conversions and
//!   projection operations, with infallible operator arithmetic.
//! - **[`Cartesian`]**: the capability trait shared by all three, which
//!   the cross-instance queries ([`distance`], [`are_orthogonal`],
//!   [`have_same_dimension`]) are generic over.
//!
//! Construction rejects empty coordinate sequences and non-finite values;
//! every fallible operation returns a [`VectorError`] instead of
//! panicking.
//!
//! # Quick Start
//!
//! ```
//! use lineal_vector::{distance, Vec2, Vector};
//!
//! let v = Vector::new([3.0, 4.0])?;
//! assert_eq!(v.magnitude(), 5.0);
//!
//! let p = Vec2::from_polar(2.0, std::f64::consts::FRAC_PI_2)?;
//! assert!(p.y() > 1.999);
//!
//! let origin = Vector::new([0.0, 0.0])?;
//! assert_eq!(distance(&origin, &v)?, 5.0);
//! # Ok::<(), lineal_vector::VectorError>(())
//! ```

/// Capability trait shared by all vector types, plus the cross-instance
/// queries generic over it.
pub mod cartesian;

/// Error types for vector construction and arithmetic.
pub mod error;

/// The 2-dimensional specialization with polar coordinate support.
pub mod vec2;

/// The 3-dimensional specialization with spherical and cylindrical
/// coordinate support.
pub mod vec3;

/// The n-dimensional vector implementation.
pub mod vector;

#[cfg(feature = "serde")]
mod serde;

pub use crate::cartesian::{are_orthogonal, distance, have_same_dimension, Cartesian};
pub use crate::error::VectorError;
pub use crate::vec2::{Vec2, Vec2F32, Vec2F64};
pub use crate::vec3::{Vec3, Vec3F32, Vec3F64};
pub use crate::vector::{Vector, VectorF32, VectorF64};
