use num_traits::Float;

use crate::error::VectorError;

/// Capability interface shared by every cartesian vector value.
///
/// [`Vector`](crate::Vector), [`Vec2`](crate::Vec2) and
/// [`Vec3`](crate::Vec3) all expose their coordinates through this trait,
/// and the cross-instance queries in this module ([`distance`],
/// [`are_orthogonal`], [`have_same_dimension`]) are generic over it, so
/// they accept any combination of implementors.
pub trait Cartesian<T: Float> {
    /// Borrowed view of the coordinates in component order.
    fn coords(&self) -> &[T];

    /// Number of dimensions.
    fn dim(&self) -> usize {
        self.coords().len()
    }

    /// Euclidean norm.
    ///
    /// Accumulated pairwise with `hypot` so that large coordinates do not
    /// overflow an intermediate sum of squares.
    fn magnitude(&self) -> T {
        norm(self.coords())
    }

    /// `true` iff every coordinate is exactly zero.
    fn is_zero(&self) -> bool {
        all_zero(self.coords())
    }
}

/// Euclidean distance between the points addressed by two vectors.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
///
/// # Example
///
/// ```
/// use lineal_vector::{distance, Vector};
///
/// let a = Vector::new([1.0, 1.0])?;
/// let b = Vector::new([4.0, 5.0])?;
/// assert_eq!(distance(&a, &b)?, 5.0);
/// # Ok::<(), lineal_vector::VectorError>(())
/// ```
pub fn distance<T: Float>(
    a: &impl Cartesian<T>,
    b: &impl Cartesian<T>,
) -> Result<T, VectorError> {
    check_same_dim(a, b)?;
    let span = a
        .coords()
        .iter()
        .zip(b.coords())
        .fold(T::zero(), |acc, (&x, &y)| acc.hypot(y - x));
    Ok(span)
}

/// `true` iff the dot product of the two vectors is exactly zero.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
pub fn are_orthogonal<T: Float>(
    a: &impl Cartesian<T>,
    b: &impl Cartesian<T>,
) -> Result<bool, VectorError> {
    check_same_dim(a, b)?;
    Ok(dot_product(a.coords(), b.coords()) == T::zero())
}

/// `true` iff the two vectors have the same number of dimensions.
pub fn have_same_dimension<T: Float>(a: &impl Cartesian<T>, b: &impl Cartesian<T>) -> bool {
    a.dim() == b.dim()
}

fn check_same_dim<T: Float>(
    a: &impl Cartesian<T>,
    b: &impl Cartesian<T>,
) -> Result<(), VectorError> {
    if a.dim() != b.dim() {
        return Err(VectorError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(())
}

pub(crate) fn norm<T: Float>(coords: &[T]) -> T {
    coords.iter().fold(T::zero(), |acc, &c| acc.hypot(c))
}

pub(crate) fn all_zero<T: Float>(coords: &[T]) -> bool {
    coords.iter().all(|c| *c == T::zero())
}

pub(crate) fn dot_product<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}
