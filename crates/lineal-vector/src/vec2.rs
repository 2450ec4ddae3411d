use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use num_traits::Float;

use crate::cartesian::{all_zero, dot_product, norm, Cartesian};
use crate::error::VectorError;
use crate::vector::Vector;

/// A 2-dimensional vector with polar coordinate support.
///
/// The dimension is fixed by the type, so the binary arithmetic that is
/// fallible on [`Vector`] is infallible here and available through the
/// usual operators. Construction still validates that every coordinate is
/// a finite number.
///
/// # Example
///
/// ```
/// use lineal_vector::Vec2;
///
/// let v = Vec2::from_polar(2.0, 0.0)?;
/// assert_eq!(v.x(), 2.0);
/// assert_eq!(v.phase()?, 0.0);
/// # Ok::<(), lineal_vector::VectorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<T> {
    coords: [T; 2],
}

/// Type alias for a double precision 2D vector.
pub type Vec2F64 = Vec2<f64>;

/// Type alias for a single precision 2D vector.
pub type Vec2F32 = Vec2<f32>;

impl<T: Float> Vec2<T> {
    /// Creates a 2D vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteCoordinate`] if a coordinate is NaN
    /// or infinite.
    pub fn new(x: T, y: T) -> Result<Self, VectorError> {
        let coords = [x, y];
        if let Some(i) = coords.iter().position(|c| !c.is_finite()) {
            return Err(VectorError::NonFiniteCoordinate(i));
        }
        Ok(Self { coords })
    }

    /// Reads the complex number `re + i*im` as the vector `(re, im)`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteCoordinate`] if a part is NaN or
    /// infinite.
    pub fn from_complex(re: T, im: T) -> Result<Self, VectorError> {
        Self::new(re, im)
    }

    /// Builds a vector from polar coordinates: radius `rho` and angle
    /// `phi` against the positive x axis.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteArgument`] for NaN or infinite
    /// arguments and [`VectorError::NegativeRadius`] if `rho` is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use lineal_vector::Vec2;
    ///
    /// let v = Vec2::from_polar(1.0, 0.0)?;
    /// assert_relative_eq!(v.x(), 1.0);
    /// assert_relative_eq!(v.y(), 0.0);
    /// # Ok::<(), lineal_vector::VectorError>(())
    /// ```
    pub fn from_polar(rho: T, phi: T) -> Result<Self, VectorError> {
        if !rho.is_finite() {
            return Err(VectorError::NonFiniteArgument("the radius"));
        }
        if !phi.is_finite() {
            return Err(VectorError::NonFiniteArgument("the phase"));
        }
        if rho < T::zero() {
            return Err(VectorError::NegativeRadius("the radius"));
        }
        Ok(Self {
            coords: [rho * phi.cos(), rho * phi.sin()],
        })
    }

    /// X coordinate.
    pub fn x(&self) -> T {
        self.coords[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> T {
        self.coords[1]
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        norm(&self.coords)
    }

    /// `true` iff both coordinates are exactly zero.
    pub fn is_zero(&self) -> bool {
        all_zero(&self.coords)
    }

    /// Angle of `(x, y)` against the positive x axis, in `(-π, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    pub fn phase(&self) -> Result<T, VectorError> {
        if self.is_zero() {
            return Err(VectorError::UndefinedForZeroVector("the phase"));
        }
        Ok(self.y().atan2(self.x()))
    }

    /// The `(magnitude, phase)` pair of this vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    pub fn polar_coordinates(&self) -> Result<(T, T), VectorError> {
        Ok((self.magnitude(), self.phase()?))
    }

    /// Dot product of two 2D vectors.
    pub fn dot(&self, other: &Self) -> T {
        dot_product(&self.coords, &other.coords)
    }

    /// Scalar multiple.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            coords: [self.x() * factor, self.y() * factor],
        }
    }

    /// Divides both coordinates by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `divisor` is exactly
    /// zero.
    pub fn div(&self, divisor: T) -> Result<Self, VectorError> {
        if divisor == T::zero() {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self.scale(divisor.recip()))
    }

    /// Returns the normalized copy of this vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    pub fn normalized(&self) -> Result<Self, VectorError> {
        if self.is_zero() {
            return Err(VectorError::UndefinedForZeroVector("the normalization"));
        }
        let magnitude = self.magnitude();
        Ok(Self {
            coords: [self.x() / magnitude, self.y() / magnitude],
        })
    }

    /// Component of `other` parallel to `self`: the vector of magnitude
    /// `|other|·cos(angle)` pointing along `self`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] if `self` is the
    /// zero vector.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_vector::Vec2;
    ///
    /// let axis = Vec2::new(2.0, 0.0)?;
    /// let v = Vec2::new(3.0, 4.0)?;
    /// assert_eq!(axis.project_tangent(&v)?, Vec2::new(3.0, 0.0)?);
    /// # Ok::<(), lineal_vector::VectorError>(())
    /// ```
    pub fn project_tangent(&self, other: &Self) -> Result<Self, VectorError> {
        if self.is_zero() {
            return Err(VectorError::UndefinedForZeroVector("the tangent projection"));
        }
        let magnitude = self.magnitude();
        let factor = self.dot(other) / (magnitude * magnitude);
        Ok(self.scale(factor))
    }

    /// Component of `other` perpendicular to `self`:
    /// `other - project_tangent(other)`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] if `self` is the
    /// zero vector.
    pub fn project_normal(&self, other: &Self) -> Result<Self, VectorError> {
        let tangent = self.project_tangent(other)?;
        Ok(*other - tangent)
    }

    /// Magnitude of the cross product of the two vectors embedded in 3D
    /// with z = 0: `|a||b|sin(angle(a, b))`.
    pub fn cross_product_magnitude(a: &Self, b: &Self) -> T {
        (a.x() * b.y() - a.y() * b.x()).abs()
    }

    /// Directional angle from `a` to `b`: `phase(b) - phase(a)`.
    ///
    /// This is **not** symmetric — swapping the arguments flips the sign —
    /// and the difference is **not** normalized back into `(-π, π]`. The
    /// convention is kept as documented; callers wanting the absolute
    /// angle between two vectors should take the absolute value and wrap.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] if either vector is
    /// zero.
    pub fn angle_between(a: &Self, b: &Self) -> Result<T, VectorError> {
        Ok(b.phase()? - a.phase()?)
    }
}

impl<T: Float> Cartesian<T> for Vec2<T> {
    fn coords(&self) -> &[T] {
        &self.coords
    }
}

impl<T: Float> TryFrom<Vector<T>> for Vec2<T> {
    type Error = VectorError;

    fn try_from(v: Vector<T>) -> Result<Self, VectorError> {
        match v.coords() {
            &[x, y] => Ok(Self { coords: [x, y] }),
            _ => Err(VectorError::WrongDimension {
                expected: 2,
                actual: v.dim(),
            }),
        }
    }
}

impl<T: Float> From<Vec2<T>> for Vector<T> {
    fn from(v: Vec2<T>) -> Self {
        Vector::from_coords(v.coords.to_vec())
    }
}

impl<T: Float> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            coords: [self.x() + rhs.x(), self.y() + rhs.y()],
        }
    }
}

impl<T: Float> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: [self.x() - rhs.x(), self.y() - rhs.y()],
        }
    }
}

impl<T: Float> Neg for Vec2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coords: [-self.x(), -self.y()],
        }
    }
}

impl<T: Float> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Float> Index<usize> for Vec2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({:.3}, {:.3})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_new_rejects_non_finite() {
        assert_eq!(
            Vec2::new(f64::NAN, 0.0),
            Err(VectorError::NonFiniteCoordinate(0))
        );
    }

    #[test]
    fn test_phase_quadrants() -> Result<(), VectorError> {
        assert_relative_eq!(Vec2::new(1.0, 0.0)?.phase()?, 0.0);
        assert_relative_eq!(Vec2::new(0.0, 1.0)?.phase()?, FRAC_PI_2);
        assert_relative_eq!(Vec2::new(-1.0, 0.0)?.phase()?, PI);
        assert_relative_eq!(Vec2::new(0.0, -1.0)?.phase()?, -FRAC_PI_2);
        Ok(())
    }

    #[test]
    fn test_phase_zero_vector() -> Result<(), VectorError> {
        assert_eq!(
            Vec2::new(0.0, 0.0)?.phase(),
            Err(VectorError::UndefinedForZeroVector("the phase"))
        );
        Ok(())
    }

    #[test]
    fn test_from_polar_round_trip() -> Result<(), VectorError> {
        let v = Vec2::from_polar(2.5, 1.25)?;
        let (rho, phi) = v.polar_coordinates()?;
        assert_relative_eq!(rho, 2.5, epsilon = 1e-12);
        assert_relative_eq!(phi, 1.25, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_from_polar_magnitude() -> Result<(), VectorError> {
        assert_relative_eq!(Vec2::from_polar(3.0, 2.0)?.magnitude(), 3.0);
        Ok(())
    }

    #[test]
    fn test_from_polar_rejects_negative_radius() {
        assert_eq!(
            Vec2::from_polar(-1.0, 0.0),
            Err(VectorError::NegativeRadius("the radius"))
        );
    }

    #[test]
    fn test_projections_sum_to_identity() -> Result<(), VectorError> {
        let axis = Vec2::new(1.0, 2.0)?;
        let v = Vec2::new(-3.0, 0.5)?;
        let tangent = axis.project_tangent(&v)?;
        let normal = axis.project_normal(&v)?;
        let sum = tangent + normal;
        assert_relative_eq!(sum.x(), v.x(), epsilon = 1e-12);
        assert_relative_eq!(sum.y(), v.y(), epsilon = 1e-12);
        // the two components are orthogonal
        assert_relative_eq!(tangent.dot(&normal), 0.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_project_onto_zero_vector() -> Result<(), VectorError> {
        let zero = Vec2::new(0.0, 0.0)?;
        let v = Vec2::new(1.0, 1.0)?;
        assert_eq!(
            zero.project_tangent(&v),
            Err(VectorError::UndefinedForZeroVector("the tangent projection"))
        );
        Ok(())
    }

    #[test]
    fn test_cross_product_magnitude() -> Result<(), VectorError> {
        let x = Vec2::new(2.0, 0.0)?;
        let y = Vec2::new(0.0, 3.0)?;
        assert_eq!(Vec2::cross_product_magnitude(&x, &y), 6.0);
        assert_eq!(Vec2::cross_product_magnitude(&y, &x), 6.0);
        assert_eq!(Vec2::cross_product_magnitude(&x, &x), 0.0);
        Ok(())
    }

    #[test]
    fn test_angle_between_is_directional() -> Result<(), VectorError> {
        let a = Vec2::new(1.0, 0.0)?;
        let b = Vec2::new(0.0, 1.0)?;
        assert_relative_eq!(Vec2::angle_between(&a, &b)?, FRAC_PI_2);
        assert_relative_eq!(Vec2::angle_between(&b, &a)?, -FRAC_PI_2);
        Ok(())
    }

    #[test]
    fn test_try_from_vector() -> Result<(), VectorError> {
        let v2: Vec2<f64> = Vector::new([1.0, 2.0])?.try_into()?;
        assert_eq!(v2, Vec2::new(1.0, 2.0)?);

        let wrong: Result<Vec2<f64>, _> = Vector::new([1.0, 2.0, 3.0])?.try_into();
        assert_eq!(
            wrong,
            Err(VectorError::WrongDimension {
                expected: 2,
                actual: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_operators() -> Result<(), VectorError> {
        let a = Vec2::new(1.0, 2.0)?;
        let b = Vec2::new(3.0, 4.0)?;
        assert_eq!(a + b, Vec2::new(4.0, 6.0)?);
        assert_eq!(b - a, Vec2::new(2.0, 2.0)?);
        assert_eq!(-a, Vec2::new(-1.0, -2.0)?);
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0)?);
        assert_eq!(a[0], 1.0);
        assert_eq!(a[1], 2.0);
        Ok(())
    }
}
