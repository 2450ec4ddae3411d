use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use num_traits::Float;

use crate::cartesian::{all_zero, dot_product, norm, Cartesian};
use crate::error::VectorError;
use crate::vector::Vector;

/// A 3-dimensional vector with spherical and cylindrical coordinate
/// support.
///
/// Angles follow the physics convention: the polar angle is measured from
/// the positive z axis (in `[0, π]`), the azimuth from the positive x axis
/// inside the xy plane (in `(-π, π]`).
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use lineal_vector::Vec3;
///
/// let v = Vec3::new(0.0, 0.0, 2.0)?;
/// assert_relative_eq!(v.polar()?, 0.0);
/// # Ok::<(), lineal_vector::VectorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3<T> {
    coords: [T; 3],
}

/// Type alias for a double precision 3D vector.
pub type Vec3F64 = Vec3<f64>;

/// Type alias for a single precision 3D vector.
pub type Vec3F32 = Vec3<f32>;

impl<T: Float> Vec3<T> {
    /// Creates a 3D vector from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteCoordinate`] if a coordinate is NaN
    /// or infinite.
    pub fn new(x: T, y: T, z: T) -> Result<Self, VectorError> {
        let coords = [x, y, z];
        if let Some(i) = coords.iter().position(|c| !c.is_finite()) {
            return Err(VectorError::NonFiniteCoordinate(i));
        }
        Ok(Self { coords })
    }

    /// Builds a vector from spherical coordinates: radius `rho`, polar
    /// angle from the positive z axis and azimuth in the xy plane.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteArgument`] for NaN or infinite
    /// arguments and [`VectorError::NegativeRadius`] if `rho` is negative.
    pub fn from_spherical(rho: T, polar: T, azimuth: T) -> Result<Self, VectorError> {
        if !rho.is_finite() {
            return Err(VectorError::NonFiniteArgument("the radius"));
        }
        if !polar.is_finite() {
            return Err(VectorError::NonFiniteArgument("the polar angle"));
        }
        if !azimuth.is_finite() {
            return Err(VectorError::NonFiniteArgument("the azimuth"));
        }
        if rho < T::zero() {
            return Err(VectorError::NegativeRadius("the radius"));
        }
        Ok(Self {
            coords: [
                rho * polar.sin() * azimuth.cos(),
                rho * polar.sin() * azimuth.sin(),
                rho * polar.cos(),
            ],
        })
    }

    /// Builds a vector from cylindrical coordinates: distance from the z
    /// axis, azimuth in the xy plane and height `z`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteArgument`] for NaN or infinite
    /// arguments and [`VectorError::NegativeRadius`] if `radial_dist` is
    /// negative.
    pub fn from_cylindrical(radial_dist: T, azimuth: T, z: T) -> Result<Self, VectorError> {
        if !radial_dist.is_finite() {
            return Err(VectorError::NonFiniteArgument("the radial distance"));
        }
        if !azimuth.is_finite() {
            return Err(VectorError::NonFiniteArgument("the azimuth"));
        }
        if !z.is_finite() {
            return Err(VectorError::NonFiniteArgument("the z coordinate"));
        }
        if radial_dist < T::zero() {
            return Err(VectorError::NegativeRadius("the radial distance"));
        }
        Ok(Self {
            coords: [radial_dist * azimuth.cos(), radial_dist * azimuth.sin(), z],
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

    /// Z coordinate.
    pub fn z(&self) -> T {
        self.coords[2]
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        norm(&self.coords)
    }

    /// `true` iff every coordinate is exactly zero.
    pub fn is_zero(&self) -> bool {
        all_zero(&self.coords)
    }

    /// Polar angle: the angle between the vector and the positive z axis,
    /// in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    pub fn polar(&self) -> Result<T, VectorError> {
        if self.is_zero() {
            return Err(VectorError::UndefinedForZeroVector("the polar angle"));
        }
        Ok(self.radial_dist().atan2(self.z()))
    }

    /// Azimuth: the angle of the xy projection against the positive x
    /// axis, in `(-π, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedAzimuth`] when both x and y are
    /// zero (the vector lies on the z axis).
    pub fn azimuth(&self) -> Result<T, VectorError> {
        if self.x() == T::zero() && self.y() == T::zero() {
            return Err(VectorError::UndefinedAzimuth);
        }
        Ok(self.y().atan2(self.x()))
    }

    /// Distance from the z axis: the magnitude of the xy projection.
    pub fn radial_dist(&self) -> T {
        self.x().hypot(self.y())
    }

    /// The `(polar, azimuth)` angle pair.
    ///
    /// # Errors
    ///
    /// Propagates the degenerate cases of [`Vec3::polar`] and
    /// [`Vec3::azimuth`].
    pub fn phases(&self) -> Result<(T, T), VectorError> {
        Ok((self.polar()?, self.azimuth()?))
    }

    /// The `(magnitude, polar, azimuth)` spherical coordinate triple.
    ///
    /// # Errors
    ///
    /// Propagates the degenerate cases of [`Vec3::polar`] and
    /// [`Vec3::azimuth`].
    ///
    /// # Example
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use lineal_vector::Vec3;
    ///
    /// let v = Vec3::from_spherical(2.0, 1.0, -0.5)?;
    /// let (rho, polar, azimuth) = v.spherical_coordinates()?;
    /// assert_relative_eq!(rho, 2.0, epsilon = 1e-12);
    /// assert_relative_eq!(polar, 1.0, epsilon = 1e-12);
    /// assert_relative_eq!(azimuth, -0.5, epsilon = 1e-12);
    /// # Ok::<(), lineal_vector::VectorError>(())
    /// ```
    pub fn spherical_coordinates(&self) -> Result<(T, T, T), VectorError> {
        let (polar, azimuth) = self.phases()?;
        Ok((self.magnitude(), polar, azimuth))
    }

    /// The `(radial_dist, azimuth, z)` cylindrical coordinate triple.
    ///
    /// # Errors
    ///
    /// Propagates the degenerate case of [`Vec3::azimuth`].
    pub fn cylindrical_coordinates(&self) -> Result<(T, T, T), VectorError> {
        Ok((self.radial_dist(), self.azimuth()?, self.z()))
    }

    /// Dot product of two 3D vectors.
    pub fn dot(&self, other: &Self) -> T {
        dot_product(&self.coords, &other.coords)
    }

    /// Cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both operands; swapping them flips
    /// its direction. The magnitude reported by
    /// [`Vec2::cross_product_magnitude`](crate::Vec2::cross_product_magnitude)
    /// is the z coordinate of this product for vectors embedded with
    /// z = 0.
    pub fn cross(&self, other: &Self) -> Self {
        let [a1, a2, a3] = self.coords;
        let [b1, b2, b3] = other.coords;
        Self {
            coords: [
                a2 * b3 - a3 * b2,
                a3 * b1 - a1 * b3,
                a1 * b2 - a2 * b1,
            ],
        }
    }

    /// Scalar multiple.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            coords: [self.x() * factor, self.y() * factor, self.z() * factor],
        }
    }

    /// Divides every coordinate by a scalar.
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
            coords: [
                self.x() / magnitude,
                self.y() / magnitude,
                self.z() / magnitude,
            ],
        })
    }
}

impl<T: Float> Cartesian<T> for Vec3<T> {
    fn coords(&self) -> &[T] {
        &self.coords
    }
}

impl<T: Float> TryFrom<Vector<T>> for Vec3<T> {
    type Error = VectorError;

    fn try_from(v: Vector<T>) -> Result<Self, VectorError> {
        match v.coords() {
            &[x, y, z] => Ok(Self { coords: [x, y, z] }),
            _ => Err(VectorError::WrongDimension {
                expected: 3,
                actual: v.dim(),
            }),
        }
    }
}

impl<T: Float> From<Vec3<T>> for Vector<T> {
    fn from(v: Vec3<T>) -> Self {
        Vector::from_coords(v.coords.to_vec())
    }
}

impl<T: Float> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            coords: [
                self.x() + rhs.x(),
                self.y() + rhs.y(),
                self.z() + rhs.z(),
            ],
        }
    }
}

impl<T: Float> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: [
                self.x() - rhs.x(),
                self.y() - rhs.y(),
                self.z() - rhs.z(),
            ],
        }
    }
}

impl<T: Float> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coords: [-self.x(), -self.y(), -self.z()],
        }
    }
}

impl<T: Float> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Float> Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3({:.3}, {:.3}, {:.3})", self.x(), self.y(), self.z())
    }
}
