use std::fmt;
use std::ops::{Index, Mul, Neg};

use num_traits::Float;

use crate::cartesian::{all_zero, dot_product, norm, Cartesian};
use crate::error::VectorError;

/// An n-dimensional vector with runtime-checked dimension.
///
/// The dimension is fixed at construction and every coordinate is
/// validated to be a finite number; arithmetic between two vectors
/// requires equal dimensions and reports
/// [`VectorError::DimensionMismatch`] otherwise.
///
/// Binary operations return new values; the only in-place mutations are
/// [`Vector::normalize`] and [`Vector::translate`], which are documented
/// as such and have value-returning counterparts.
///
/// # Example
///
/// ```
/// use lineal_vector::Vector;
///
/// let v = Vector::new([3.0, 4.0])?;
/// assert_eq!(v.dim(), 2);
/// assert_eq!(v.magnitude(), 5.0);
/// # Ok::<(), lineal_vector::VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    coords: Vec<T>,
}

/// Type alias for a double precision vector.
pub type VectorF64 = Vector<f64>;

/// Type alias for a single precision vector.
pub type VectorF32 = Vector<f32>;

impl<T: Float> Vector<T> {
    /// Creates a vector from its coordinates.
    ///
    /// # Arguments
    ///
    /// * `coords` - The coordinates in component order; anything that
    ///   converts into a `Vec<T>` (arrays, vectors, slices).
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyCoordinates`] for an empty sequence and
    /// [`VectorError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_vector::{Vector, VectorError};
    ///
    /// let v = Vector::new([1.0, 2.0, 3.0])?;
    /// assert_eq!(v.coords(), &[1.0, 2.0, 3.0]);
    ///
    /// let empty: Vec<f64> = vec![];
    /// assert_eq!(Vector::new(empty), Err(VectorError::EmptyCoordinates));
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn new(coords: impl Into<Vec<T>>) -> Result<Self, VectorError> {
        let coords = coords.into();
        if coords.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        if let Some(i) = coords.iter().position(|c| !c.is_finite()) {
            return Err(VectorError::NonFiniteCoordinate(i));
        }
        Ok(Self { coords })
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyCoordinates`] if `dim` is zero.
    pub fn zeros(dim: usize) -> Result<Self, VectorError> {
        if dim == 0 {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self {
            coords: vec![T::zero(); dim],
        })
    }

    /// Creates the canonical basis of the given dimension: the unit
    /// vectors pointing along each axis, in axis order.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyCoordinates`] if `dim` is zero.
    pub fn units(dim: usize) -> Result<Vec<Self>, VectorError> {
        if dim == 0 {
            return Err(VectorError::EmptyCoordinates);
        }
        let units = (0..dim)
            .map(|axis| {
                let mut coords = vec![T::zero(); dim];
                coords[axis] = T::one();
                Self { coords }
            })
            .collect();
        Ok(units)
    }

    /// Builds a vector from coordinates already known to be valid.
    pub(crate) fn from_coords(coords: Vec<T>) -> Self {
        debug_assert!(!coords.is_empty());
        Self { coords }
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Borrowed view of the coordinates in component order.
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Independent copy of the coordinates.
    ///
    /// Mutating the returned vector never affects this value.
    pub fn to_vec(&self) -> Vec<T> {
        self.coords.clone()
    }

    /// Euclidean norm, accumulated with `hypot` for numeric stability.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_vector::Vector;
    ///
    /// assert_eq!(Vector::new([3.0, 4.0])?.magnitude(), 5.0);
    /// # Ok::<(), lineal_vector::VectorError>(())
    /// ```
    pub fn magnitude(&self) -> T {
        norm(&self.coords)
    }

    /// `true` iff every coordinate is exactly zero.
    pub fn is_zero(&self) -> bool {
        all_zero(&self.coords)
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_same_dim(other)?;
        let coords = self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self::from_coords(coords))
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn sub(&self, other: &Self) -> Result<Self, VectorError> {
        self.check_same_dim(other)?;
        let coords = self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self::from_coords(coords))
    }

    /// Scalar multiple of this vector.
    ///
    /// Together with [`Vector::dot`] this splits the scalar/vector
    /// multiplication cases into two named operations; the `*` operator is
    /// provided for the scalar case only.
    pub fn scale(&self, factor: T) -> Self {
        Self::from_coords(self.coords.iter().map(|&c| c * factor).collect())
    }

    /// Inner product of two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_vector::Vector;
    ///
    /// let a = Vector::new([1.0, 3.0, -5.0])?;
    /// let b = Vector::new([4.0, -2.0, -1.0])?;
    /// assert_eq!(a.dot(&b)?, 3.0);
    /// # Ok::<(), lineal_vector::VectorError>(())
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T, VectorError> {
        self.check_same_dim(other)?;
        Ok(dot_product(&self.coords, &other.coords))
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

    /// Magnitude exponentiation: `|v|^n`.
    ///
    /// For `n = 0` the result is `1`, except for the zero vector, whose
    /// zeroth power is undefined. Note that `pow(2)` equals the dot
    /// product of the vector with itself.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for `n = 0` on a
    /// zero vector.
    pub fn pow(&self, exp: u32) -> Result<T, VectorError> {
        if exp == 0 {
            if self.is_zero() {
                return Err(VectorError::UndefinedForZeroVector("the zeroth power"));
            }
            return Ok(T::one());
        }
        Ok(self.magnitude().powi(exp as i32))
    }

    /// Normalizes the vector in place: same direction, magnitude one.
    ///
    /// See [`Vector::normalized`] for the value-returning counterpart.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    pub fn normalize(&mut self) -> Result<(), VectorError> {
        if self.is_zero() {
            return Err(VectorError::UndefinedForZeroVector("the normalization"));
        }
        let magnitude = self.magnitude();
        for c in &mut self.coords {
            *c = *c / magnitude;
        }
        Ok(())
    }

    /// Returns the normalized copy of this vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_vector::Vector;
    ///
    /// let v = Vector::new([0.0, 0.0, 4.0])?;
    /// assert_eq!(v.normalized()?.coords(), &[0.0, 0.0, 1.0]);
    /// # Ok::<(), lineal_vector::VectorError>(())
    /// ```
    pub fn normalized(&self) -> Result<Self, VectorError> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }

    /// Creates a parallel vector with the given magnitude.
    ///
    /// A negative magnitude flips the direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteArgument`] if `magnitude` is NaN or
    /// infinite, and [`VectorError::UndefinedForZeroVector`] for the zero
    /// vector.
    pub fn with_magnitude(&self, magnitude: T) -> Result<Self, VectorError> {
        if !magnitude.is_finite() {
            return Err(VectorError::NonFiniteArgument("the magnitude"));
        }
        Ok(self.normalized()?.scale(magnitude))
    }

    /// Translates the vector in place so that `origin` becomes the new
    /// origin, shifting every coordinate by the negated origin.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn translate(&mut self, origin: &Self) -> Result<(), VectorError> {
        self.check_same_dim(origin)?;
        for (c, &o) in self.coords.iter_mut().zip(&origin.coords) {
            *c = *c - o;
        }
        Ok(())
    }

    /// Converts the element type to another float precision.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NonFiniteCoordinate`] if a coordinate does
    /// not fit the target precision (for example `f64::MAX` to `f32`).
    pub fn cast<U: Float>(&self) -> Result<Vector<U>, VectorError> {
        let mut coords = Vec::with_capacity(self.coords.len());
        for (i, &c) in self.coords.iter().enumerate() {
            let converted = U::from(c)
                .filter(|v| v.is_finite())
                .ok_or(VectorError::NonFiniteCoordinate(i))?;
            coords.push(converted);
        }
        Ok(Vector { coords })
    }

    fn check_same_dim(&self, other: &Self) -> Result<(), VectorError> {
        if self.dim() != other.dim() {
            return Err(VectorError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(())
    }
}

impl<T: Float> Cartesian<T> for Vector<T> {
    fn coords(&self) -> &[T] {
        &self.coords
    }
}

impl<T: Float> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.coords[index]
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(mut self) -> Vector<T> {
        for c in &mut self.coords {
            *c = -*c;
        }
        self
    }
}

impl<T: Float> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        -self.clone()
    }
}

impl<T: Float> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

impl<T: Float> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}(", self.dim())?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.3}", c)?;
        }
        write!(f, ")")
    }
}
