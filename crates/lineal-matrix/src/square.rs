use std::fmt;
use std::ops::Deref;

use lineal_vector::Vector;
use num_traits::Float;

use crate::error::MatrixError;
use crate::gauss::{self, default_tolerance, Elimination};
use crate::matrix::Matrix;

/// An n×n matrix, the operand type of the elimination-based operations.
///
/// `SquareMatrix` composes a [`Matrix`] and guarantees `rows == cols` from
/// construction on; no operation violates the constraint afterward. It
/// dereferences to [`Matrix`] for read access, while its own arithmetic
/// is closed over square results.
///
/// Pivot and zero checks inside the elimination-based operations compare
/// against [`DEFAULT_PIVOT_TOLERANCE`](crate::DEFAULT_PIVOT_TOLERANCE);
/// each has a `*_with_tolerance` variant to override it per call.
///
/// # Example
///
/// ```
/// use lineal_matrix::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(&[[4.0f64, 7.0], [2.0, 6.0]])?;
/// assert_eq!(m.trace(), 10.0);
/// assert!((m.determinant() - 10.0).abs() < 1e-12);
/// # Ok::<(), lineal_matrix::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    inner: Matrix<T>,
}

/// Type alias for a double precision square matrix.
pub type SquareMatrixF64 = SquareMatrix<f64>;

/// Type alias for a single precision square matrix.
pub type SquareMatrixF32 = SquareMatrix<f32>;

impl<T: Float> SquareMatrix<T> {
    /// Creates a square matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Matrix::from_rows`], plus
    /// [`MatrixError::NotSquareShape`] if the shape is rectangular.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        Matrix::from_rows(rows)?.try_into()
    }

    /// Creates a square matrix of the given order from flat row-major
    /// data.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Matrix::from_shape_vec`].
    pub fn from_shape_vec(order: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Ok(Self {
            inner: Matrix::from_shape_vec(order, order, data)?,
        })
    }

    /// Creates the n×n identity matrix: ones on the diagonal, zeros
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyRows`] if `order` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_matrix::SquareMatrix;
    ///
    /// let identity = SquareMatrix::<f64>::identity(3)?;
    /// assert_eq!(identity.determinant(), 1.0);
    /// # Ok::<(), lineal_matrix::MatrixError>(())
    /// ```
    pub fn identity(order: usize) -> Result<Self, MatrixError> {
        let inner = Matrix::from_shape_fn(order, order, |r, c| {
            if r == c {
                T::one()
            } else {
                T::zero()
            }
        })?;
        Ok(Self { inner })
    }

    /// Wraps a matrix already known to be square.
    pub(crate) fn from_inner(inner: Matrix<T>) -> Self {
        debug_assert!(inner.is_square());
        Self { inner }
    }

    /// The order n of this n×n matrix.
    pub fn order(&self) -> usize {
        self.inner.rows()
    }

    /// Borrows the underlying rectangular matrix.
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.inner
    }

    /// Unwraps into the underlying rectangular matrix.
    pub fn into_matrix(self) -> Matrix<T> {
        self.inner
    }

    /// Sum of the diagonal entries; defined for every square matrix.
    pub fn trace(&self) -> T {
        (0..self.order()).fold(T::zero(), |acc, i| acc + self.inner.at(i, i))
    }

    /// Element-wise sum of two square matrices.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the orders differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        Ok(Self {
            inner: self.inner.add(&other.inner)?,
        })
    }

    /// Element-wise difference of two square matrices.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the orders differ.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        Ok(Self {
            inner: self.inner.sub(&other.inner)?,
        })
    }

    /// Scalar multiple.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            inner: self.inner.scale(factor),
        }
    }

    /// Matrix product of two square matrices of equal order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InnerDimensionMismatch`] if the orders
    /// differ.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        Ok(Self {
            inner: self.inner.matmul(&other.inner)?,
        })
    }

    /// Transposes in place; a square matrix keeps its shape.
    pub fn transpose(&mut self) {
        self.inner.transpose();
    }

    /// Returns the transposed copy.
    pub fn transposed(&self) -> Self {
        Self {
            inner: self.inner.transposed(),
        }
    }

    /// Reduces the matrix in place to row-echelon form with partial
    /// pivoting and reports the swap count and rank.
    ///
    /// A pivot candidate below the default tolerance marks the column as
    /// rank-deficient and skips it instead of failing, so the report can
    /// still carry the rank.
    pub fn gauss_forward(&mut self) -> Elimination {
        self.gauss_forward_with_tolerance(default_tolerance())
    }

    /// [`SquareMatrix::gauss_forward`] with an explicit pivot tolerance.
    pub fn gauss_forward_with_tolerance(&mut self, tolerance: T) -> Elimination {
        let order = self.order();
        gauss::forward(&mut self.inner, order, tolerance)
    }

    /// Back-substitutes in place from row-echelon to reduced row-echelon
    /// form: every pivot becomes one with zeros above it.
    pub fn gauss_backward(&mut self) {
        self.gauss_backward_with_tolerance(default_tolerance())
    }

    /// [`SquareMatrix::gauss_backward`] with an explicit pivot tolerance.
    pub fn gauss_backward_with_tolerance(&mut self, tolerance: T) {
        let order = self.order();
        gauss::backward(&mut self.inner, order, tolerance);
    }

    /// Runs the forward pass followed by the backward pass, leaving the
    /// matrix in reduced row-echelon form, and reports the forward
    /// outcome.
    pub fn gauss(&mut self) -> Elimination {
        self.gauss_with_tolerance(default_tolerance())
    }

    /// [`SquareMatrix::gauss`] with an explicit pivot tolerance.
    pub fn gauss_with_tolerance(&mut self, tolerance: T) -> Elimination {
        let outcome = self.gauss_forward_with_tolerance(tolerance);
        self.gauss_backward_with_tolerance(tolerance);
        outcome
    }

    /// Determinant: the product of the pivots after forward elimination,
    /// sign-flipped once per row swap. A matrix with rank below its order
    /// has determinant exactly zero.
    pub fn determinant(&self) -> T {
        self.determinant_with_tolerance(default_tolerance())
    }

    /// [`SquareMatrix::determinant`] with an explicit pivot tolerance.
    pub fn determinant_with_tolerance(&self, tolerance: T) -> T {
        gauss::determinant(&self.inner, tolerance)
    }

    /// Inverse of the matrix, computed as the right half of the reduced
    /// row-echelon form of `[A | I]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if elimination produces a zero
    /// pivot.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_matrix::{MatrixError, SquareMatrix};
    ///
    /// let m = SquareMatrix::from_rows(&[[4.0f64, 7.0], [2.0, 6.0]])?;
    /// let inverse = m.invert()?;
    /// let product = m.matmul(&inverse)?;
    /// assert!((product.trace() - 2.0).abs() < 1e-12);
    ///
    /// let singular = SquareMatrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    /// assert_eq!(singular.invert(), Err(MatrixError::Singular));
    /// # Ok::<(), MatrixError>(())
    /// ```
    pub fn invert(&self) -> Result<Self, MatrixError> {
        self.invert_with_tolerance(default_tolerance())
    }

    /// [`SquareMatrix::invert`] with an explicit pivot tolerance.
    pub fn invert_with_tolerance(&self, tolerance: T) -> Result<Self, MatrixError> {
        let order = self.order();
        let identity = Self::identity(order)?;
        let mut augmented = self.inner.augment(&identity.inner)?;
        let outcome = gauss::forward(&mut augmented, order, tolerance);
        if !outcome.is_full_rank(order) {
            return Err(MatrixError::Singular);
        }
        gauss::backward(&mut augmented, order, tolerance);
        let inner = Matrix::from_shape_fn(order, order, |r, c| augmented.at(r, order + c))?;
        Ok(Self { inner })
    }

    /// Solves the linear system `A x = b` through the reduced row-echelon
    /// form of `[A | b]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::VectorDimensionMismatch`] if `b` does not
    /// match the order and [`MatrixError::Singular`] if elimination
    /// produces a zero pivot.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        self.solve_with_tolerance(b, default_tolerance())
    }

    /// [`SquareMatrix::solve`] with an explicit pivot tolerance.
    pub fn solve_with_tolerance(&self, b: &Vector<T>, tolerance: T) -> Result<Vector<T>, MatrixError> {
        let order = self.order();
        if b.dim() != order {
            return Err(MatrixError::VectorDimensionMismatch {
                rows: order,
                cols: order,
                dim: b.dim(),
            });
        }
        let rhs = Matrix::from_shape_vec(order, 1, b.to_vec())?;
        let mut augmented = self.inner.augment(&rhs)?;
        let outcome = gauss::forward(&mut augmented, order, tolerance);
        if !outcome.is_full_rank(order) {
            return Err(MatrixError::Singular);
        }
        gauss::backward(&mut augmented, order, tolerance);
        let coords: Vec<T> = (0..order).map(|r| augmented.at(r, order)).collect();
        Ok(Vector::new(coords)?)
    }
}

impl<T: Float> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(m: Matrix<T>) -> Result<Self, MatrixError> {
        if !m.is_square() {
            let (rows, cols) = m.size();
            return Err(MatrixError::NotSquareShape { rows, cols });
        }
        Ok(Self { inner: m })
    }
}

impl<T> From<SquareMatrix<T>> for Matrix<T> {
    fn from(m: SquareMatrix<T>) -> Self {
        m.inner
    }
}

impl<T> Deref for SquareMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.inner
    }
}

impl<T: Float + fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_from_rows_rejects_rectangular() {
        assert_eq!(
            SquareMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Err(MatrixError::NotSquareShape { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_identity() -> Result<(), MatrixError> {
        let identity = SquareMatrix::<f64>::identity(3)?;
        assert!(identity.is_diagonal());
        assert_eq!(identity.trace(), 3.0);
        assert_eq!(identity.determinant(), 1.0);
        assert_eq!(
            SquareMatrix::<f64>::identity(0),
            Err(MatrixError::EmptyRows)
        );
        Ok(())
    }

    #[test]
    fn test_identity_is_multiplicative_unit() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let identity = SquareMatrix::identity(2)?;
        assert_eq!(identity.matmul(&m)?, m);
        assert_eq!(m.matmul(&identity)?, m);
        Ok(())
    }

    #[test]
    fn test_trace() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[[1.0, 9.0], [7.0, -4.0]])?;
        assert_eq!(m.trace(), -3.0);
        Ok(())
    }

    #[test]
    fn test_gauss_forward_reports_swaps_and_rank() -> Result<(), MatrixError> {
        let mut m = SquareMatrix::from_rows(&[[0.0, 1.0], [2.0, 0.0]])?;
        let outcome = m.gauss_forward();
        assert_eq!(outcome.swaps, 1);
        assert_eq!(outcome.rank, 2);
        Ok(())
    }

    #[test]
    fn test_gauss_reduces_invertible_to_identity() -> Result<(), MatrixError> {
        let mut m = SquareMatrix::from_rows(&[[2.0, 1.0], [1.0, 3.0]])?;
        let outcome = m.gauss();
        assert!(outcome.is_full_rank(2));
        for r in 0..2 {
            for c in 0..2 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(m[(r, c)], expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_determinant_sign_flips_per_swap() -> Result<(), MatrixError> {
        // swapping the rows of the identity gives determinant -1
        let m = SquareMatrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;
        assert_relative_eq!(m.determinant(), -1.0);
        Ok(())
    }

    #[test]
    fn test_determinant_zero_row() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[[1.0, 2.0], [0.0, 0.0]])?;
        assert_eq!(m.determinant(), 0.0);
        Ok(())
    }

    #[test]
    fn test_determinant_known_3x3() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[
            [6.0, 1.0, 1.0],
            [4.0, -2.0, 5.0],
            [2.0, 8.0, 7.0],
        ])?;
        assert_relative_eq!(m.determinant(), -306.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_invert_known_2x2() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
        let inverse = m.invert()?;
        assert_relative_eq!(inverse[(0, 0)], 0.6, epsilon = 1e-12);
        assert_relative_eq!(inverse[(0, 1)], -0.7, epsilon = 1e-12);
        assert_relative_eq!(inverse[(1, 0)], -0.2, epsilon = 1e-12);
        assert_relative_eq!(inverse[(1, 1)], 0.4, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_invert_round_trip() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[
            [3.0, 0.0, 2.0],
            [2.0, 0.0, -2.0],
            [0.0, 1.0, 1.0],
        ])?;
        let product = m.matmul(&m.invert()?)?;
        let identity = SquareMatrix::identity(3)?;
        for r in 0..3 {
            for c in 0..3 {
                assert_relative_eq!(product[(r, c)], identity[(r, c)], epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_invert_singular() -> Result<(), MatrixError> {
        let singular = SquareMatrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
        assert_eq!(singular.invert(), Err(MatrixError::Singular));
        Ok(())
    }

    #[test]
    fn test_solve() -> Result<(), MatrixError> {
        // x + y = 3, x - y = 1 -> x = 2, y = 1
        let m = SquareMatrix::from_rows(&[[1.0, 1.0], [1.0, -1.0]])?;
        let b = Vector::new([3.0, 1.0])?;
        let x = m.solve(&b)?;
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_solve_singular() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[[1.0, 1.0], [2.0, 2.0]])?;
        let b = Vector::new([1.0, 2.0])?;
        assert_eq!(m.solve(&b), Err(MatrixError::Singular));
        Ok(())
    }

    #[test]
    fn test_solve_dimension_mismatch() -> Result<(), MatrixError> {
        let m = SquareMatrix::from_rows(&[[1.0, 1.0], [1.0, -1.0]])?;
        let b = Vector::new([1.0, 2.0, 3.0])?;
        assert_eq!(
            m.solve(&b),
            Err(MatrixError::VectorDimensionMismatch {
                rows: 2,
                cols: 2,
                dim: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_transpose_stays_square() -> Result<(), MatrixError> {
        let mut m = SquareMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        m.transpose();
        assert_eq!(m, SquareMatrix::from_rows(&[[1.0, 3.0], [2.0, 4.0]])?);
        Ok(())
    }

    #[test]
    fn test_try_from_matrix() -> Result<(), MatrixError> {
        let square: SquareMatrix<f64> =
            Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]])?.try_into()?;
        assert_eq!(square.order(), 2);
        Ok(())
    }
}
