use std::fmt;
use std::ops::{Index, Mul, Neg};

use lineal_vector::Vector;
use num_traits::Float;

use crate::error::MatrixError;
use crate::square::SquareMatrix;

/// An n×m matrix with row-major flat storage.
///
/// The shape is validated at construction: at least one row, at least one
/// column, every row of identical length, every entry a finite number.
/// Binary operations return new values; the only in-place mutation is
/// [`Matrix::transpose`], which has a value-returning counterpart.
///
/// # Example
///
/// ```
/// use lineal_matrix::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
/// assert_eq!(m.size(), (2, 3));
/// assert_eq!(m[(1, 2)], 6.0);
/// # Ok::<(), lineal_matrix::MatrixError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Type alias for a double precision matrix.
pub type MatrixF64 = Matrix<f64>;

/// Type alias for a single precision matrix.
pub type MatrixF32 = Matrix<f32>;

impl<T: Float> Matrix<T> {
    /// Creates a matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - A slice of rows; each row is anything that can be viewed
    ///   as a slice of entries (arrays, vectors, slices).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyRows`] for no rows,
    /// [`MatrixError::EmptyRow`] for an empty row,
    /// [`MatrixError::RaggedRow`] for rows of unequal length and
    /// [`MatrixError::NonFiniteEntry`] for a NaN or infinite entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_matrix::{Matrix, MatrixError};
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    /// assert_eq!(m.size(), (2, 2));
    ///
    /// let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert!(ragged.is_err());
    /// # Ok::<(), MatrixError>(())
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::EmptyRows);
        }
        let cols = rows[0].as_ref().len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(MatrixError::EmptyRow(r));
            }
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    row: r,
                    expected: cols,
                    actual: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFiniteEntry { row: r, col: c });
                }
                data.push(value);
            }
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a matrix from a shape and flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidLength`] if `data.len()` differs from
    /// `rows * cols`, plus the shape and finiteness errors of
    /// [`Matrix::from_rows`].
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if rows == 0 {
            return Err(MatrixError::EmptyRows);
        }
        if cols == 0 {
            return Err(MatrixError::EmptyRow(0));
        }
        if data.len() != rows * cols {
            return Err(MatrixError::InvalidLength {
                rows,
                cols,
                expected: rows * cols,
                actual: data.len(),
            });
        }
        if let Some(i) = data.iter().position(|v| !v.is_finite()) {
            return Err(MatrixError::NonFiniteEntry {
                row: i / cols,
                col: i % cols,
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix by invoking a closure with each `(row, col)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyRows`] / [`MatrixError::EmptyRow`] for
    /// a zero dimension and [`MatrixError::NonFiniteEntry`] if the closure
    /// produces a NaN or infinite value.
    pub fn from_shape_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        if rows == 0 {
            return Err(MatrixError::EmptyRows);
        }
        if cols == 0 {
            return Err(MatrixError::EmptyRow(0));
        }
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let value = f(r, c);
                if !value.is_finite() {
                    return Err(MatrixError::NonFiniteEntry { row: r, col: c });
                }
                data.push(value);
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates the all-zero matrix of the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::EmptyRows`] / [`MatrixError::EmptyRow`] for
    /// a zero dimension.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_shape_fn(rows, cols, |_, _| T::zero())
    }

    /// Builds a matrix from parts already known to be valid.
    pub(crate) fn from_parts(data: Vec<T>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// The `(rows, cols)` pair.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` iff the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Borrowed slice of the given row, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterator over the rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Borrowed view of the flat row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Independent copy of the flat row-major data.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Transposes the matrix in place.
    ///
    /// For a rectangular matrix this changes the shape from `n×m` to
    /// `m×n`. See [`Matrix::transposed`] for the value-returning
    /// counterpart.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Returns the transposed copy, with swapped dimensions.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self::from_parts(data, self.rows, self.cols))
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Self::from_parts(data, self.rows, self.cols))
    }

    /// Scalar multiple of this matrix.
    pub fn scale(&self, factor: T) -> Self {
        let data = self.data.iter().map(|&v| v * factor).collect();
        Self::from_parts(data, self.rows, self.cols)
    }

    /// Divides every entry by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DivisionByZero`] if `divisor` is exactly
    /// zero.
    pub fn div(&self, divisor: T) -> Result<Self, MatrixError> {
        if divisor == T::zero() {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.scale(divisor.recip()))
    }

    /// Standard row-by-column matrix product; the result has shape
    /// `self.rows × other.cols`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InnerDimensionMismatch`] if
    /// `self.cols != other.rows`.
    ///
    /// # Example
    ///
    /// ```
    /// use lineal_matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    /// let b = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;
    /// let product = a.matmul(&b)?;
    /// assert_eq!(product, Matrix::from_rows(&[[2.0, 1.0], [4.0, 3.0]])?);
    /// # Ok::<(), lineal_matrix::MatrixError>(())
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::InnerDimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        let mut data = vec![T::zero(); self.rows * other.cols];
        for r in 0..self.rows {
            for k in 0..self.cols {
                let left = self.data[r * self.cols + k];
                for c in 0..other.cols {
                    data[r * other.cols + c] =
                        data[r * other.cols + c] + left * other.data[k * other.cols + c];
                }
            }
        }
        Ok(Self::from_parts(data, self.rows, other.cols))
    }

    /// Applies the matrix to a column vector, returning a vector of
    /// dimension `self.rows`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::VectorDimensionMismatch`] if the vector
    /// dimension differs from the column count.
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>, MatrixError> {
        if v.dim() != self.cols {
            return Err(MatrixError::VectorDimensionMismatch {
                rows: self.rows,
                cols: self.cols,
                dim: v.dim(),
            });
        }
        let coords: Vec<T> = self
            .rows_iter()
            .map(|row| {
                row.iter()
                    .zip(v.coords())
                    .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            })
            .collect();
        Ok(Vector::new(coords)?)
    }

    /// `true` iff every entry is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| *v == T::zero())
    }

    /// `true` iff the matrix is square with every off-diagonal entry
    /// exactly zero. Rectangular matrices are never diagonal.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.rows {
            for c in 0..self.cols {
                if r != c && self.data[r * self.cols + c] != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// `true` iff the matrix is square and equal to its transpose.
    /// Rectangular matrices are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.rows {
            for c in r + 1..self.cols {
                if self.data[r * self.cols + c] != self.data[c * self.cols + r] {
                    return false;
                }
            }
        }
        true
    }

    /// `true` iff the matrix is square and equal to the negation of its
    /// transpose; this forces a zero diagonal. Rectangular matrices are
    /// never antisymmetric.
    pub fn is_antisymmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.rows {
            for c in r..self.cols {
                if self.data[r * self.cols + c] != -self.data[c * self.cols + r] {
                    return false;
                }
            }
        }
        true
    }

    /// Determinant of the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a rectangular matrix; the
    /// determinant is only defined for square ones.
    pub fn determinant(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                what: "the determinant",
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(SquareMatrix::from_inner(self.clone()).determinant())
    }

    /// Horizontal concatenation `[self | right]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RowCountMismatch`] if the row counts differ.
    pub fn augment(&self, right: &Self) -> Result<Self, MatrixError> {
        if self.rows != right.rows {
            return Err(MatrixError::RowCountMismatch {
                left: self.rows,
                right: right.rows,
            });
        }
        let cols = self.cols + right.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            data.extend_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
            data.extend_from_slice(&right.data[r * right.cols..(r + 1) * right.cols]);
        }
        Ok(Self::from_parts(data, self.rows, cols))
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.cols + col]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        if self.size() != other.size() {
            return Err(MatrixError::SizeMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }
        Ok(())
    }
}

/// `true` iff both matrices have identical shape.
pub fn have_same_size<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    a.size() == b.size()
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Float> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        for v in &mut self.data {
            *v = -*v;
        }
        self
    }
}

impl<T: Float> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}

impl<T: Float> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Float> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>10.3}", v)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_validation() {
        let no_rows: [[f64; 2]; 0] = [];
        assert_eq!(Matrix::from_rows(&no_rows), Err(MatrixError::EmptyRows));

        let empty_row: Vec<Vec<f64>> = vec![vec![]];
        assert_eq!(Matrix::from_rows(&empty_row), Err(MatrixError::EmptyRow(0)));

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Matrix::from_rows(&ragged),
            Err(MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );

        assert_eq!(
            Matrix::from_rows(&[[1.0, f64::NAN]]),
            Err(MatrixError::NonFiniteEntry { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_from_shape_vec() -> Result<(), MatrixError> {
        let m = Matrix::from_shape_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(m.size(), (2, 3));
        assert_eq!(m.row(1), Some(&[4.0, 5.0, 6.0][..]));

        assert_eq!(
            Matrix::from_shape_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatrixError::InvalidLength {
                rows: 2,
                cols: 2,
                expected: 4,
                actual: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_get_and_index() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        assert_eq!(m.get(1, 0), Some(&3.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m[(0, 1)], 2.0);
        Ok(())
    }

    #[test]
    fn test_transpose_changes_shape() -> Result<(), MatrixError> {
        let mut m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        let expected = Matrix::from_rows(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]])?;
        assert_eq!(m.transposed(), expected);

        m.transpose();
        assert_eq!(m.size(), (3, 2));
        assert_eq!(m, expected);
        Ok(())
    }

    #[test]
    fn test_add_sub() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let b = Matrix::from_rows(&[[0.5, -1.0], [2.0, 0.0]])?;
        assert_eq!(a.add(&b)?.sub(&b)?, a);

        let other_shape = Matrix::from_rows(&[[1.0, 2.0]])?;
        assert_eq!(
            a.add(&other_shape),
            Err(MatrixError::SizeMismatch {
                left_rows: 2,
                left_cols: 2,
                right_rows: 1,
                right_cols: 2
            })
        );
        Ok(())
    }

    #[test]
    fn test_scale_div() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[2.0, -4.0]])?;
        assert_eq!(m.scale(0.5), Matrix::from_rows(&[[1.0, -2.0]])?);
        assert_eq!(m.div(2.0)?, Matrix::from_rows(&[[1.0, -2.0]])?);
        assert_eq!(m.div(0.0), Err(MatrixError::DivisionByZero));
        Ok(())
    }

    #[test]
    fn test_matmul() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        let b = Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]])?;
        let product = a.matmul(&b)?;
        assert_eq!(product, Matrix::from_rows(&[[58.0, 64.0], [139.0, 154.0]])?);

        assert_eq!(
            b.matmul(&b),
            Err(MatrixError::InnerDimensionMismatch {
                left_rows: 3,
                left_cols: 2,
                right_rows: 3,
                right_cols: 2
            })
        );
        Ok(())
    }

    #[test]
    fn test_mul_vector() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, 0.0], [0.0, 2.0], [1.0, 1.0]])?;
        let v = Vector::new([3.0, 4.0])?;
        assert_eq!(m.mul_vector(&v)?, Vector::new([3.0, 8.0, 7.0])?);

        let wrong = Vector::new([1.0, 2.0, 3.0])?;
        assert_eq!(
            m.mul_vector(&wrong),
            Err(MatrixError::VectorDimensionMismatch {
                rows: 3,
                cols: 2,
                dim: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_predicates() -> Result<(), MatrixError> {
        let zero = Matrix::<f64>::zeros(2, 3)?;
        assert!(zero.is_zero());
        assert!(!zero.is_diagonal()); // rectangular

        let diagonal = Matrix::from_rows(&[[2.0, 0.0], [0.0, -1.0]])?;
        assert!(diagonal.is_diagonal());
        assert!(diagonal.is_symmetric());

        let symmetric = Matrix::from_rows(&[[1.0, 5.0], [5.0, 2.0]])?;
        assert!(symmetric.is_symmetric());
        assert!(!symmetric.is_antisymmetric());

        let antisymmetric = Matrix::from_rows(&[[0.0, 3.0], [-3.0, 0.0]])?;
        assert!(antisymmetric.is_antisymmetric());
        assert!(!antisymmetric.is_symmetric());
        Ok(())
    }

    #[test]
    fn test_determinant_not_square() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        assert_eq!(
            m.determinant(),
            Err(MatrixError::NotSquare {
                what: "the determinant",
                rows: 2,
                cols: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_determinant_square() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let det = m.determinant()?;
        assert!((det - -2.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_augment() -> Result<(), MatrixError> {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let b = Matrix::from_rows(&[[5.0], [6.0]])?;
        let augmented = a.augment(&b)?;
        assert_eq!(
            augmented,
            Matrix::from_rows(&[[1.0, 2.0, 5.0], [3.0, 4.0, 6.0]])?
        );

        let wrong = Matrix::from_rows(&[[1.0]])?;
        assert_eq!(
            a.augment(&wrong),
            Err(MatrixError::RowCountMismatch { left: 2, right: 1 })
        );
        Ok(())
    }

    #[test]
    fn test_have_same_size() -> Result<(), MatrixError> {
        let a = Matrix::<f64>::zeros(2, 3)?;
        let b = Matrix::<f64>::zeros(2, 3)?;
        let c = Matrix::<f64>::zeros(3, 2)?;
        assert!(have_same_size(&a, &b));
        assert!(!have_same_size(&a, &c));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, -2.5]])?;
        assert_eq!(format!("{}", m), "[     1.000     -2.500]");
        Ok(())
    }

    #[test]
    fn test_to_vec_is_independent() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, 2.0]])?;
        let mut copy = m.to_vec();
        copy[0] = 99.0;
        assert_eq!(m[(0, 0)], 1.0);
        Ok(())
    }
}
