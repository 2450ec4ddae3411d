use lineal_vector::VectorError;
use thiserror::Error;

/// An error type for matrix construction and algebra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction received no rows.
    #[error("matrices must have at least one row")]
    EmptyRows,

    /// A row has no entries.
    #[error("row {0} is empty; every row needs at least one entry")]
    EmptyRow(usize),

    /// Rows of unequal length.
    #[error("row {row} has {actual} entries, every row must have {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Entries per row, established by the first row.
        expected: usize,
        /// Entries found in the offending row.
        actual: usize,
    },

    /// An entry is NaN or infinite.
    #[error("entry ({row}, {col}) is not a finite number")]
    NonFiniteEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Flat data length does not match the requested shape.
    #[error("expected {expected} entries for a {rows}x{cols} matrix, got {actual}")]
    InvalidLength {
        /// Rows requested.
        rows: usize,
        /// Columns requested.
        cols: usize,
        /// `rows * cols`.
        expected: usize,
        /// Length of the provided data.
        actual: usize,
    },

    /// A square-matrix constructor received a rectangular shape.
    #[error("square matrices need as many rows as columns, got {rows}x{cols}")]
    NotSquareShape {
        /// Rows of the provided value.
        rows: usize,
        /// Columns of the provided value.
        cols: usize,
    },

    /// Element-wise operation between matrices of different shapes.
    #[error("size mismatch: {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    SizeMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// Matrix product between operands whose inner dimensions disagree.
    #[error("inner dimensions disagree: {left_rows}x{left_cols} times {right_rows}x{right_cols}")]
    InnerDimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// Augmentation between matrices with different row counts.
    #[error("cannot augment a matrix of {left} rows with one of {right} rows")]
    RowCountMismatch {
        /// Rows of the left operand.
        left: usize,
        /// Rows of the right operand.
        right: usize,
    },

    /// A vector operand does not fit the matrix shape.
    #[error("vector of dimension {dim} does not fit a {rows}x{cols} matrix")]
    VectorDimensionMismatch {
        /// Rows of the matrix.
        rows: usize,
        /// Columns of the matrix.
        cols: usize,
        /// Dimension of the vector operand.
        dim: usize,
    },

    /// Division by an exact zero scalar.
    #[error("tried dividing a matrix by zero")]
    DivisionByZero,

    /// A square-only query was invoked on a rectangular matrix.
    #[error("{what} is only defined for square matrices, got {rows}x{cols}")]
    NotSquare {
        /// The query that was attempted.
        what: &'static str,
        /// Rows of the matrix.
        rows: usize,
        /// Columns of the matrix.
        cols: usize,
    },

    /// Elimination produced a zero pivot; the matrix has no inverse.
    #[error("the matrix is singular")]
    Singular,

    /// Error from a vector operand.
    #[error(transparent)]
    Vector(#[from] VectorError),
}
