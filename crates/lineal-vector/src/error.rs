use thiserror::Error;

/// An error type for vector construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Construction received no coordinates.
    #[error("vectors must have at least one coordinate, 0 were given")]
    EmptyCoordinates,

    /// A coordinate is NaN or infinite.
    #[error("coordinate {0} is not a finite number")]
    NonFiniteCoordinate(usize),

    /// A fixed-dimension type received a value of a different dimension.
    #[error("expected {expected} coordinates, got {actual}")]
    WrongDimension {
        /// Dimension required by the target type.
        expected: usize,
        /// Dimension of the provided value.
        actual: usize,
    },

    /// Binary operation between vectors of different dimensions.
    #[error("vectors must have the same dimension, got {left} and {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// Division by an exact zero scalar.
    #[error("tried dividing a vector by zero")]
    DivisionByZero,

    /// A scalar argument that must be finite was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFiniteArgument(&'static str),

    /// A radius or distance argument was negative.
    #[error("{0} must be positive or zero")]
    NegativeRadius(&'static str),

    /// The operation is mathematically undefined for the zero vector.
    #[error("{0} is undefined for a zero vector")]
    UndefinedForZeroVector(&'static str),

    /// The azimuth is undefined when the vector lies on the z axis.
    #[error("the azimuth of a vector with x = 0 and y = 0 is undefined")]
    UndefinedAzimuth,
}
