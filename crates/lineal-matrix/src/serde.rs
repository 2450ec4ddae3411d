use num_traits::Float;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{Matrix, SquareMatrix};

impl<T: Float + serde::Serialize> serde::Serialize for Matrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Matrix", 3)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.end()
    }
}

// Deserialization re-runs the construction validators so that invalid
// payloads (wrong length, NaN, infinite) are rejected.
impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: Float + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            data: Vec<T>,
            rows: usize,
            cols: usize,
        }

        let MatrixData { data, rows, cols } = MatrixData::deserialize(deserializer)?;
        Matrix::from_shape_vec(rows, cols, data).map_err(D::Error::custom)
    }
}

impl<T: Float + serde::Serialize> serde::Serialize for SquareMatrix<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_matrix().serialize(serializer)
    }
}

impl<'de, T> serde::Deserialize<'de> for SquareMatrix<T>
where
    T: Float + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let matrix = Matrix::deserialize(deserializer)?;
        SquareMatrix::try_from(matrix).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, SquareMatrix};

    #[test]
    fn test_serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])?;
        let serialized = serde_json::to_string(&m)?;
        let deserialized: Matrix<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(m, deserialized);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let payload = r#"{"data": [1.0, 2.0, 3.0], "rows": 2, "cols": 2}"#;
        let result: Result<Matrix<f64>, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_square_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let m = SquareMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
        let serialized = serde_json::to_string(&m)?;
        let deserialized: SquareMatrix<f64> = serde_json::from_str(&serialized)?;
        assert_eq!(m, deserialized);
        Ok(())
    }

    #[test]
    fn test_square_deserialize_rejects_rectangular() {
        let payload = r#"{"data": [1.0, 2.0], "rows": 1, "cols": 2}"#;
        let result: Result<SquareMatrix<f64>, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }
}
