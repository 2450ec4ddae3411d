use num_traits::Float;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::Deserialize;

use crate::{Cartesian, Vec2, Vec3, Vector};

impl<T: Float + serde::Serialize> serde::Serialize for Vector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Vector", 1)?;
        state.serialize_field("coords", self.coords())?;
        state.end()
    }
}

// Deserialization re-runs the construction validators so that invalid
// payloads (empty, NaN, infinite) are rejected.
impl<'de, T> serde::Deserialize<'de> for Vector<T>
where
    T: Float + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct VectorData<T> {
            coords: Vec<T>,
        }

        let VectorData { coords } = VectorData::deserialize(deserializer)?;
        Vector::new(coords).map_err(D::Error::custom)
    }
}

impl<T: Float + serde::Serialize> serde::Serialize for Vec2<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Vec2", 1)?;
        state.serialize_field("coords", self.coords())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Vec2<T>
where
    T: Float + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Vec2Data<T> {
            coords: [T; 2],
        }

        let Vec2Data { coords: [x, y] } = Vec2Data::deserialize(deserializer)?;
        Vec2::new(x, y).map_err(D::Error::custom)
    }
}

impl<T: Float + serde::Serialize> serde::Serialize for Vec3<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Vec3", 1)?;
        state.serialize_field("coords", self.coords())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for Vec3<T>
where
    T: Float + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Vec3Data<T> {
            coords: [T; 3],
        }

        let Vec3Data { coords: [x, y, z] } = Vec3Data::deserialize(deserializer)?;
        Vec3::new(x, y, z).map_err(D::Error::custom)
    }
}
