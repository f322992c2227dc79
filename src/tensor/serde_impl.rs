//! Tensors serialize as a flat sequence of their entries in row-major order.
use crate::tensor::{Matrix, Vector};
use num::Zero;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Deserialize<'de> + Copy + Zero,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Matrix::from_row_slice(&values).map_err(|_| {
            let expected = format!("{} entries", R * C);
            D::Error::invalid_length(values.len(), &expected.as_str())
        })
    }
}

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Deserialize<'de> + Copy + Zero,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        if values.len() != N {
            let expected = format!("{} entries", N);
            return Err(D::Error::invalid_length(values.len(), &expected.as_str()));
        }
        Ok(Vector::from_fn(|i| values[i]))
    }
}
