//! Conversions to and from nalgebra's statically sized matrices and vectors.
use crate::tensor::{Matrix, Vector};
use nalgebra::{SMatrix, SVector, Scalar};

impl<T: Scalar, const R: usize, const C: usize> From<Matrix<T, R, C>> for SMatrix<T, R, C> {
    fn from(matrix: Matrix<T, R, C>) -> Self {
        SMatrix::from_fn(|i, j| matrix[(i, j)].clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<SMatrix<T, R, C>> for Matrix<T, R, C> {
    fn from(matrix: SMatrix<T, R, C>) -> Self {
        Matrix::from_fn(|i, j| matrix[(i, j)].clone())
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(vector: Vector<T, N>) -> Self {
        SVector::from_fn(|i, _| vector[i].clone())
    }
}

impl<T: Scalar, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(vector: SVector<T, N>) -> Self {
        Vector::from_fn(|i| vector[i].clone())
    }
}
