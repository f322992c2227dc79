//! Structural access to dense tensors.
//!
//! Generic routines in `hatfem` only ever need to know the shape of a tensor and how to reach
//! its entries. Anything implementing these traits can be used as input or output, including
//! nalgebra matrices.
use crate::Shape;
use nalgebra::storage::{Storage, StorageMut};
use nalgebra::{Dim, Matrix, Scalar};

/// Read access to the entries of a dense tensor.
///
/// Entries are addressed by `(row, col)`. Vectors are addressed as columns, so entry `i` of a
/// vector lives at `(i, 0)`.
pub trait TensorView<T> {
    fn shape(&self) -> Shape;

    /// Returns the entry at `(row, col)`, or `None` if the position lies outside the shape.
    fn entry(&self, row: usize, col: usize) -> Option<&T>;

    /// Returns the entry at the given row-major linear index.
    fn entry_at(&self, linear_index: usize) -> Option<&T> {
        let (row, col) = self.shape().position(linear_index)?;
        self.entry(row, col)
    }
}

/// Mutable access to the entries of a dense tensor.
pub trait TensorViewMut<T>: TensorView<T> {
    fn entry_mut(&mut self, row: usize, col: usize) -> Option<&mut T>;

    fn entry_at_mut(&mut self, linear_index: usize) -> Option<&mut T> {
        let (row, col) = self.shape().position(linear_index)?;
        self.entry_mut(row, col)
    }
}

impl<T, R, C, S> TensorView<T> for Matrix<T, R, C, S>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    fn shape(&self) -> Shape {
        Shape::Matrix(self.nrows(), self.ncols())
    }

    fn entry(&self, row: usize, col: usize) -> Option<&T> {
        self.get((row, col))
    }
}

impl<T, R, C, S> TensorViewMut<T> for Matrix<T, R, C, S>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: StorageMut<T, R, C>,
{
    fn entry_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.get_mut((row, col))
    }
}
