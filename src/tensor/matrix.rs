use crate::error::{Error, Result};
use crate::tensor::{TensorView, TensorViewMut};
use crate::Real;
use hatfem_traits::Shape;
use itertools::Itertools;
use num::Zero;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

/// A dense `R x C` matrix stored in row-major order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const fn from_rows(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Constructs a matrix by evaluating `f(row, col)` for every entry.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    pub const fn nrows(&self) -> usize {
        R
    }

    pub const fn ncols(&self) -> usize {
        C
    }

    pub const fn len(&self) -> usize {
        R * C
    }

    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    pub fn shape(&self) -> Shape {
        Shape::Matrix(R, C)
    }

    /// The entries in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    pub fn rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<&T> {
        let shape = self.shape();
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(Error::IndexOutOfBounds { row, col, shape })
    }

    pub fn try_get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let shape = self.shape();
        self.data
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(Error::IndexOutOfBounds { row, col, shape })
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.data[j][i])
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn zeros() -> Self {
        Self::from_rows([[T::zero(); C]; R])
    }

    /// Constructs a matrix from entries given in row-major order.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless the slice holds exactly `R * C` values.
    pub fn from_row_slice(values: &[T]) -> Result<Self> {
        if values.len() != R * C {
            return Err(Error::DimensionMismatch {
                operation: "from_row_slice",
                left: Shape::Matrix(R, C),
                right: Shape::Vector(values.len()),
            });
        }
        Ok(Self::from_fn(|i, j| values[i * C + j]))
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(Zero::is_zero)
    }
}

impl<T: Copy + Zero, const N: usize> Matrix<T, N, N> {
    pub fn from_diagonal(diagonal: [T; N]) -> Self {
        Self::from_fn(|i, j| if i == j { diagonal[i] } else { T::zero() })
    }

    pub fn diagonal(&self) -> [T; N] {
        std::array::from_fn(|i| self.data[i][i])
    }
}

impl<T: Real, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The largest absolute value among the entries, or zero for an empty matrix.
    pub fn inf_norm(&self) -> T {
        self.iter().fold(T::zero(), |max, x| max.max(x.abs()))
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.try_get(row, col) {
            Ok(entry) => entry,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.try_get_mut(row, col) {
            Ok(entry) => entry,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const R: usize, const C: usize> TensorView<T> for Matrix<T, R, C> {
    fn shape(&self) -> Shape {
        Shape::Matrix(R, C)
    }

    fn entry(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row)?.get(col)
    }
}

impl<T, const R: usize, const C: usize> TensorViewMut<T> for Matrix<T, R, C> {
    fn entry_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row)?.get_mut(col)
    }
}

impl<T: Display, const R: usize, const C: usize> Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "[{}]", row.iter().format(", "))?;
        }
        Ok(())
    }
}
