use crate::error::{Error, Result};
use crate::tensor::{Matrix, TensorView, TensorViewMut};
use crate::Real;
use hatfem_traits::Shape;
use itertools::Itertools;
use num::Zero;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{AddAssign, Index, IndexMut, Mul};

/// A dense vector of `N` entries.
///
/// A vector is distinct from a `1 x N` or an `N x 1` matrix, but can be converted losslessly to
/// and from either.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Vector<T, N> {
    pub const fn from_values(values: [T; N]) -> Self {
        Self { data: values }
    }

    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn shape(&self) -> Shape {
        Shape::Vector(N)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn try_get(&self, index: usize) -> Result<&T> {
        let shape = self.shape();
        self.data.get(index).ok_or(Error::IndexOutOfBounds {
            row: index,
            col: 0,
            shape,
        })
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T> {
        let shape = self.shape();
        self.data.get_mut(index).ok_or(Error::IndexOutOfBounds {
            row: index,
            col: 0,
            shape,
        })
    }

    /// Reshapes the vector into a single-row matrix.
    pub fn into_row(self) -> Matrix<T, 1, N> {
        Matrix::from_rows([self.data])
    }

    /// Reshapes the vector into a single-column matrix.
    pub fn into_column(self) -> Matrix<T, N, 1> {
        Matrix::from_rows(self.data.map(|x| [x]))
    }

    pub fn from_row(row: Matrix<T, 1, N>) -> Self {
        let [data] = row.into_rows();
        Self { data }
    }

    pub fn from_column(column: Matrix<T, N, 1>) -> Self {
        Self {
            data: column.into_rows().map(|[x]| x),
        }
    }
}

impl<T: Copy + Zero, const N: usize> Vector<T, N> {
    pub fn zeros() -> Self {
        Self::from_values([T::zero(); N])
    }

    /// A vector with every entry equal to `value`.
    pub fn repeat(value: T) -> Self {
        Self::from_values([value; N])
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(Zero::is_zero)
    }

    pub fn dot(&self, other: &Self) -> T
    where
        T: Mul<Output = T> + AddAssign,
    {
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(&other.data) {
            sum += a * b;
        }
        sum
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// The largest absolute value among the entries, or zero for an empty vector.
    pub fn inf_norm(&self) -> T {
        self.iter().fold(T::zero(), |max, x| max.max(x.abs()))
    }
}

impl<T: Copy + Zero, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(entry) => entry,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.try_get_mut(index) {
            Ok(entry) => entry,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, const N: usize> TensorView<T> for Vector<T, N> {
    fn shape(&self) -> Shape {
        Shape::Vector(N)
    }

    fn entry(&self, row: usize, col: usize) -> Option<&T> {
        if col == 0 {
            self.data.get(row)
        } else {
            None
        }
    }
}

impl<T, const N: usize> TensorViewMut<T> for Vector<T, N> {
    fn entry_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if col == 0 {
            self.data.get_mut(row)
        } else {
            None
        }
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().format(", "))
    }
}
