use std::fmt;
use std::fmt::{Display, Formatter};

/// The shape of a dense tensor.
///
/// A vector keeps its rank, so an `N`-vector can be told apart from a `1 x N` or an `N x 1` matrix
/// even though all three hold the same `N` entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    Vector(usize),
    Matrix(usize, usize),
}

impl Shape {
    /// The total number of entries.
    pub fn len(&self) -> usize {
        match *self {
            Shape::Vector(n) => n,
            Shape::Matrix(r, c) => r * c,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Shape::Vector(_))
    }

    /// Number of rows. Vectors are viewed as columns.
    pub fn nrows(&self) -> usize {
        match *self {
            Shape::Vector(n) => n,
            Shape::Matrix(r, _) => r,
        }
    }

    /// Number of columns. Vectors are viewed as columns.
    pub fn ncols(&self) -> usize {
        match *self {
            Shape::Vector(_) => 1,
            Shape::Matrix(_, c) => c,
        }
    }

    /// Whether entry-wise arithmetic between tensors of the two shapes is permitted.
    ///
    /// Two shapes are compatible if they are identical, or if one is an `N`-vector and
    /// the other is a `1 x N` or an `N x 1` matrix.
    pub fn is_compatible_with(&self, other: &Shape) -> bool {
        match (*self, *other) {
            (a, b) if a == b => true,
            (Shape::Vector(n), Shape::Matrix(r, c)) | (Shape::Matrix(r, c), Shape::Vector(n)) => {
                (r == 1 && c == n) || (r == n && c == 1)
            }
            _ => false,
        }
    }

    /// Whether `(row, col)` lies inside the shape.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.nrows() && col < self.ncols()
    }

    /// Maps a row-major linear index to its `(row, col)` position.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn position(&self, linear_index: usize) -> Option<(usize, usize)> {
        if linear_index < self.len() {
            let ncols = self.ncols();
            Some((linear_index / ncols, linear_index % ncols))
        } else {
            None
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(n) => write!(f, "vector of length {}", n),
            Shape::Matrix(r, c) => write!(f, "{}x{} matrix", r, c),
        }
    }
}
