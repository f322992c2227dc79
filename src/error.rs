//! Library-wide error types.
use crate::assembly::BoundarySide;
use hatfem_traits::Shape;
use std::error::Error as StdError;
use std::fmt;
use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

/// Library-wide error type.
///
/// Every fallible operation checks its preconditions before it touches any of its outputs, so
/// an error always leaves the operands exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The shapes of the operands are not compatible with the requested operation.
    DimensionMismatch {
        operation: &'static str,
        left: Shape,
        right: Shape,
    },
    /// An entry outside the shape of a tensor was requested.
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },
    InvalidArgument(InvalidArgument),
}

/// The ways in which the input to an assembly routine can be invalid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// A mesh needs at least two nodes to define a single element.
    TooFewNodes { count: usize },
    NonFiniteNode { index: usize },
    /// The node at `index` does not lie strictly to the right of its predecessor.
    NonIncreasingMesh { index: usize },
    /// The length or the midpoint of element `element` overflows, even though its nodes are
    /// finite.
    NonFiniteElement { element: usize },
    NegativeRobinCoefficient { side: BoundarySide },
    /// The coefficient function is not strictly positive at the midpoint of element `element`,
    /// which spans nodes `element - 1` and `element`.
    NonPositiveCoefficient { element: usize },
    /// Assembly accumulates into its output, which must therefore start out as zero.
    NonZeroOutput,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { operation, left, right } => {
                write!(f, "Dimension mismatch in {}: {} is incompatible with {}", operation, left, right)
            }
            Error::IndexOutOfBounds { row, col, shape } => match shape {
                Shape::Vector(_) => write!(f, "Index {} is out of bounds for {}", row, shape),
                Shape::Matrix(_, _) => write!(f, "Index ({}, {}) is out of bounds for {}", row, col, shape),
            },
            Error::InvalidArgument(arg) => write!(f, "Invalid argument: {}", arg),
        }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::TooFewNodes { count } => {
                write!(f, "mesh must have at least 2 nodes, but has {}", count)
            }
            InvalidArgument::NonFiniteNode { index } => write!(f, "mesh node {} is not finite", index),
            InvalidArgument::NonIncreasingMesh { index } => {
                write!(
                    f,
                    "mesh node {} does not lie strictly to the right of node {}",
                    index,
                    index.saturating_sub(1)
                )
            }
            InvalidArgument::NonFiniteElement { element } => {
                write!(f, "length or midpoint of mesh element {} is not finite", element)
            }
            InvalidArgument::NegativeRobinCoefficient { side } => {
                write!(f, "Robin coefficient at the {} boundary must be non-negative", side)
            }
            InvalidArgument::NonPositiveCoefficient { element } => {
                write!(f, "coefficient function is not positive on element {}", element)
            }
            InvalidArgument::NonZeroOutput => write!(f, "output must be zero before assembly"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidArgument(arg) => Some(arg),
            _ => None,
        }
    }
}

impl StdError for InvalidArgument {}

impl From<InvalidArgument> for Error {
    fn from(arg: InvalidArgument) -> Self {
        Error::InvalidArgument(arg)
    }
}
