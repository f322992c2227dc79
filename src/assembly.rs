//! Assembly of the global system for continuous piecewise linear elements in 1D.
//!
//! The assemblers accumulate (`+=`) into a caller-provided output that must be all zeros, and
//! they work with any output implementing [`TensorViewMut`]: a [`Matrix`](crate::Matrix) or
//! [`Vector`](crate::Vector) of the right size, but just as well a nalgebra `DMatrix` or `DVector`.
//! All preconditions are checked up front. When an assembler returns an error, the output has
//! not been modified.
//!
//! With hat functions $\phi_i$ on the mesh $x_0 < \dots < x_{N-1}$, the assembled quantities are
//!
//! $$
//! M_{ij} = \int \phi_i \phi_j \\, \mathrm{d}x, \qquad
//! b_i = \int f \phi_i \\, \mathrm{d}x, \qquad
//! K_{ij} = \int a \\, \phi_i' \phi_j' \\, \mathrm{d}x,
//! $$
//!
//! each approximated element by element with a low order quadrature rule.
use crate::error::{Error, InvalidArgument, Result};
use crate::tensor::ops::{entry_at_mut, is_zero};
use crate::tensor::TensorViewMut;
use crate::Real;
use hatfem_traits::Shape;
use std::fmt;
use std::fmt::{Display, Formatter};

mod load;
mod mass;
mod stiffness;

pub use load::*;
pub use mass::*;
pub use stiffness::*;

/// One of the two ends of a 1D domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    Left,
    Right,
}

impl Display for BoundarySide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoundarySide::Left => write!(f, "left"),
            BoundarySide::Right => write!(f, "right"),
        }
    }
}

/// Data for the Robin boundary condition $-a \partial_n u = k (u - g)$ at one end of the domain,
/// where $\partial_n$ is the derivative along the outward normal.
///
/// At the left end this reads $a(x_0) u'(x_0) = k (u(x_0) - g)$ and at the right end
/// $-a(x_N) u'(x_N) = k (u(x_N) - g)$. The homogeneous Neumann condition corresponds to $k = 0$,
/// and the Dirichlet condition $u = g$ is the limit $k \to \infty$.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RobinBoundary<T> {
    pub k: T,
    pub g: T,
}

impl<T: Real> RobinBoundary<T> {
    pub fn new(k: T, g: T) -> Self {
        Self { k, g }
    }

    /// The homogeneous Neumann condition.
    pub fn neumann() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Approximates the Dirichlet condition $u = g$ with the penalty coefficient `k`.
    pub fn dirichlet_penalty(g: T, k: T) -> Self {
        Self::new(k, g)
    }

    fn validate(&self, side: BoundarySide) -> Result<()> {
        if self.k >= T::zero() {
            Ok(())
        } else {
            Err(InvalidArgument::NegativeRobinCoefficient { side }.into())
        }
    }
}

fn check_matrix_output<T, O>(operation: &'static str, output: &O, num_nodes: usize) -> Result<()>
where
    O: TensorViewMut<T> + ?Sized,
{
    let expected = Shape::Matrix(num_nodes, num_nodes);
    if output.shape() == expected {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            operation,
            left: output.shape(),
            right: expected,
        })
    }
}

fn check_vector_output<T, O>(operation: &'static str, output: &O, num_nodes: usize) -> Result<()>
where
    O: TensorViewMut<T> + ?Sized,
{
    let expected = Shape::Vector(num_nodes);
    if output.shape().is_compatible_with(&expected) {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            operation,
            left: output.shape(),
            right: expected,
        })
    }
}

fn check_zero_output<T, O>(output: &O) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    if is_zero(output) {
        Ok(())
    } else {
        Err(InvalidArgument::NonZeroOutput.into())
    }
}

fn entry_mut<T, O>(output: &mut O, row: usize, col: usize) -> Result<&mut T>
where
    O: TensorViewMut<T> + ?Sized,
{
    let shape = output.shape();
    output
        .entry_mut(row, col)
        .ok_or(Error::IndexOutOfBounds { row, col, shape })
}

fn add_to_entry<T, O>(output: &mut O, row: usize, col: usize, value: T) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    *entry_mut(output, row, col)? += value;
    Ok(())
}

fn set_entry<T, O>(output: &mut O, row: usize, col: usize, value: T) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    *entry_mut(output, row, col)? = value;
    Ok(())
}

/// Accumulates into entry `index` of an output that is a vector, a single row or a single column.
fn add_to_vector_entry<T, O>(output: &mut O, index: usize, value: T) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    *entry_at_mut(output, index)? += value;
    Ok(())
}
