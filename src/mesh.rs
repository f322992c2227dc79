//! One-dimensional meshes.
//!
//! A mesh is an ordered slice of `N >= 2` strictly increasing node coordinates. It defines
//! `N - 1` contiguous elements, where element `i` spans `[x[i - 1], x[i]]` for `i = 1, ..., N - 1`.
use crate::error::{InvalidArgument, Result};
use crate::Real;
use itertools::Itertools;
use numeric_literals::replace_float_literals;

/// An interval element between two consecutive mesh nodes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntervalElement<T> {
    /// Global indices of the left and right node.
    pub nodes: [usize; 2],
    pub vertices: [T; 2],
}

impl<T: Real> IntervalElement<T> {
    pub fn left(&self) -> T {
        self.vertices[0]
    }

    pub fn right(&self) -> T {
        self.vertices[1]
    }

    pub fn length(&self) -> T {
        self.vertices[1] - self.vertices[0]
    }

    #[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
    pub fn midpoint(&self) -> T {
        (self.vertices[0] + self.vertices[1]) / 2.0
    }
}

/// Checks that `x` is a valid mesh.
///
/// A valid mesh has at least two nodes, all of them finite and strictly increasing, and every
/// element has a finite length and midpoint.
pub fn validate_mesh<T: Real>(x: &[T]) -> Result<()> {
    if x.len() < 2 {
        return Err(InvalidArgument::TooFewNodes { count: x.len() }.into());
    }

    if let Some(index) = x.iter().position(|xi| !xi.is_finite()) {
        return Err(InvalidArgument::NonFiniteNode { index }.into());
    }

    if let Some((index, _)) = x
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (a, b))| a >= b)
    {
        return Err(InvalidArgument::NonIncreasingMesh { index: index + 1 }.into());
    }

    // Finite nodes can still be far enough apart for the length or midpoint to overflow
    if let Some(element) = elements(x).find(|e| !e.length().is_finite() || !e.midpoint().is_finite()) {
        let [_, i] = element.nodes;
        return Err(InvalidArgument::NonFiniteElement { element: i }.into());
    }

    Ok(())
}

pub fn element_count<T>(x: &[T]) -> usize {
    x.len().saturating_sub(1)
}

/// Iterates over the elements of the mesh from left to right.
///
/// The mesh is not validated.
pub fn elements<T: Real>(x: &[T]) -> impl Iterator<Item = IntervalElement<T>> + '_ {
    x.iter()
        .copied()
        .tuple_windows()
        .enumerate()
        .map(|(i, (left, right))| IntervalElement {
            nodes: [i, i + 1],
            vertices: [left, right],
        })
}
