//! Fixed-size dense tensors and assembly of the global system for continuous piecewise linear
//! finite elements on 1D meshes.
//!
//! The crate has two parts:
//!
//! - [`tensor`]: [`Vector`] and [`Matrix`], stack-allocated containers whose shape is part of
//!   their type, together with shape-checked operations on anything implementing
//!   [`TensorView`](tensor::TensorView).
//! - [`assembly`]: the mass matrix, the load vector and the stiffness matrix with Robin boundary
//!   terms, accumulated into caller-provided outputs.
//!
//! Solving the assembled system is left to the caller. Every [`Matrix`] and [`Vector`] converts
//! into its nalgebra counterpart, and the assemblers can also write into nalgebra matrices
//! directly.
//!
//! ```
//! use hatfem::assembly::{assemble_load_robin, assemble_stiffness_robin, RobinBoundary};
//! use hatfem::{Matrix, Vector};
//!
//! # fn main() -> hatfem::Result<()> {
//! let x = [0.0, 0.25, 0.5, 0.75, 1.0];
//! let left = RobinBoundary::dirichlet_penalty(0.0, 1e6);
//! let right = RobinBoundary::neumann();
//!
//! let mut stiffness = Matrix::<f64, 5, 5>::zeros();
//! let mut load = Vector::<f64, 5>::zeros();
//! assemble_stiffness_robin(&x, |_| 1.0, &left, &right, &mut stiffness)?;
//! assemble_load_robin(&x, |_| 1.0, &left, &right, &mut load)?;
//!
//! assert_eq!(stiffness[(0, 0)], 4.0 + 1e6);
//! assert_eq!(load[4], 0.125);
//! # Ok(())
//! # }
//! ```

pub mod assembly;
pub mod error;
pub mod mesh;
pub mod tensor;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub extern crate nalgebra;

pub use error::{Error, Result};
pub use hatfem_traits::{Real, Shape};
pub use tensor::{Matrix, Vector};
