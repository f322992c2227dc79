//! Dense vectors and matrices whose shape is part of their type.
//!
//! [`Vector`] and [`Matrix`] are stack-allocated and never touch the heap. Arithmetic between
//! them is checked by the compiler: adding a vector to a matrix of another shape, or
//! multiplying matrices with mismatched inner dimensions, simply does not compile.
//!
//! ```compile_fail
//! use hatfem::{Matrix, Vector};
//! let a = Vector::<f64, 2>::zeros();
//! let b = Matrix::<f64, 3, 3>::zeros();
//! let _ = b + a;
//! ```
//!
//! ```compile_fail
//! use hatfem::Matrix;
//! let a = Matrix::<f64, 2, 3>::zeros();
//! let b = Matrix::<f64, 2, 3>::zeros();
//! let _ = a * b;
//! ```
//!
//! When shapes are only known at runtime, or when mixing ranks (an `N`-vector with a `1 x N` or
//! `N x 1` matrix), the routines in [`ops`] work on anything implementing [`TensorView`] and
//! validate shapes before touching a single entry.

mod arithmetic;
mod interop;
mod matrix;
pub mod ops;
#[cfg(feature = "serde-serialize")]
mod serde_impl;
mod vector;

pub use hatfem_traits::tensor::{TensorView, TensorViewMut};
pub use matrix::Matrix;
pub use vector::Vector;
