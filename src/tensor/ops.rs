//! Shape-checked operations on any [`TensorView`].
//!
//! Shapes are validated before a single entry is read or written, so on error every operand
//! is left untouched. Entry-wise operations accept compatible shapes: identical shapes, or an
//! `N`-vector paired with a `1 x N` or an `N x 1` matrix. Entries are paired up in row-major
//! order.
use crate::error::{Error, Result};
use crate::tensor::{TensorView, TensorViewMut};
use crate::Real;
use hatfem_traits::Shape;
use num::Zero;
use std::ops::{AddAssign, Mul, MulAssign, SubAssign};

fn check_compatible(operation: &'static str, left: Shape, right: Shape) -> Result<()> {
    if left.is_compatible_with(&right) {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { operation, left, right })
    }
}

fn entry_at<T, A>(tensor: &A, linear_index: usize) -> Result<&T>
where
    A: TensorView<T> + ?Sized,
{
    let shape = tensor.shape();
    tensor
        .entry_at(linear_index)
        .ok_or(Error::IndexOutOfBounds {
            row: linear_index,
            col: 0,
            shape,
        })
}

pub(crate) fn entry_at_mut<T, A>(tensor: &mut A, linear_index: usize) -> Result<&mut T>
where
    A: TensorViewMut<T> + ?Sized,
{
    let shape = tensor.shape();
    tensor
        .entry_at_mut(linear_index)
        .ok_or(Error::IndexOutOfBounds {
            row: linear_index,
            col: 0,
            shape,
        })
}

fn zip_apply<T, A, B>(operation: &'static str, lhs: &mut A, rhs: &B, mut f: impl FnMut(&mut T, T)) -> Result<()>
where
    T: Copy,
    A: TensorViewMut<T> + ?Sized,
    B: TensorView<T> + ?Sized,
{
    let shape = lhs.shape();
    check_compatible(operation, shape, rhs.shape())?;
    for k in 0..shape.len() {
        let b = *entry_at(rhs, k)?;
        f(entry_at_mut(lhs, k)?, b);
    }
    Ok(())
}

/// Computes `lhs += rhs`.
pub fn try_add_assign<T, A, B>(lhs: &mut A, rhs: &B) -> Result<()>
where
    T: Copy + AddAssign,
    A: TensorViewMut<T> + ?Sized,
    B: TensorView<T> + ?Sized,
{
    zip_apply("addition", lhs, rhs, |a, b| *a += b)
}

/// Computes `lhs -= rhs`.
pub fn try_sub_assign<T, A, B>(lhs: &mut A, rhs: &B) -> Result<()>
where
    T: Copy + SubAssign,
    A: TensorViewMut<T> + ?Sized,
    B: TensorView<T> + ?Sized,
{
    zip_apply("subtraction", lhs, rhs, |a, b| *a -= b)
}

/// Multiplies every entry by `scalar`.
pub fn scale<T, A>(tensor: &mut A, scalar: T)
where
    T: Copy + MulAssign,
    A: TensorViewMut<T> + ?Sized,
{
    for k in 0..tensor.shape().len() {
        if let Some(a) = tensor.entry_at_mut(k) {
            *a *= scalar;
        }
    }
}

/// The largest absolute value among the entries, or zero for an empty tensor.
pub fn inf_norm<T, A>(tensor: &A) -> T
where
    T: Real,
    A: TensorView<T> + ?Sized,
{
    (0..tensor.shape().len())
        .filter_map(|k| tensor.entry_at(k))
        .fold(T::zero(), |max, x| max.max(x.abs()))
}

pub fn is_zero<T, A>(tensor: &A) -> bool
where
    T: Zero,
    A: TensorView<T> + ?Sized,
{
    (0..tensor.shape().len())
        .filter_map(|k| tensor.entry_at(k))
        .all(Zero::is_zero)
}

/// Copies the entries of `source` into `target` in row-major order.
///
/// This is a lossless reshape: it requires both tensors to hold the same number of entries,
/// but places no other restriction on their shapes.
pub fn try_reshape_into<T, A, B>(target: &mut A, source: &B) -> Result<()>
where
    T: Copy,
    A: TensorViewMut<T> + ?Sized,
    B: TensorView<T> + ?Sized,
{
    let (target_shape, source_shape) = (target.shape(), source.shape());
    if target_shape.len() != source_shape.len() {
        return Err(Error::DimensionMismatch {
            operation: "reshape",
            left: target_shape,
            right: source_shape,
        });
    }
    for k in 0..source_shape.len() {
        *entry_at_mut(target, k)? = *entry_at(source, k)?;
    }
    Ok(())
}

/// Resolves the operand shapes of the product `left * right` to a pair of matrix shapes
/// `(r, k)` and `(k, c)`.
///
/// A vector is turned into a row or a column so that the inner dimensions agree. A vector on
/// the left is preferably a row and a vector on the right preferably a column, which makes the
/// product of two vectors of equal length their inner product.
pub fn resolve_product_shapes(left: Shape, right: Shape) -> Result<((usize, usize), (usize, usize))> {
    let mismatch = Error::DimensionMismatch {
        operation: "multiplication",
        left,
        right,
    };
    let resolved = match (left, right) {
        (Shape::Matrix(r, k), Shape::Matrix(k2, c)) => ((r, k), (k2, c)),
        (Shape::Vector(n), Shape::Matrix(k, c)) => {
            if k == n {
                ((1, n), (k, c))
            } else {
                ((n, 1), (k, c))
            }
        }
        (Shape::Matrix(r, k), Shape::Vector(n)) => {
            if k == n {
                ((r, k), (n, 1))
            } else {
                ((r, k), (1, n))
            }
        }
        (Shape::Vector(n), Shape::Vector(m)) => {
            if n == m {
                ((1, n), (m, 1))
            } else {
                ((n, 1), (1, m))
            }
        }
    };
    let ((_, k_left), (k_right, _)) = resolved;
    if k_left == k_right {
        Ok(resolved)
    } else {
        Err(mismatch)
    }
}

/// Computes `output = left * right` with the standard triple loop.
///
/// Vector operands are resolved as described in [`resolve_product_shapes`]. The output must be
/// compatible with the `r x c` shape of the product, and is overwritten.
pub fn try_matmul_into<T, O, A, B>(output: &mut O, left: &A, right: &B) -> Result<()>
where
    T: Copy + Zero + Mul<Output = T> + AddAssign,
    O: TensorViewMut<T> + ?Sized,
    A: TensorView<T> + ?Sized,
    B: TensorView<T> + ?Sized,
{
    let ((r, k), (_, c)) = resolve_product_shapes(left.shape(), right.shape())?;
    check_compatible("multiplication output", output.shape(), Shape::Matrix(r, c))?;

    for i in 0..r {
        for j in 0..c {
            let mut sum = T::zero();
            for l in 0..k {
                sum += *entry_at(left, i * k + l)? * *entry_at(right, l * c + j)?;
            }
            *entry_at_mut(output, i * c + j)? = sum;
        }
    }
    Ok(())
}
