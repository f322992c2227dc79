use crate::assembly::{add_to_entry, check_matrix_output, check_zero_output, set_entry, BoundarySide, RobinBoundary};
use crate::error::{Error, InvalidArgument, Result};
use crate::mesh::{elements, validate_mesh};
use crate::tensor::TensorViewMut;
use crate::Real;
use log::{debug, trace};

/// Assembles the stiffness matrix for the coefficient `a` on the mesh `x` into `output`.
///
/// The output must be an `N x N` matrix of zeros. The coefficient is evaluated exactly once, at
/// the midpoint of each element, so an element of length $h$ spanning nodes $i - 1$ and $i$ adds
///
/// $$
/// \frac{a(x_{i - 1/2})}{h} \begin{pmatrix} 1 & -1 \\\\ -1 & 1 \end{pmatrix}
/// $$
///
/// to the corresponding block. This discretizes $-(a u')'$ with natural (homogeneous Neumann)
/// boundary conditions. The result is symmetric, tridiagonal and has zero row sums.
///
/// # Errors
///
/// Fails if the mesh is invalid, if the output has the wrong shape or is not zero, or if `a`
/// is not strictly positive at the midpoint of some element.
pub fn assemble_stiffness<T, O>(x: &[T], a: impl Fn(T) -> T, output: &mut O) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    validate_mesh(x)?;
    check_matrix_output("stiffness matrix assembly", output, x.len())?;
    check_zero_output(output)?;

    accumulate_stiffness(x, a, output)?;
    debug!("Assembled stiffness matrix with {} nodes", x.len());
    Ok(())
}

/// Assembles the stiffness matrix with Robin boundary terms into `output`.
///
/// This is [`assemble_stiffness`] followed by adding $k_0$ to the first and $k_N$ to the last
/// diagonal entry. The assembled operator discretizes $-(a u')'$ subject to the Robin conditions
/// described in [`RobinBoundary`], with the boundary values $g_0, g_N$ entering through
/// [`assemble_load_robin`](crate::assembly::assemble_load_robin).
///
/// For $a > 0$ and $k_0, k_N \geq 0$ the result is symmetric, positive semi-definite and
/// diagonally dominant.
///
/// # Errors
///
/// In addition to the errors of [`assemble_stiffness`], fails if a Robin coefficient is negative.
pub fn assemble_stiffness_robin<T, O>(
    x: &[T],
    a: impl Fn(T) -> T,
    left: &RobinBoundary<T>,
    right: &RobinBoundary<T>,
    output: &mut O,
) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    validate_mesh(x)?;
    check_matrix_output("stiffness matrix assembly", output, x.len())?;
    left.validate(BoundarySide::Left)?;
    right.validate(BoundarySide::Right)?;
    check_zero_output(output)?;

    accumulate_stiffness(x, a, output)?;
    let last = x.len() - 1;
    add_to_entry(output, 0, 0, left.k)?;
    add_to_entry(output, last, last, right.k)?;
    trace!("Added Robin coefficients to diagonal entries 0 and {}", last);

    debug!("Assembled stiffness matrix with Robin terms and {} nodes", x.len());
    Ok(())
}

/// Accumulates the element contributions into an output that is known to be zero.
///
/// If `a` is not positive at the midpoint of some element, the entries written so far are
/// cleared again before the error is returned.
fn accumulate_stiffness<T, O>(x: &[T], a: impl Fn(T) -> T, output: &mut O) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    for element in elements(x) {
        let [i, j] = element.nodes;
        let a_mid = a(element.midpoint());
        if !(a_mid > T::zero()) {
            clear_band(output, i)?;
            return Err(Error::from(InvalidArgument::NonPositiveCoefficient { element: j }));
        }

        let conductance = a_mid / element.length();
        add_to_entry(output, i, i, conductance)?;
        add_to_entry(output, j, j, conductance)?;
        add_to_entry(output, i, j, -conductance)?;
        add_to_entry(output, j, i, -conductance)?;
    }
    Ok(())
}

/// Resets the tridiagonal band touched by the elements to the left of node `last`.
fn clear_band<T, O>(output: &mut O, last: usize) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    if last == 0 {
        return Ok(());
    }
    for i in 0..=last {
        set_entry(output, i, i, T::zero())?;
    }
    for i in 0..last {
        set_entry(output, i, i + 1, T::zero())?;
        set_entry(output, i + 1, i, T::zero())?;
    }
    Ok(())
}
