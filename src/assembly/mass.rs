use crate::assembly::{add_to_entry, check_matrix_output, check_zero_output};
use crate::error::Result;
use crate::mesh::{elements, validate_mesh};
use crate::tensor::TensorViewMut;
use crate::Real;
use log::debug;
use numeric_literals::replace_float_literals;

/// Assembles the mass matrix of the mesh `x` into `output`.
///
/// The output must be an `N x N` matrix of zeros, where `N` is the number of nodes. For every
/// element of length $h$ spanning nodes $i - 1$ and $i$, this adds
///
/// $$
/// \frac{h}{6} \begin{pmatrix} 2 & 1 \\\\ 1 & 2 \end{pmatrix}
/// $$
///
/// to the corresponding block, which is the exact element mass matrix for linear hat functions
/// (Simpson's rule integrates the quadratic products exactly). The result is symmetric and
/// tridiagonal, invariant under translation of the mesh and scales linearly with it.
///
/// # Errors
///
/// Fails if the mesh is invalid, if the output has the wrong shape or if it is not zero.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn assemble_mass<T, O>(x: &[T], output: &mut O) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    validate_mesh(x)?;
    check_matrix_output("mass matrix assembly", output, x.len())?;
    check_zero_output(output)?;

    for element in elements(x) {
        let [i, j] = element.nodes;
        let h = element.length();
        add_to_entry(output, i, i, h / 3.0)?;
        add_to_entry(output, j, j, h / 3.0)?;
        add_to_entry(output, i, j, h / 6.0)?;
        add_to_entry(output, j, i, h / 6.0)?;
    }

    debug!("Assembled mass matrix with {} nodes", x.len());
    Ok(())
}
