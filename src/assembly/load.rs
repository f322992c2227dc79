use crate::assembly::{add_to_vector_entry, check_vector_output, check_zero_output, BoundarySide, RobinBoundary};
use crate::error::Result;
use crate::mesh::{elements, validate_mesh};
use crate::tensor::TensorViewMut;
use crate::Real;
use log::{debug, trace};
use numeric_literals::replace_float_literals;

/// Assembles the load vector of the source function `f` on the mesh `x` into `output`.
///
/// The output must hold `N` zeros, where `N` is the number of nodes: an `N`-vector, or a
/// `1 x N` or `N x 1` matrix. The integral of $f \phi_i$ is approximated by the trapezoidal
/// rule on each element, so that an element of length $h$ contributes $\frac{h}{2} f(x_{i-1})$
/// and $\frac{h}{2} f(x_i)$ to its two nodes. This is exact whenever $f$ is constant on each
/// element.
///
/// `f` is evaluated exactly once per node.
///
/// # Errors
///
/// Fails if the mesh is invalid, if the output has the wrong shape or if it is not zero.
pub fn assemble_load<T, O>(x: &[T], f: impl Fn(T) -> T, output: &mut O) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    validate_mesh(x)?;
    check_vector_output("load vector assembly", output, x.len())?;
    check_zero_output(output)?;

    accumulate_load(x, f, output)?;
    debug!("Assembled load vector with {} nodes", x.len());
    Ok(())
}

/// Assembles the load vector with Robin boundary terms into `output`.
///
/// This is [`assemble_load`] followed by adding $k_0 g_0$ to the first and $k_N g_N$ to the last
/// entry, which together with
/// [`assemble_stiffness_robin`](crate::assembly::assemble_stiffness_robin) gives the system for
/// $-(a u')' = f$ with Robin conditions at both ends.
///
/// # Errors
///
/// In addition to the errors of [`assemble_load`], fails if a Robin coefficient is negative.
pub fn assemble_load_robin<T, O>(
    x: &[T],
    f: impl Fn(T) -> T,
    left: &RobinBoundary<T>,
    right: &RobinBoundary<T>,
    output: &mut O,
) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    validate_mesh(x)?;
    check_vector_output("load vector assembly", output, x.len())?;
    left.validate(BoundarySide::Left)?;
    right.validate(BoundarySide::Right)?;
    check_zero_output(output)?;

    accumulate_load(x, f, output)?;
    let last = x.len() - 1;
    add_to_vector_entry(output, 0, left.k * left.g)?;
    add_to_vector_entry(output, last, right.k * right.g)?;
    trace!("Added Robin terms to load vector entries 0 and {}", last);

    debug!("Assembled load vector with Robin terms and {} nodes", x.len());
    Ok(())
}

#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
fn accumulate_load<T, O>(x: &[T], f: impl Fn(T) -> T, output: &mut O) -> Result<()>
where
    T: Real,
    O: TensorViewMut<T> + ?Sized,
{
    // Every interior node is shared by two elements, so carry its value over to the next element
    let mut f_left = f(x[0]);
    for element in elements(x) {
        let [i, j] = element.nodes;
        let f_right = f(element.right());
        let half_h = element.length() / 2.0;
        add_to_vector_entry(output, i, half_h * f_left)?;
        add_to_vector_entry(output, j, half_h * f_right)?;
        f_left = f_right;
    }
    Ok(())
}
