//! Strategies for property-based testing with `proptest`.
use crate::assembly::RobinBoundary;
use ::proptest::collection::vec;
use ::proptest::prelude::*;

/// Strictly increasing meshes with `N` nodes.
pub fn mesh<const N: usize>() -> impl Strategy<Value = [f64; N]> {
    // Keep coordinates and spacings in a modest range so that element lengths stay well
    // away from round-off
    let start = -10.0..10.0;
    let spacings = vec(0.1..5.0, N.saturating_sub(1));
    (start, spacings).prop_map(|(start, spacings)| {
        let mut x = [start; N];
        for (i, h) in spacings.into_iter().enumerate() {
            x[i + 1] = x[i] + h;
        }
        x
    })
}

/// Strictly increasing meshes with a number of nodes in the given range.
///
/// Meshes always have at least 2 nodes, and an empty range yields meshes with exactly
/// `max(2, num_nodes.start)` nodes.
pub fn dynamic_mesh(num_nodes: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    let start = num_nodes.start.max(2);
    let num_nodes = start..num_nodes.end.max(start + 1);
    (-10.0..10.0, num_nodes)
        .prop_flat_map(|(start, n)| (Just(start), vec(0.1..5.0, n - 1)))
        .prop_map(|(start, spacings)| {
            let mut x = Vec::with_capacity(spacings.len() + 1);
            x.push(start);
            for h in spacings {
                let last = x[x.len() - 1];
                x.push(last + h);
            }
            x
        })
}

/// Robin boundary data with a non-negative coefficient.
pub fn robin_boundary() -> impl Strategy<Value = RobinBoundary<f64>> {
    (0.0..1e3, -10.0..10.0).prop_map(|(k, g)| RobinBoundary::new(k, g))
}
