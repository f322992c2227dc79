/// Poor man's approx assertion for tensors, measured in the infinity norm
#[macro_export]
macro_rules! assert_tensor_approx_eq {
    ($x:expr, $y:expr, abstol = $tol:expr) => {{
        let x = $x;
        let y = $y;
        let max_absdiff = (x - y).inf_norm();
        let approx_eq = max_absdiff <= $tol;

        if !approx_eq {
            println!("abstol: {:e}", $tol);
            println!("left: {}", x);
            println!("right: {}", y);
            println!("max abs diff: {:e}", max_absdiff);
        }
        assert!(approx_eq);
    }};
}

#[macro_export]
macro_rules! assert_panics {
    ($e:expr) => {{
        use std::panic::catch_unwind;
        use std::stringify;
        let expr_string = stringify!($e);
        let result = catch_unwind(|| $e);
        if result.is_ok() {
            panic!("assert_panics!({}) failed.", expr_string);
        }
    }};
}

/// Returns `N` equally spaced nodes from `a` to `b`.
pub fn uniform_mesh<const N: usize>(a: f64, b: f64) -> [f64; N] {
    assert!(N >= 2, "A mesh needs at least two nodes");
    let h = (b - a) / (N - 1) as f64;
    std::array::from_fn(|i| if i == N - 1 { b } else { a + i as f64 * h })
}
