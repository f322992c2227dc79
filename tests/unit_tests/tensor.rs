use hatfem::nalgebra::{Matrix2x3, SMatrix, SVector, Vector3};
use hatfem::{Error, Matrix, Shape, Vector};
use matrixcompare::assert_matrix_eq;
use util::{assert_panics, assert_tensor_approx_eq};

#[test]
fn zeros_are_zero() {
    let m = Matrix::<f64, 3, 4>::zeros();
    assert!(m.is_zero());
    assert_eq!(m.shape(), Shape::Matrix(3, 4));
    assert_eq!(m.len(), 12);
    assert_eq!(m, Matrix::default());

    let v = Vector::<f64, 5>::zeros();
    assert!(v.is_zero());
    assert_eq!(v.shape(), Shape::Vector(5));
}

#[test]
fn matrix_storage_is_row_major() {
    let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(m[(1, 0)], 4);
    assert_eq!(Matrix::<i32, 2, 3>::from_row_slice(&[1, 2, 3, 4, 5, 6]).unwrap(), m);
    assert_eq!(Matrix::from_fn(|i, j| (3 * i + j + 1) as i32), m);
}

#[test]
fn from_row_slice_rejects_wrong_length() {
    let result = Matrix::<f64, 2, 2>::from_row_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(Error::DimensionMismatch {
            operation: "from_row_slice",
            left: Shape::Matrix(2, 2),
            right: Shape::Vector(3),
        })
    );
}

#[test]
fn out_of_range_access_is_an_index_error() {
    let mut m = Matrix::<f64, 2, 3>::zeros();
    assert_eq!(
        m.try_get(2, 0),
        Err(Error::IndexOutOfBounds {
            row: 2,
            col: 0,
            shape: Shape::Matrix(2, 3)
        })
    );
    assert!(m.try_get_mut(0, 3).is_err());
    *m.try_get_mut(1, 2).unwrap() = 7.0;
    assert_eq!(m[(1, 2)], 7.0);

    let v = Vector::from_values([1.0, 2.0]);
    let err = v.try_get(2).unwrap_err();
    assert_eq!(err.to_string(), "Index 2 is out of bounds for vector of length 2");

    assert_panics!(v[5]);
    assert_panics!(m[(0, 3)]);
}

#[test]
fn entrywise_arithmetic() {
    let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows([[0.5, -1.0], [2.0, 0.0]]);

    assert_eq!(a + b, Matrix::from_rows([[1.5, 1.0], [5.0, 4.0]]));
    assert_eq!(a - b, Matrix::from_rows([[0.5, 3.0], [1.0, 4.0]]));
    assert_eq!(-a, Matrix::from_rows([[-1.0, -2.0], [-3.0, -4.0]]));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(2.0 * a, a + a);

    let mut c = a;
    c += b;
    c -= b;
    c *= 3.0;
    assert_eq!(c, 3.0 * a);

    let v = Vector::from_values([1.0f32, -2.0]);
    assert_eq!(2.0f32 * v, Vector::from_values([2.0, -4.0]));
    assert_eq!(v - v, Vector::zeros());
}

#[test]
fn matrix_products() {
    let a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Matrix::from_rows([[1.0, 0.0], [0.0, 1.0], [2.0, -1.0]]);
    let product: Matrix<f64, 2, 2> = a * b;
    assert_eq!(product, Matrix::from_rows([[7.0, -1.0], [16.0, -1.0]]));

    // Agrees with nalgebra
    let expected = SMatrix::<f64, 2, 3>::from(a) * SMatrix::<f64, 3, 2>::from(b);
    assert_matrix_eq!(SMatrix::<f64, 2, 2>::from(product), expected);

    let v = Vector::from_values([1.0, -1.0, 2.0]);
    assert_eq!(a * v, Vector::from_values([5.0, 11.0]));

    let w = Vector::from_values([1.0, 1.0]);
    assert_eq!(w * a, Vector::from_values([5.0, 7.0, 9.0]));
    assert_eq!(w * a, Vector::from_row(w.into_row() * a));
}

#[test]
fn inf_norm_is_largest_absolute_entry() {
    let m = Matrix::from_rows([[1.0, -7.5], [3.0, 7.0]]);
    assert_eq!(m.inf_norm(), 7.5);
    assert_eq!(Vector::from_values([-2.0, 1.0]).inf_norm(), 2.0);
    assert_eq!(Matrix::<f64, 2, 2>::zeros().inf_norm(), 0.0);
    assert_eq!(Vector::<f64, 0>::zeros().inf_norm(), 0.0);
}

#[test]
fn vector_reshapes_to_row_and_column() {
    let v = Vector::from_values([1, 2, 3]);
    let row = v.into_row();
    let column = v.into_column();
    assert_eq!(row.shape(), Shape::Matrix(1, 3));
    assert_eq!(column.shape(), Shape::Matrix(3, 1));
    assert_eq!(row.as_slice(), column.as_slice());
    assert_eq!(row.transpose(), column);
    assert_eq!(Vector::from_row(row), v);
    assert_eq!(Vector::from_column(column), v);
}

#[test]
fn raw_storage_access() {
    let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.rows(), &[[1, 2, 3], [4, 5, 6]]);
    assert_eq!(m.into_rows()[1], [4, 5, 6]);

    let v = Vector::from_values([7, 8, 9]);
    let slice: &[i32] = v.as_ref();
    assert_eq!(slice, &[7, 8, 9]);
    assert_eq!(v.into_array(), [7, 8, 9]);
    assert_eq!(Vector::from([7, 8, 9]), v);
}

#[test]
fn square_matrix_diagonal() {
    let m = Matrix::from_diagonal([1.0, 2.0, 3.0]);
    assert_eq!(m.diagonal(), [1.0, 2.0, 3.0]);
    assert_eq!(m[(0, 1)], 0.0);
    assert_eq!(m.transpose(), m);
}

#[test]
fn dot_product() {
    let a = Vector::from_values([1.0, 2.0, 3.0]);
    let b = Vector::from_values([4.0, -5.0, 6.0]);
    assert_eq!(a.dot(&b), 12.0);
    assert_eq!(a * b.into_column(), Vector::from_values([12.0]));
}

#[test]
fn display() {
    let m = Matrix::from_rows([[1, 2], [3, 4]]);
    assert_eq!(m.to_string(), "[1, 2]\n[3, 4]\n");
    assert_eq!(Vector::from_values([1.5, 2.0]).to_string(), "[1.5, 2]");
}

#[test]
fn nalgebra_conversions() {
    let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let n: SMatrix<f64, 2, 3> = m.into();
    assert_eq!(n, Matrix2x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    assert_eq!(Matrix::from(n), m);

    let v = Vector::from_values([1.0, 2.0, 3.0]);
    let w: SVector<f64, 3> = v.into();
    assert_eq!(w, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(Vector::from(w), v);
}

#[test]
fn approx_assertion_uses_inf_norm() {
    let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let b = a + Matrix::from_rows([[1e-12, 0.0], [0.0, -1e-12]]);
    assert_tensor_approx_eq!(a, b, abstol = 1e-11);
    assert_panics!(assert_tensor_approx_eq!(a, b, abstol = 1e-13));
}
