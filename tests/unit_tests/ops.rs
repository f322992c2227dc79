use hatfem::nalgebra::{DMatrix, DVector};
use hatfem::tensor::ops::{
    inf_norm, is_zero, resolve_product_shapes, scale, try_add_assign, try_matmul_into, try_reshape_into,
    try_sub_assign,
};
use hatfem::{Error, Matrix, Shape, Vector};

#[test]
fn adding_vector_to_incompatible_matrix_fails_before_mutation() {
    let mut m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let mut v = Vector::from_values([1.0, 1.0]);
    let (m_before, v_before) = (m, v);

    let err = try_add_assign(&mut m, &v).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            operation: "addition",
            left: Shape::Matrix(3, 3),
            right: Shape::Vector(2),
        }
    );
    assert!(try_add_assign(&mut v, &m).is_err());
    assert!(try_sub_assign(&mut m, &v).is_err());

    assert_eq!(m, m_before);
    assert_eq!(v, v_before);
}

#[test]
fn vector_is_compatible_with_row_and_column_matrices() {
    let mut v = Vector::from_values([1.0, 2.0, 3.0]);
    let row = Matrix::from_rows([[10.0, 20.0, 30.0]]);
    let column = row.transpose();

    try_add_assign(&mut v, &row).unwrap();
    assert_eq!(v, Vector::from_values([11.0, 22.0, 33.0]));
    try_sub_assign(&mut v, &column).unwrap();
    assert_eq!(v, Vector::from_values([1.0, 2.0, 3.0]));

    let mut row = row;
    try_add_assign(&mut row, &v).unwrap();
    assert_eq!(row, Matrix::from_rows([[11.0, 22.0, 33.0]]));

    // Row and column matrices are not compatible with each other
    let mut column = column;
    assert!(try_add_assign(&mut column, &row).is_err());
}

#[test]
fn ops_work_on_nalgebra_matrices() {
    let mut a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let b = Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
    try_add_assign(&mut a, &b).unwrap();
    assert_eq!(a, DMatrix::from_row_slice(2, 2, &[2.0, 3.0, 4.0, 5.0]));

    scale(&mut a, 0.5);
    assert_eq!(inf_norm(&a), 2.5);

    let mut d = DVector::<f64>::zeros(3);
    assert!(is_zero(&d));
    try_add_assign(&mut d, &Vector::from_values([1.0, -4.0, 2.0])).unwrap();
    assert_eq!(inf_norm(&d), 4.0);
}

#[test]
fn product_shapes_resolve_vectors_to_rows_or_columns() {
    // Vector on the right of a matrix is a column
    assert_eq!(
        resolve_product_shapes(Shape::Matrix(2, 3), Shape::Vector(3)),
        Ok(((2, 3), (3, 1)))
    );
    // Vector on the left of a matrix is a row
    assert_eq!(
        resolve_product_shapes(Shape::Vector(2), Shape::Matrix(2, 3)),
        Ok(((1, 2), (2, 3)))
    );
    // Otherwise the vector becomes whatever makes the inner dimensions agree
    assert_eq!(
        resolve_product_shapes(Shape::Matrix(3, 1), Shape::Vector(4)),
        Ok(((3, 1), (1, 4)))
    );
    assert_eq!(
        resolve_product_shapes(Shape::Vector(3), Shape::Matrix(1, 2)),
        Ok(((3, 1), (1, 2)))
    );
    // Two vectors
    assert_eq!(resolve_product_shapes(Shape::Vector(3), Shape::Vector(3)), Ok(((1, 3), (3, 1))));
    assert_eq!(resolve_product_shapes(Shape::Vector(2), Shape::Vector(3)), Ok(((2, 1), (1, 3))));

    assert!(resolve_product_shapes(Shape::Matrix(2, 3), Shape::Matrix(2, 3)).is_err());
    assert!(resolve_product_shapes(Shape::Matrix(2, 3), Shape::Vector(2)).is_err());
}

#[test]
fn matmul_into_agrees_with_typed_product() {
    let a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let v = Vector::from_values([1.0, -1.0, 2.0]);

    let mut out = Vector::<f64, 2>::zeros();
    try_matmul_into(&mut out, &a, &v).unwrap();
    assert_eq!(out, a * v);

    let w = Vector::from_values([1.0, 1.0]);
    let mut out = Matrix::<f64, 1, 3>::zeros();
    try_matmul_into(&mut out, &w, &a).unwrap();
    assert_eq!(Vector::from_row(out), w * a);

    // Outer product
    let mut outer = Matrix::<f64, 2, 3>::zeros();
    try_matmul_into(&mut outer, &w, &v).unwrap();
    assert_eq!(outer, Matrix::from_rows([[1.0, -1.0, 2.0], [1.0, -1.0, 2.0]]));

    // Output is overwritten, not accumulated into
    let mut out = Matrix::from_rows([[100.0, 100.0], [100.0, 100.0]]);
    try_matmul_into(&mut out, &a, &a.transpose()).unwrap();
    assert_eq!(out, a * a.transpose());
}

#[test]
fn matmul_into_rejects_wrong_output_shape() {
    let a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    let mut out = Matrix::<f64, 3, 3>::zeros();
    let err = try_matmul_into(&mut out, &a, &a).unwrap_err();
    assert_eq!(
        err,
        Error::DimensionMismatch {
            operation: "multiplication output",
            left: Shape::Matrix(3, 3),
            right: Shape::Matrix(2, 2),
        }
    );
    assert!(out.is_zero());
}

#[test]
fn reshape_requires_equal_element_count() {
    let source = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    let mut target = Matrix::<i32, 3, 2>::zeros();
    try_reshape_into(&mut target, &source).unwrap();
    assert_eq!(target, Matrix::from_rows([[1, 2], [3, 4], [5, 6]]));

    let mut flat = Vector::<i32, 6>::zeros();
    try_reshape_into(&mut flat, &source).unwrap();
    assert_eq!(flat, Vector::from_values([1, 2, 3, 4, 5, 6]));

    let mut too_small = Vector::<i32, 5>::zeros();
    assert!(matches!(
        try_reshape_into(&mut too_small, &source),
        Err(Error::DimensionMismatch { operation: "reshape", .. })
    ));
    assert!(too_small.is_zero());
}
