//! Operator overloads for [`Vector`] and [`Matrix`].
//!
//! Both operands always have statically known shapes here, so none of these operations can fail.
use crate::tensor::{Matrix, Vector};
use num::Zero;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_entrywise_ops {
    ($tensor:ident < $($dim:ident),+ >) => {
        impl<T, $(const $dim: usize),+> AddAssign for $tensor<T, $($dim),+>
        where
            T: Copy + AddAssign,
        {
            fn add_assign(&mut self, rhs: Self) {
                for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                    *a += b;
                }
            }
        }

        impl<T, $(const $dim: usize),+> SubAssign for $tensor<T, $($dim),+>
        where
            T: Copy + SubAssign,
        {
            fn sub_assign(&mut self, rhs: Self) {
                for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
                    *a -= b;
                }
            }
        }

        impl<T, $(const $dim: usize),+> MulAssign<T> for $tensor<T, $($dim),+>
        where
            T: Copy + MulAssign,
        {
            fn mul_assign(&mut self, scalar: T) {
                for a in self.as_mut_slice() {
                    *a *= scalar;
                }
            }
        }

        impl<T, $(const $dim: usize),+> Add for $tensor<T, $($dim),+>
        where
            T: Copy + AddAssign,
        {
            type Output = Self;

            fn add(mut self, rhs: Self) -> Self {
                self += rhs;
                self
            }
        }

        impl<T, $(const $dim: usize),+> Sub for $tensor<T, $($dim),+>
        where
            T: Copy + SubAssign,
        {
            type Output = Self;

            fn sub(mut self, rhs: Self) -> Self {
                self -= rhs;
                self
            }
        }

        impl<T, $(const $dim: usize),+> Mul<T> for $tensor<T, $($dim),+>
        where
            T: Copy + MulAssign,
        {
            type Output = Self;

            fn mul(mut self, scalar: T) -> Self {
                self *= scalar;
                self
            }
        }

        impl<T, $(const $dim: usize),+> Neg for $tensor<T, $($dim),+>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(mut self) -> Self {
                for a in self.as_mut_slice() {
                    *a = -*a;
                }
                self
            }
        }
    };
}

impl_entrywise_ops!(Matrix<R, C>);
impl_entrywise_ops!(Vector<N>);

macro_rules! impl_left_scalar_mul {
    ($($scalar:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                fn mul(self, rhs: Matrix<$scalar, R, C>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_left_scalar_mul!(f32, f64);

impl<T, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>> for Matrix<T, R, K>
where
    T: Copy + Zero + Mul<Output = T> + AddAssign,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        let mut product = Matrix::zeros();
        for i in 0..R {
            for j in 0..C {
                for k in 0..K {
                    product[(i, j)] += self[(i, k)] * rhs[(k, j)];
                }
            }
        }
        product
    }
}

/// The vector is treated as a column.
impl<T, const R: usize, const K: usize> Mul<Vector<T, K>> for Matrix<T, R, K>
where
    T: Copy + Zero + Mul<Output = T> + AddAssign,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, K>) -> Self::Output {
        Vector::from_column(self * rhs.into_column())
    }
}

/// The vector is treated as a row, and the `1 x C` product is returned as a vector.
impl<T, const K: usize, const C: usize> Mul<Matrix<T, K, C>> for Vector<T, K>
where
    T: Copy + Zero + Mul<Output = T> + AddAssign,
{
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        Vector::from_row(self.into_row() * rhs)
    }
}
