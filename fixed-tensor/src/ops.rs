//! Elementwise operators. Every operator walks the flat storage, so the shape of the left operand is kept
//! and the shape of the right operand is never consulted.

use super::*;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! impl_tensor_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $sign:tt) => {
        impl<T: Element, const R: usize, const S: usize> $assign_op<&Tensor<T, R, S>> for Tensor<T, R, S> {
            fn $assign_method(&mut self, rhs: &Tensor<T, R, S>) {
                self.zip_apply(rhs, &ParallelConfig::default(), |a, b| *a = *a $sign *b);
            }
        }

        impl<T: Element, const R: usize, const S: usize> $assign_op<Tensor<T, R, S>> for Tensor<T, R, S> {
            fn $assign_method(&mut self, rhs: Tensor<T, R, S>) {
                self.$assign_method(&rhs);
            }
        }

        impl<T: Element, const R: usize, const S: usize> $op<&Tensor<T, R, S>> for &Tensor<T, R, S> {
            type Output = Tensor<T, R, S>;

            fn $method(self, rhs: &Tensor<T, R, S>) -> Self::Output {
                let mut result = self.clone();
                result.$assign_method(rhs);
                result
            }
        }

        impl<T: Element, const R: usize, const S: usize> $op<&Tensor<T, R, S>> for Tensor<T, R, S> {
            type Output = Tensor<T, R, S>;

            fn $method(mut self, rhs: &Tensor<T, R, S>) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: Element, const R: usize, const S: usize> $op<Tensor<T, R, S>> for Tensor<T, R, S> {
            type Output = Tensor<T, R, S>;

            fn $method(self, rhs: Tensor<T, R, S>) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<T: Element, const R: usize, const S: usize> $op<Tensor<T, R, S>> for &Tensor<T, R, S> {
            type Output = Tensor<T, R, S>;

            fn $method(self, rhs: Tensor<T, R, S>) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

macro_rules! impl_scalar_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $sign:tt) => {
        impl<T: Element, const R: usize, const S: usize> $assign_op<T> for Tensor<T, R, S> {
            fn $assign_method(&mut self, scalar: T) {
                self.map_apply(&ParallelConfig::default(), |a| *a = *a $sign scalar);
            }
        }

        impl<T: Element, const R: usize, const S: usize> $op<T> for Tensor<T, R, S> {
            type Output = Tensor<T, R, S>;

            fn $method(mut self, scalar: T) -> Self::Output {
                self.$assign_method(scalar);
                self
            }
        }

        impl<T: Element, const R: usize, const S: usize> $op<T> for &Tensor<T, R, S> {
            type Output = Tensor<T, R, S>;

            fn $method(self, scalar: T) -> Self::Output {
                self.clone().$method(scalar)
            }
        }
    };
}

impl_tensor_op!(Add, add, AddAssign, add_assign, +);
impl_tensor_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_op!(Div, div, DivAssign, div_assign, /);
