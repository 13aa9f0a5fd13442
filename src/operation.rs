//! Element-wise arithmetic.
//!
//! Tensor-tensor operations require identical shapes (no broadcasting) and
//! return [`TensorError::ShapeMismatch`] otherwise. Tensor-scalar operations
//! cannot fail. Operands are never modified; every result is a new tensor.
//! Division follows IEEE-754, so dividing by zero yields `inf` or `NaN`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use ndarray::Zip;

use crate::error::{TensorError, TensorResult};
use crate::tensor::Tensor;

impl Tensor {
    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Tensor {
        let data = self.data().iter().map(|&x| f(x)).collect();
        Tensor::from_parts(self.shape().to_vec(), data)
    }

    /// Combine corresponding elements of two equally shaped tensors.
    pub fn zip_map(
        &self,
        other: &Tensor,
        op: &'static str,
        f: impl Fn(f32, f32) -> f32,
    ) -> TensorResult<Tensor> {
        if self.shape() != other.shape() {
            log::debug!(
                "rejected '{}' on shapes {:?} and {:?}",
                op,
                self.shape(),
                other.shape()
            );
            return Err(TensorError::ShapeMismatch {
                op,
                lhs: self.shape().to_vec(),
                rhs: other.shape().to_vec(),
            });
        }

        let (lhs, rhs) = (self.view()?, other.view()?);
        let out = Zip::from(&lhs).and(&rhs).map_collect(|&a, &b| f(a, b));
        Ok(Tensor::from(&out))
    }

    pub fn add(&self, other: &Tensor) -> TensorResult<Tensor> {
        self.zip_map(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Tensor) -> TensorResult<Tensor> {
        self.zip_map(other, "sub", |a, b| a - b)
    }

    pub fn mul(&self, other: &Tensor) -> TensorResult<Tensor> {
        self.zip_map(other, "mul", |a, b| a * b)
    }

    pub fn div(&self, other: &Tensor) -> TensorResult<Tensor> {
        self.zip_map(other, "div", |a, b| a / b)
    }

    pub fn add_scalar(&self, scalar: f32) -> Tensor {
        self.map(|x| x + scalar)
    }

    pub fn sub_scalar(&self, scalar: f32) -> Tensor {
        self.map(|x| x - scalar)
    }

    pub fn mul_scalar(&self, scalar: f32) -> Tensor {
        self.map(|x| x * scalar)
    }

    pub fn div_scalar(&self, scalar: f32) -> Tensor {
        self.map(|x| x / scalar)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $scalar_method:ident) => {
        impl $trait<&Tensor> for &Tensor {
            type Output = TensorResult<Tensor>;

            fn $method(self, rhs: &Tensor) -> TensorResult<Tensor> {
                Tensor::$method(self, rhs)
            }
        }

        impl $trait<f32> for &Tensor {
            type Output = Tensor;

            fn $method(self, rhs: f32) -> Tensor {
                self.$scalar_method(rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_scalar);
impl_binary_op!(Sub, sub, sub_scalar);
impl_binary_op!(Mul, mul, mul_scalar);
impl_binary_op!(Div, div, div_scalar);

impl Neg for &Tensor {
    type Output = Tensor;

    fn neg(self) -> Tensor {
        self.map(|x| -x)
    }
}
