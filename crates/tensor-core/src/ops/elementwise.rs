// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Shape-checked tensor ⊕ tensor arithmetic.

use crate::kernel;
use crate::{Element, Tensor, TensorError};

impl<T: Element> Tensor<T> {
    fn check_same_shape(&self, other: &Tensor<T>, op: &'static str) -> Result<(), TensorError> {
        if self.shape() != other.shape() {
            return Err(TensorError::ShapeMismatch {
                op,
                lhs: self.shape().clone(),
                rhs: other.shape().clone(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Tensor<T>, op: &'static str, f: F) -> Result<Tensor<T>, TensorError>
    where
        F: Fn(T, T) -> T + Sync + Send,
    {
        self.check_same_shape(other, op)?;
        let data = kernel::zip_map(self.as_slice(), other.as_slice(), f);
        Ok(Tensor::from_parts(self.shape().clone(), data))
    }

    fn zip_with_in_place<F>(
        &mut self,
        other: &Tensor<T>,
        op: &'static str,
        f: F,
    ) -> Result<&mut Self, TensorError>
    where
        F: Fn(&mut T, T) + Sync + Send,
    {
        self.check_same_shape(other, op)?;
        kernel::zip_apply(self.as_mut_slice(), other.as_slice(), f);
        Ok(self)
    }

    /// Elementwise sum.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`] unless both shapes are identical.
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
        self.zip_with(other, "add", |a, b| a.wrap_add(b))
    }

    /// Elementwise difference `self - other`.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`] unless both shapes are identical.
    pub fn sub(&self, other: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
        self.zip_with(other, "sub", |a, b| a.wrap_sub(b))
    }

    /// Elementwise (Hadamard) product.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`] unless both shapes are identical.
    pub fn mul(&self, other: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
        self.zip_with(other, "mul", |a, b| a.wrap_mul(b))
    }

    /// Elementwise quotient `self / other`.
    ///
    /// Integer division by zero panics, as it does for the scalar type.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`] unless both shapes are identical.
    pub fn div(&self, other: &Tensor<T>) -> Result<Tensor<T>, TensorError> {
        self.zip_with(other, "div", |a, b| a.wrap_div(b))
    }

    /// In-place `self += other`.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`]; `self` is unchanged on error.
    pub fn add_(&mut self, other: &Tensor<T>) -> Result<&mut Self, TensorError> {
        self.zip_with_in_place(other, "add_", |a, b| *a = a.wrap_add(b))
    }

    /// In-place `self -= other`.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`]; `self` is unchanged on error.
    pub fn sub_(&mut self, other: &Tensor<T>) -> Result<&mut Self, TensorError> {
        self.zip_with_in_place(other, "sub_", |a, b| *a = a.wrap_sub(b))
    }

    /// In-place `self *= other`.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`]; `self` is unchanged on error.
    pub fn mul_(&mut self, other: &Tensor<T>) -> Result<&mut Self, TensorError> {
        self.zip_with_in_place(other, "mul_", |a, b| *a = a.wrap_mul(b))
    }

    /// In-place `self /= other`.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeMismatch`]; `self` is unchanged on error.
    pub fn div_(&mut self, other: &Tensor<T>) -> Result<&mut Self, TensorError> {
        self.zip_with_in_place(other, "div_", |a, b| *a = a.wrap_div(b))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Shape, Tensor, TensorError};

    fn pair() -> (Tensor<f32>, Tensor<f32>) {
        let a = Tensor::from_vec([2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Tensor::from_vec([2, 2], vec![4.0, 3.0, 2.0, 1.0]).unwrap();
        (a, b)
    }

    #[test]
    fn test_binary_ops() {
        let (a, b) = pair();
        assert_eq!(a.add(&b).unwrap().as_slice(), &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-3.0, -1.0, 1.0, 3.0]);
        assert_eq!(a.mul(&b).unwrap().as_slice(), &[4.0, 6.0, 6.0, 4.0]);
        assert_eq!(a.div(&b).unwrap().as_slice(), &[0.25, 2.0 / 3.0, 1.5, 4.0]);
    }

    #[test]
    fn test_operands_untouched() {
        let (a, b) = pair();
        let _ = a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.as_slice(), &[4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let (a, _) = pair();
        let c = Tensor::<f32>::zeros([4]);
        let err = a.add(&c).unwrap_err();
        assert_eq!(
            err,
            TensorError::ShapeMismatch {
                op: "add",
                lhs: Shape::matrix(2, 2),
                rhs: Shape::vector(4),
            }
        );
    }

    #[test]
    fn test_in_place_ops_chain() {
        let (mut a, b) = pair();
        a.add_(&b).unwrap().mul_(&b).unwrap();
        assert_eq!(a.as_slice(), &[20.0, 15.0, 10.0, 5.0]);
        a.sub_(&b).unwrap().div_(&b).unwrap();
        assert_eq!(a.as_slice(), &[4.0, 4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_in_place_failure_leaves_tensor_unchanged() {
        let (mut a, _) = pair();
        let wrong = Tensor::<f32>::ones([2, 3]);
        assert!(a.add_(&wrong).is_err());
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_integer_elementwise() {
        let a = Tensor::from_vec([3], vec![7i32, -8, 9]).unwrap();
        let b = Tensor::from_vec([3], vec![2i32, 2, 2]).unwrap();
        assert_eq!(a.div(&b).unwrap().as_slice(), &[3, -4, 4]);
        assert_eq!(a.mul(&b).unwrap().as_slice(), &[14, -16, 18]);
    }

    #[test]
    fn test_integer_overflow_wraps() {
        let a = Tensor::from_vec([2], vec![200u8, 3]).unwrap();
        assert_eq!(a.add(&a).unwrap().as_slice(), &[144, 6]);
        assert_eq!(a.mul(&a).unwrap().as_slice(), &[64, 9]);

        let z = Tensor::<u8>::zeros([2]);
        assert_eq!(z.sub(&a).unwrap().as_slice(), &[56, 253]);

        let mut m = Tensor::from_vec([1], vec![i16::MIN]).unwrap();
        let neg_one = Tensor::from_vec([1], vec![-1i16]).unwrap();
        m.div_(&neg_one).unwrap();
        assert_eq!(m.as_slice(), &[i16::MIN]);
        m.add_(&neg_one).unwrap();
        assert_eq!(m.as_slice(), &[i16::MAX]);
    }

    #[test]
    fn test_large_tensor_uses_same_semantics() {
        let n = crate::kernel::PARALLEL_THRESHOLD + 3;
        let a = Tensor::full([n], 1.5f64);
        let b = Tensor::full([n], 2.0f64);
        let c = a.mul(&b).unwrap();
        assert_eq!(c.len(), n);
        assert!(c.iter().all(|&x| x == 3.0));
    }
}
