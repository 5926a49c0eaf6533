// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Whole-tensor reductions and the vector dot product.
//!
//! Reductions run as a single serial scan so the accumulation order, and with
//! it the floating-point result, is deterministic.

use crate::{Element, Tensor, TensorError};

impl<T: Element> Tensor<T> {
    fn ensure_non_empty(&self, op: &'static str) -> Result<(), TensorError> {
        if self.is_empty() {
            return Err(TensorError::EmptyTensor { op });
        }
        Ok(())
    }

    /// Sum of all elements, accumulated in `T`.
    ///
    /// The accumulator is never widened: integer overflow wraps.
    ///
    /// # Errors
    /// Returns [`TensorError::EmptyTensor`] for a tensor with no elements.
    pub fn sum(&self) -> Result<T, TensorError> {
        self.ensure_non_empty("sum")?;
        Ok(self.iter().fold(T::zero(), |acc, &x| acc.wrap_add(x)))
    }

    /// Arithmetic mean: the `T` sum converted to `f64`, divided by the count.
    ///
    /// # Errors
    /// Returns [`TensorError::EmptyTensor`] for a tensor with no elements.
    pub fn mean(&self) -> Result<f64, TensorError> {
        self.ensure_non_empty("mean")?;
        let total = self.sum()?;
        Ok(total.as_f64() / self.len() as f64)
    }

    /// Largest element. Ties resolve to the first occurrence.
    ///
    /// # Errors
    /// Returns [`TensorError::EmptyTensor`] for a tensor with no elements.
    pub fn max(&self) -> Result<T, TensorError> {
        self.ensure_non_empty("max")?;
        Ok(self.scan_extreme(|candidate, best| candidate > best))
    }

    /// Smallest element. Ties resolve to the first occurrence.
    ///
    /// # Errors
    /// Returns [`TensorError::EmptyTensor`] for a tensor with no elements.
    pub fn min(&self) -> Result<T, TensorError> {
        self.ensure_non_empty("min")?;
        Ok(self.scan_extreme(|candidate, best| candidate < best))
    }

    /// Linear scan that only replaces the running best on a strict win.
    fn scan_extreme(&self, wins: impl Fn(T, T) -> bool) -> T {
        let slice = self.as_slice();
        let mut best = slice[0];
        for &x in &slice[1..] {
            if wins(x, best) {
                best = x;
            }
        }
        best
    }

    /// Dot product of two rank-1 tensors, accumulated and returned in `T`.
    ///
    /// # Errors
    /// Returns [`TensorError::RankMismatch`] unless both operands are rank 1,
    /// and [`TensorError::LengthMismatch`] if their lengths differ.
    pub fn dot(&self, other: &Tensor<T>) -> Result<T, TensorError> {
        self.ensure_rank("dot", 1)?;
        other.ensure_rank("dot", 1)?;
        if self.len() != other.len() {
            return Err(TensorError::LengthMismatch {
                op: "dot",
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.wrap_add(a.wrap_mul(b))))
    }
}

/// Free-function form of [`Tensor::dot`].
///
/// # Examples
/// ```
/// use tensor_core::{dot, Tensor};
/// let a = Tensor::from_vec([3], vec![1, 2, 3]).unwrap();
/// let b = Tensor::from_vec([3], vec![4, 5, 6]).unwrap();
/// let r: i32 = dot(&a, &b).unwrap();
/// assert_eq!(r, 32);
/// ```
pub fn dot<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> Result<T, TensorError> {
    a.dot(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_mean() {
        let t = Tensor::from_vec([3], vec![1.5f32, 2.5, 3.5]).unwrap();
        assert_eq!(t.sum().unwrap(), 7.5);
        assert!((t.mean().unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_integer_sum_stays_integer() {
        let t = Tensor::from_vec([2, 2], vec![1i32, 2, 3, 4]).unwrap();
        let s: i32 = t.sum().unwrap();
        assert_eq!(s, 10);
        assert_eq!(t.mean().unwrap(), 2.5);
    }

    #[test]
    fn test_narrow_integer_sum_wraps() {
        let t = Tensor::from_vec([2], vec![100i8, 100]).unwrap();
        assert_eq!(t.sum().unwrap(), -56);
        let u = Tensor::from_vec([3], vec![u8::MAX, 1, 1]).unwrap();
        assert_eq!(u.sum().unwrap(), 1);
    }

    #[test]
    fn test_max_min() {
        let t = Tensor::from_vec([5], vec![3, -1, 7, 7, -1]).unwrap();
        assert_eq!(t.max().unwrap(), 7);
        assert_eq!(t.min().unwrap(), -1);
    }

    #[test]
    fn test_extreme_ties_keep_first_occurrence() {
        // -0.0 == 0.0, so the first of the tied pair must be returned.
        let t = Tensor::from_vec([3], vec![-0.0f64, 0.0, -5.0]).unwrap();
        assert!(t.max().unwrap().is_sign_negative());
        let u = Tensor::from_vec([3], vec![0.0f64, -0.0, 5.0]).unwrap();
        assert!(u.min().unwrap().is_sign_positive());
    }

    #[test]
    fn test_reductions_on_empty_tensor() {
        let t = Tensor::<f32>::zeros([0]);
        assert!(matches!(t.sum(), Err(TensorError::EmptyTensor { op: "sum" })));
        assert!(matches!(t.mean(), Err(TensorError::EmptyTensor { op: "mean" })));
        assert!(matches!(t.max(), Err(TensorError::EmptyTensor { op: "max" })));
        assert!(matches!(t.min(), Err(TensorError::EmptyTensor { op: "min" })));
    }

    #[test]
    fn test_scalar_tensor_reduces_to_itself() {
        let t = Tensor::scalar(9u8);
        assert_eq!(t.sum().unwrap(), 9);
        assert_eq!(t.max().unwrap(), 9);
    }

    #[test]
    fn test_dot_integer() {
        let a = Tensor::from_vec([3], vec![1, 2, 3]).unwrap();
        let b = Tensor::from_vec([3], vec![4, 5, 6]).unwrap();
        let r: i32 = dot(&a, &b).unwrap();
        assert_eq!(r, 32);
    }

    #[test]
    fn test_dot_double_keeps_precision() {
        let a = Tensor::from_vec([3], vec![1.5f64, 2.5, 3.5]).unwrap();
        let b = Tensor::from_vec([3], vec![2.0f64, 3.0, 4.0]).unwrap();
        let r: f64 = a.dot(&b).unwrap();
        assert!((r - 24.5).abs() < 1e-10);
    }

    #[test]
    fn test_dot_rank_and_length_checks() {
        let m = Tensor::<f32>::zeros([2, 2]);
        let v = Tensor::<f32>::zeros([4]);
        let w = Tensor::<f32>::zeros([3]);
        assert!(matches!(
            m.dot(&v),
            Err(TensorError::RankMismatch { op: "dot", expected: 1, actual: 2 })
        ));
        assert!(matches!(v.dot(&m), Err(TensorError::RankMismatch { .. })));
        assert!(matches!(
            v.dot(&w),
            Err(TensorError::LengthMismatch { op: "dot", lhs: 4, rhs: 3 })
        ));
    }

    #[test]
    fn test_dot_wraps_in_element_type() {
        let a = Tensor::from_vec([2], vec![16u8, 16]).unwrap();
        assert_eq!(a.dot(&a).unwrap(), 0);
    }

    #[test]
    fn test_dot_of_empty_vectors_is_zero() {
        let a = Tensor::<i64>::zeros([0]);
        assert_eq!(a.dot(&a).unwrap(), 0);
    }
}
