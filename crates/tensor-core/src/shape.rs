// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Axis extents and row-major stride derivation.

use std::fmt;

/// The extent of every axis of a [`crate::Tensor`], outermost first.
///
/// A shape never carries strides; tensors derive them with
/// [`Shape::strides`] whenever their shape changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// # Examples
    /// ```
    /// use tensor_core::Shape;
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements(), 24);
    /// assert_eq!(s.strides(), vec![12, 4, 1]);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Rank 0: no axes, exactly one element.
    pub fn scalar() -> Self {
        Self::new(Vec::new())
    }

    pub fn vector(len: usize) -> Self {
        Self::new(vec![len])
    }

    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self::new(vec![rows, cols])
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Product of the extents, or `None` if it does not fit in `usize`.
    ///
    /// Any zero extent makes the product zero, however large the others are.
    pub fn checked_num_elements(&self) -> Option<usize> {
        if self.dims.contains(&0) {
            return Some(0);
        }
        self.dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Product of the extents (1 for rank 0), saturating at `usize::MAX`.
    ///
    /// Every shape held by a tensor has a representable product, so for
    /// those this is exact.
    pub fn num_elements(&self) -> usize {
        self.checked_num_elements().unwrap_or(usize::MAX)
    }

    /// Bytes needed to store this shape as `dtype`, saturating.
    pub fn size_bytes(&self, dtype: super::DType) -> usize {
        self.num_elements().saturating_mul(dtype.size_bytes())
    }

    /// Row-major strides: `strides[rank - 1] = 1` and
    /// `strides[i] = strides[i + 1] * dims[i + 1]`.
    ///
    /// Saturates instead of overflowing; a saturated stride can only sit in
    /// front of a zero extent, where it is never used to address memory.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.dims.len()];
        for i in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1].saturating_mul(self.dims[i + 1]);
        }
        strides
    }

    /// `(rows, cols)` if this is a rank-2 shape.
    pub fn as_matrix(&self) -> Option<(usize, usize)> {
        match self.dims.as_slice() {
            &[rows, cols] => Some((rows, cols)),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{d}")?;
        }
        f.write_str("]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl From<&Shape> for Shape {
    fn from(shape: &Shape) -> Self {
        shape.clone()
    }
}
