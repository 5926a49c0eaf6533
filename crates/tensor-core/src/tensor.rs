// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor type.

use crate::kernel;
use crate::{DType, Element, Shape, TensorError, TensorView, TensorViewMut};

/// An owned, n-dimensional tensor stored in contiguous memory.
///
/// `Tensor` owns its element buffer and exposes borrowed cursors via
/// [`view`](Tensor::view) and [`view_mut`](Tensor::view_mut).
///
/// # Memory Layout
/// Elements are stored in row-major (C) order as a flat `Vec<T>`. The buffer
/// length always equals `shape.num_elements()`, and `strides` is recomputed
/// from `shape` every time the shape changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    shape: Shape,
    strides: Vec<usize>,
    data: Vec<T>,
}

impl<T: Element> Tensor<T> {
    /// Creates a tensor from an owned flat buffer in row-major order.
    ///
    /// # Errors
    /// Returns [`TensorError::ShapeOverflow`] if the extents multiply past
    /// `usize::MAX`, and [`TensorError::DataLengthMismatch`] if `data.len()`
    /// differs from the number of elements the shape describes.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::Tensor;
    /// let t = Tensor::from_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(t.strides(), &[3, 1]);
    /// ```
    pub fn from_vec(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self, TensorError> {
        let shape = shape.into();
        let Some(expected) = shape.checked_num_elements() else {
            return Err(TensorError::ShapeOverflow { shape });
        };
        if data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Creates a tensor by copying a flat slice in row-major order.
    ///
    /// # Errors
    /// Returns [`TensorError::DataLengthMismatch`] on a length mismatch.
    pub fn from_slice(shape: impl Into<Shape>, values: &[T]) -> Result<Self, TensorError> {
        Self::from_vec(shape, values.to_vec())
    }

    /// Creates a tensor with every element set to `value`.
    ///
    /// # Panics
    /// Panics like `vec!` does if the buffer cannot be allocated, which
    /// includes shapes whose element count overflows `usize`.
    pub fn full(shape: impl Into<Shape>, value: T) -> Self {
        let shape = shape.into();
        let data = vec![value; shape.num_elements()];
        Self::from_parts(shape, data)
    }

    /// Creates a new tensor filled with zeros.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Tensor, Shape};
    /// let t = Tensor::<f32>::zeros(Shape::matrix(2, 3));
    /// assert_eq!(t.size_bytes(), 24);
    /// ```
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::zero())
    }

    /// Creates a new tensor filled with ones.
    pub fn ones(shape: impl Into<Shape>) -> Self {
        Self::full(shape, T::one())
    }

    /// Creates a rank-0 tensor holding a single value.
    pub fn scalar(value: T) -> Self {
        Self::from_parts(Shape::scalar(), vec![value])
    }

    /// Assembles a tensor whose buffer is already known to match `shape`.
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), shape.num_elements());
        let strides = shape.strides();
        Self {
            shape,
            strides,
            data,
        }
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the row-major strides derived from the shape.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the number of axes.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no elements (some extent is zero).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Returns the memory footprint of the element buffer in bytes.
    pub fn size_bytes(&self) -> usize {
        self.shape.size_bytes(T::DTYPE)
    }

    /// Returns the flat buffer in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the flat buffer mutably.
    ///
    /// The length cannot change through this slice, so the shape invariant
    /// holds.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the tensor and returns its flat buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates over elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Reads an element by its linear (flattened) position.
    pub fn get_flat(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        kernel::apply(&mut self.data, |x| *x = value);
    }

    /// Returns a read cursor positioned at the root of this tensor.
    pub fn view(&self) -> TensorView<'_, T> {
        TensorView::new(&self.data, self.shape.dims(), &self.strides)
    }

    /// Returns a write cursor positioned at the root of this tensor.
    pub fn view_mut(&mut self) -> TensorViewMut<'_, T> {
        TensorViewMut::new(&mut self.data, self.shape.dims(), &self.strides)
    }

    /// Reads the element at a full multi-index.
    ///
    /// Walks the same cursor path as chained indexing, so every step is
    /// bounds-checked.
    ///
    /// # Errors
    /// Returns [`TensorError::IndexOutOfRange`] for an out-of-range step and
    /// [`TensorError::RankMismatch`] if `index` is shorter than the rank.
    pub fn at(&self, index: &[usize]) -> Result<T, TensorError> {
        let mut cursor = self.view();
        for &i in index {
            cursor = cursor.index(i)?;
        }
        cursor.get()
    }

    /// Writes the element at a full multi-index.
    ///
    /// # Errors
    /// Same as [`at`](Tensor::at).
    pub fn set_at(&mut self, index: &[usize], value: T) -> Result<(), TensorError> {
        let mut cursor = self.view_mut();
        for &i in index {
            cursor = cursor.index(i)?;
        }
        cursor.set(value)
    }

    /// Returns a copy holding the same flattened elements under `new_shape`.
    ///
    /// The input is left untouched; the result owns its own buffer.
    ///
    /// # Errors
    /// Returns [`TensorError::VolumeMismatch`] if the element counts differ.
    pub fn reshape(&self, new_shape: impl Into<Shape>) -> Result<Tensor<T>, TensorError> {
        let new_shape = new_shape.into();
        self.check_volume(&new_shape)?;
        Ok(Self::from_parts(new_shape, self.data.clone()))
    }

    /// Consuming reshape that reuses the existing buffer.
    ///
    /// # Errors
    /// Returns [`TensorError::VolumeMismatch`] if the element counts differ.
    pub fn into_reshaped(mut self, new_shape: impl Into<Shape>) -> Result<Tensor<T>, TensorError> {
        let new_shape = new_shape.into();
        self.check_volume(&new_shape)?;
        self.strides = new_shape.strides();
        self.shape = new_shape;
        Ok(self)
    }

    fn check_volume(&self, new_shape: &Shape) -> Result<(), TensorError> {
        let from_volume = self.shape.num_elements();
        let to_volume = new_shape.num_elements();
        if from_volume != to_volume {
            return Err(TensorError::VolumeMismatch {
                from: self.shape.clone(),
                to: new_shape.clone(),
                from_volume,
                to_volume,
            });
        }
        tracing::trace!(from = %self.shape, to = %new_shape, "reshape");
        Ok(())
    }

    /// Fails with [`TensorError::RankMismatch`] unless the tensor has rank
    /// `expected`.
    pub fn ensure_rank(&self, op: &'static str, expected: usize) -> Result<(), TensorError> {
        if self.rank() != expected {
            return Err(TensorError::RankMismatch {
                op,
                expected,
                actual: self.rank(),
            });
        }
        Ok(())
    }

    /// Applies `f` to every element, producing a tensor of the same shape.
    ///
    /// Large buffers are split across the rayon pool; see
    /// [`kernel::PARALLEL_THRESHOLD`].
    pub fn map<U, F>(&self, f: F) -> Tensor<U>
    where
        U: Element,
        F: Fn(T) -> U + Sync + Send,
    {
        Tensor::from_parts(self.shape.clone(), kernel::map(&self.data, f))
    }
}

impl<'a, T: Element> IntoIterator for &'a Tensor<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
