// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Borrowed index cursors over a [`crate::Tensor`].
//!
//! A cursor is the owner's element slice plus a linear offset and the
//! *remaining* shape/stride suffix. Each [`index`](TensorView::index) step
//! drops one axis:
//!
//! ```text
//! offset' = offset + i * strides[0]
//! shape'  = shape[1..]
//! strides'= strides[1..]
//! ```
//!
//! Once the suffix is empty (`dims_left() == 0`) the cursor addresses exactly
//! one element. Because only leading axes are ever dropped from a row-major
//! layout, the region a cursor addresses is always the contiguous range
//! `offset .. offset + product(shape)`.
//!
//! Cursors never own memory. Their lifetime is tied to the tensor they were
//! taken from, so the borrow checker rules out dangling views, and a
//! [`TensorViewMut`] is exclusive for as long as it lives.

use crate::{Element, Tensor, TensorError};

/// Validates one index step and returns the offset increment.
fn step(shape: &[usize], strides: &[usize], depth: usize, index: usize) -> Result<usize, TensorError> {
    match shape.first() {
        Some(&extent) if index < extent => Ok(index * strides[0]),
        Some(&extent) => Err(TensorError::IndexOutOfRange {
            index,
            depth,
            extent,
        }),
        None => Err(TensorError::IndexOutOfRange {
            index,
            depth,
            extent: 0,
        }),
    }
}

/// A read-only cursor into a tensor.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a, T> {
    data: &'a [T],
    shape: &'a [usize],
    strides: &'a [usize],
    offset: usize,
    depth: usize,
}

impl<'a, T: Element> TensorView<'a, T> {
    pub(crate) fn new(data: &'a [T], shape: &'a [usize], strides: &'a [usize]) -> Self {
        Self {
            data,
            shape,
            strides,
            offset: 0,
            depth: 0,
        }
    }

    /// Advances the cursor along the leading remaining axis.
    ///
    /// # Errors
    /// Returns [`TensorError::IndexOutOfRange`] if `index` is not below the
    /// axis extent, or if no axis remains.
    pub fn index(&self, index: usize) -> Result<TensorView<'a, T>, TensorError> {
        let delta = step(self.shape, self.strides, self.depth, index)?;
        let (shape, strides) = (self.shape, self.strides);
        Ok(TensorView {
            data: self.data,
            shape: &shape[1..],
            strides: &strides[1..],
            offset: self.offset + delta,
            depth: self.depth + 1,
        })
    }

    /// Reads the addressed element.
    ///
    /// # Errors
    /// Returns [`TensorError::RankMismatch`] while axes remain.
    pub fn get(&self) -> Result<T, TensorError> {
        if !self.shape.is_empty() {
            return Err(TensorError::RankMismatch {
                op: "view get",
                expected: 0,
                actual: self.shape.len(),
            });
        }
        Ok(self.data[self.offset])
    }

    /// Number of axes left below this cursor.
    pub fn dims_left(&self) -> usize {
        self.shape.len()
    }

    /// How many index steps were taken from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Remaining shape suffix.
    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    /// Remaining stride suffix.
    pub fn strides(&self) -> &'a [usize] {
        self.strides
    }

    /// Linear offset of the first addressed element in the owner's buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of elements the cursor addresses.
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }

    /// The addressed region of the owner's buffer.
    pub fn as_slice(&self) -> &'a [T] {
        &self.data[self.offset..self.offset + self.num_elements()]
    }

    /// Copies the addressed region into a new tensor of the remaining shape.
    pub fn to_tensor(&self) -> Tensor<T> {
        Tensor::from_parts(self.shape.to_vec().into(), self.as_slice().to_vec())
    }
}

/// A mutable cursor into a tensor.
///
/// [`index`](TensorViewMut::index) consumes the cursor so a chain like
/// `t.view_mut().index(1)?.index(2)?.set(v)?` hands the exclusive borrow down
/// the chain. Use [`reborrow`](TensorViewMut::reborrow) to keep the parent.
#[derive(Debug)]
pub struct TensorViewMut<'a, T> {
    data: &'a mut [T],
    shape: &'a [usize],
    strides: &'a [usize],
    offset: usize,
    depth: usize,
}

impl<'a, T: Element> TensorViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], shape: &'a [usize], strides: &'a [usize]) -> Self {
        Self {
            data,
            shape,
            strides,
            offset: 0,
            depth: 0,
        }
    }

    /// Advances the cursor along the leading remaining axis.
    ///
    /// # Errors
    /// Returns [`TensorError::IndexOutOfRange`] if `index` is not below the
    /// axis extent, or if no axis remains.
    pub fn index(self, index: usize) -> Result<TensorViewMut<'a, T>, TensorError> {
        let delta = step(self.shape, self.strides, self.depth, index)?;
        let (shape, strides) = (self.shape, self.strides);
        Ok(TensorViewMut {
            data: self.data,
            shape: &shape[1..],
            strides: &strides[1..],
            offset: self.offset + delta,
            depth: self.depth + 1,
        })
    }

    /// Borrows a shorter-lived cursor at the same position.
    pub fn reborrow(&mut self) -> TensorViewMut<'_, T> {
        TensorViewMut {
            data: &mut *self.data,
            shape: self.shape,
            strides: self.strides,
            offset: self.offset,
            depth: self.depth,
        }
    }

    /// A read-only cursor at the same position.
    pub fn as_view(&self) -> TensorView<'_, T> {
        TensorView {
            data: &*self.data,
            shape: self.shape,
            strides: self.strides,
            offset: self.offset,
            depth: self.depth,
        }
    }

    /// Reads the addressed element.
    ///
    /// # Errors
    /// Returns [`TensorError::RankMismatch`] while axes remain.
    pub fn get(&self) -> Result<T, TensorError> {
        self.as_view().get()
    }

    /// Writes `value` through to the owner's storage.
    ///
    /// # Errors
    /// Returns [`TensorError::RankMismatch`] while axes remain.
    pub fn set(&mut self, value: T) -> Result<(), TensorError> {
        if !self.shape.is_empty() {
            return Err(TensorError::RankMismatch {
                op: "view set",
                expected: 0,
                actual: self.shape.len(),
            });
        }
        self.data[self.offset] = value;
        Ok(())
    }

    /// Copies `src` element by element into the addressed region.
    ///
    /// Only the element counts must agree; `src` is read in row-major order.
    ///
    /// # Errors
    /// Returns [`TensorError::ViewSizeMismatch`] if the counts differ. Nothing
    /// is written in that case.
    pub fn assign(&mut self, src: &TensorView<'_, T>) -> Result<(), TensorError> {
        let expected = self.num_elements();
        let actual = src.num_elements();
        if expected != actual {
            return Err(TensorError::ViewSizeMismatch { expected, actual });
        }
        self.as_mut_slice().copy_from_slice(src.as_slice());
        Ok(())
    }

    /// Replaces the addressed region with the contents of `src`.
    ///
    /// # Errors
    /// Returns [`TensorError::ViewSizeMismatch`] if the counts differ.
    pub fn assign_tensor(&mut self, src: &Tensor<T>) -> Result<(), TensorError> {
        self.assign(&src.view())
    }

    /// Sets every addressed element to `value`.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }

    /// Number of axes left below this cursor.
    pub fn dims_left(&self) -> usize {
        self.shape.len()
    }

    /// How many index steps were taken from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of elements the cursor addresses.
    pub fn num_elements(&self) -> usize {
        self.shape.iter().product()
    }

    /// The addressed region of the owner's buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let end = self.offset + self.num_elements();
        &mut self.data[self.offset..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tensor<i32> {
        // [[[0 1 2] [3 4 5]] [[6 7 8] [9 10 11]]]
        Tensor::from_vec([2, 2, 3], (0..12).collect()).unwrap()
    }

    #[test]
    fn test_index_chain_reads() {
        let t = sample();
        let v = t.view();
        assert_eq!(v.dims_left(), 3);
        let row = v.index(1).unwrap().index(0).unwrap();
        assert_eq!(row.dims_left(), 1);
        assert_eq!(row.offset(), 6);
        assert_eq!(row.as_slice(), &[6, 7, 8]);
        assert_eq!(row.index(2).unwrap().get().unwrap(), 8);
    }

    #[test]
    fn test_offsets_follow_strides() {
        let t = sample();
        let leaf = t.view().index(1).unwrap().index(1).unwrap().index(2).unwrap();
        assert_eq!(leaf.offset(), 12 + 3 + 2);
        assert_eq!(leaf.depth(), 3);
        assert_eq!(leaf.get().unwrap(), 11);
    }

    #[test]
    fn test_out_of_range_index() {
        let t = sample();
        let err = t.view().index(0).unwrap().index(2).unwrap_err();
        assert_eq!(
            err,
            TensorError::IndexOutOfRange {
                index: 2,
                depth: 1,
                extent: 2
            }
        );
    }

    #[test]
    fn test_index_past_terminal_element() {
        let t = Tensor::from_vec([2], vec![1.0f32, 2.0]).unwrap();
        let leaf = t.view().index(1).unwrap();
        assert!(matches!(
            leaf.index(0),
            Err(TensorError::IndexOutOfRange { extent: 0, depth: 1, .. })
        ));
    }

    #[test]
    fn test_rank_zero_indexing_fails() {
        let t = Tensor::scalar(5i32);
        assert!(matches!(
            t.view().index(0),
            Err(TensorError::IndexOutOfRange {
                index: 0,
                depth: 0,
                extent: 0
            })
        ));
        let mut m = Tensor::scalar(5i32);
        assert!(m.view_mut().index(0).is_err());
    }

    #[test]
    fn test_get_on_non_terminal_cursor() {
        let t = sample();
        assert!(matches!(
            t.view().index(0).unwrap().get(),
            Err(TensorError::RankMismatch { expected: 0, actual: 2, .. })
        ));
    }

    #[test]
    fn test_scalar_write_through() {
        let mut t = sample();
        t.view_mut().index(0).unwrap().index(1).unwrap().index(1).unwrap().set(-4).unwrap();
        assert_eq!(t.at(&[0, 1, 1]).unwrap(), -4);
        assert_eq!(t.as_slice()[4], -4);
    }

    #[test]
    fn test_set_on_non_terminal_cursor() {
        let mut t = sample();
        let mut row = t.view_mut().index(0).unwrap();
        assert!(matches!(row.set(1), Err(TensorError::RankMismatch { .. })));
    }

    #[test]
    fn test_subregion_assignment() {
        let mut t = sample();
        let patch = Tensor::from_vec([2, 3], vec![-1, -2, -3, -4, -5, -6]).unwrap();
        t.view_mut().index(1).unwrap().assign_tensor(&patch).unwrap();
        assert_eq!(&t.as_slice()[..6], &[0, 1, 2, 3, 4, 5]);
        assert_eq!(&t.as_slice()[6..], &[-1, -2, -3, -4, -5, -6]);
    }

    #[test]
    fn test_view_to_view_copy_between_tensors() {
        let src = Tensor::from_vec([3, 2], vec![10, 20, 30, 40, 50, 60]).unwrap();
        let mut dst = sample();
        let from = src.view().index(2).unwrap();
        dst.view_mut()
            .index(0)
            .unwrap()
            .index(0)
            .unwrap()
            .index(1)
            .unwrap()
            .assign(&src.view().index(0).unwrap().index(1).unwrap())
            .unwrap();
        assert_eq!(dst.at(&[0, 0, 1]).unwrap(), 20);

        let mut row = dst.view_mut().index(1).unwrap().index(1).unwrap();
        assert_eq!(
            row.assign(&from),
            Err(TensorError::ViewSizeMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(row.as_view().as_slice(), &[9, 10, 11]);
    }

    #[test]
    fn test_assign_across_shapes_with_equal_count() {
        let mut t = Tensor::<f64>::zeros([2, 4]);
        let src = Tensor::from_vec([2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        t.view_mut().index(1).unwrap().assign_tensor(&src).unwrap();
        assert_eq!(t.as_slice(), &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_reborrow_keeps_parent() {
        let mut t = Tensor::<u8>::zeros([2, 2]);
        let mut row = t.view_mut().index(1).unwrap();
        row.reborrow().index(0).unwrap().set(3).unwrap();
        row.reborrow().index(1).unwrap().set(4).unwrap();
        assert_eq!(row.as_view().as_slice(), &[3, 4]);
        row.fill(9);
        assert_eq!(t.as_slice(), &[0, 0, 9, 9]);
    }

    #[test]
    fn test_to_tensor_materializes_subregion() {
        let t = sample();
        let sub = t.view().index(1).unwrap().to_tensor();
        assert_eq!(sub.shape().dims(), &[2, 3]);
        assert_eq!(sub.as_slice(), &[6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_many_read_views_coexist() {
        let t = sample();
        let a = t.view().index(0).unwrap();
        let b = t.view().index(1).unwrap();
        assert_eq!(a.num_elements(), b.num_elements());
        assert_ne!(a.offset(), b.offset());
    }
}
