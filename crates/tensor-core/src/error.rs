// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor operations.

use crate::Shape;

/// Errors that can occur during tensor construction, indexing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TensorError {
    /// The flat initializer does not hold exactly `product(shape)` elements.
    #[error("data length mismatch: shape {shape} needs {expected} elements, got {actual}")]
    DataLengthMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },

    /// The shape describes more elements than `usize` can count.
    #[error("shape {shape} has more elements than fit in usize")]
    ShapeOverflow { shape: Shape },

    /// A reshape target does not preserve the element count.
    #[error("cannot reshape {from} ({from_volume} elements) into {to} ({to_volume} elements)")]
    VolumeMismatch {
        from: Shape,
        to: Shape,
        from_volume: usize,
        to_volume: usize,
    },

    /// Two tensors have different shapes for an elementwise operation.
    #[error("incompatible shapes for {op}: {lhs} vs {rhs}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// A bulk view assignment between regions of different element counts.
    #[error("view size mismatch: destination addresses {expected} elements, source has {actual}")]
    ViewSizeMismatch { expected: usize, actual: usize },

    /// The operation needs a tensor (or cursor) of a specific rank.
    #[error("{op} requires rank {expected}, got rank {actual}")]
    RankMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Two vectors have different lengths.
    #[error("{op} requires equal lengths: {lhs} vs {rhs}")]
    LengthMismatch {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },

    /// A reduction was asked of a tensor with no elements.
    #[error("cannot compute {op} of an empty tensor")]
    EmptyTensor { op: &'static str },

    /// An index step fell outside the current axis.
    ///
    /// `extent` is the length of the axis being indexed; it is `0` when no
    /// axis remains (rank-0 tensors and exhausted index chains).
    #[error("index {index} out of range at depth {depth} (axis extent {extent})")]
    IndexOutOfRange {
        index: usize,
        depth: usize,
        extent: usize,
    },
}
