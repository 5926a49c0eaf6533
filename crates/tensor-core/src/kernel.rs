// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Flat-buffer kernels shared by the elementwise, scalar and map operations.
//!
//! Every kernel here treats its inputs as contiguous row-major buffers and
//! touches each position independently of every other, so buffers of at least
//! [`PARALLEL_THRESHOLD`] elements are split across the rayon pool. Smaller
//! buffers stay on the calling thread, where a plain loop is faster than the
//! work-stealing handshake. Both paths produce identical results.

use rayon::prelude::*;

/// Minimum number of elements before a kernel switches to rayon.
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// `out[i] = f(src[i])`.
pub fn map<T, U, F>(src: &[T], f: F) -> Vec<U>
where
    T: Copy + Sync,
    U: Send,
    F: Fn(T) -> U + Sync + Send,
{
    if src.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(len = src.len(), "map: parallel path");
        src.par_iter().map(|&x| f(x)).collect()
    } else {
        src.iter().map(|&x| f(x)).collect()
    }
}

/// `out[i] = f(lhs[i], rhs[i])`. Callers guarantee equal lengths.
pub fn zip_map<T, U, F>(lhs: &[T], rhs: &[T], f: F) -> Vec<U>
where
    T: Copy + Sync,
    U: Send,
    F: Fn(T, T) -> U + Sync + Send,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    if lhs.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(len = lhs.len(), "zip_map: parallel path");
        lhs.par_iter()
            .zip(rhs.par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    } else {
        lhs.iter().zip(rhs.iter()).map(|(&a, &b)| f(a, b)).collect()
    }
}

/// `f(&mut dst[i], src[i])` in place. Callers guarantee equal lengths.
pub fn zip_apply<T, F>(dst: &mut [T], src: &[T], f: F)
where
    T: Copy + Send + Sync,
    F: Fn(&mut T, T) + Sync + Send,
{
    debug_assert_eq!(dst.len(), src.len());
    if dst.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(len = dst.len(), "zip_apply: parallel path");
        dst.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(d, &s)| f(d, s));
    } else {
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            f(d, s);
        }
    }
}

/// `f(&mut dst[i])` in place.
pub fn apply<T, F>(dst: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    if dst.len() >= PARALLEL_THRESHOLD {
        tracing::trace!(len = dst.len(), "apply: parallel path");
        dst.par_iter_mut().for_each(|d| f(d));
    } else {
        dst.iter_mut().for_each(f);
    }
}
