// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # functional
//!
//! Element-by-element floating-point maps over tensors of any element type.
//!
//! Every function promotes its input through [`Element::promote`] first, so
//! the result is always a float tensor: `f32`/`f64` stay as they are, integers
//! up to 32 bits become `f32` and 64-bit integers become `f64`.
//!
//! Functions are total over the float domain. Out-of-domain inputs such as
//! `sqrt(-1)` or `log(0)` produce NaN or ±∞ rather than an error.
//!
//! ```
//! use tensor_core::Tensor;
//! let t = Tensor::from_vec([3], vec![-10, 0, 5]).unwrap();
//! let r = functional::relu(&t);
//! assert_eq!(r.as_slice(), &[0.0f32, 0.0, 5.0]);
//! ```

mod activation;
mod elementary;
mod trig;

pub use activation::{clip, leaky_relu, relu, sigmoid, DEFAULT_LEAKY_SLOPE};
pub use elementary::{abs, ceil, exp, floor, log, power, round, sqrt, square};
pub use trig::{acosh, asinh, atanh, cos, cosh, sin, sinh, tan, tanh};

use tensor_core::{Element, Tensor};

/// Promotes each element to `T::Float` and applies `op`.
///
/// This is the building block behind every function in the crate; use it
/// directly for maps the library does not provide.
pub fn apply_unary_float<T, F>(t: &Tensor<T>, op: F) -> Tensor<T::Float>
where
    T: Element,
    F: Fn(T::Float) -> T::Float + Sync + Send,
{
    t.map(|x| op(x.promote()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_unary_float_promotes_integers() {
        let t = Tensor::from_vec([2], vec![3u16, 4]).unwrap();
        let r: Tensor<f32> = apply_unary_float(&t, |x| x * 0.5);
        assert_eq!(r.as_slice(), &[1.5, 2.0]);
        assert_eq!(r.shape(), t.shape());
    }

    #[test]
    fn test_apply_unary_float_wide_integers_go_to_f64() {
        let t = Tensor::from_vec([1], vec![1i64 << 40]).unwrap();
        let r: Tensor<f64> = apply_unary_float(&t, |x| x + 0.5);
        assert_eq!(r.as_slice(), &[(1i64 << 40) as f64 + 0.5]);
    }
}
