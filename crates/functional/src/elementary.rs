// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementary functions.

use num_traits::Float;
use tensor_core::{Element, FloatElement, Tensor};

use crate::apply_unary_float;

/// `|x|`.
pub fn abs<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::abs)
}

/// `e^x`.
pub fn exp<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::exp)
}

/// Natural logarithm. `log(0) = -∞`, negative inputs give NaN.
pub fn log<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::ln)
}

/// Square root. Negative inputs give NaN.
pub fn sqrt<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::sqrt)
}

pub fn ceil<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::ceil)
}

pub fn floor<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::floor)
}

/// Rounds half away from zero.
pub fn round<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, Float::round)
}

/// `x²`.
pub fn square<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    apply_unary_float(t, |x| x * x)
}

/// `x^exponent`, with the exponent narrowed to the promoted float type.
pub fn power<T: Element>(t: &Tensor<T>, exponent: f64) -> Tensor<T::Float> {
    let e = <T::Float as FloatElement>::from_f64(exponent);
    apply_unary_float(t, move |x| x.powf(e))
}
