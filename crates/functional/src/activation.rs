// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Activation functions and clipping.

use num_traits::{Float, One, Zero};
use tensor_core::{Element, FloatElement, Tensor};

use crate::apply_unary_float;

/// Negative-side slope used by [`leaky_relu`] callers that have no
/// preference.
pub const DEFAULT_LEAKY_SLOPE: f64 = 0.01;

/// `x` where `x > 0`, otherwise 0. NaN maps to 0.
pub fn relu<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    let zero = <T::Float as Zero>::zero();
    apply_unary_float(t, move |x| if x > zero { x } else { zero })
}

/// `x` where `x > 0`, otherwise `alpha * x`.
pub fn leaky_relu<T: Element>(t: &Tensor<T>, alpha: f64) -> Tensor<T::Float> {
    let alpha = <T::Float as FloatElement>::from_f64(alpha);
    let zero = <T::Float as Zero>::zero();
    apply_unary_float(t, move |x| if x > zero { x } else { alpha * x })
}

/// Logistic function `1 / (1 + e^-x)`.
pub fn sigmoid<T: Element>(t: &Tensor<T>) -> Tensor<T::Float> {
    let one = <T::Float as One>::one();
    apply_unary_float(t, move |x| one / (one + (-x).exp()))
}

/// Clamps every element into `[min, max]`.
///
/// The upper bound is applied first, so NaN maps to `max`.
pub fn clip<T: Element>(t: &Tensor<T>, min: f64, max: f64) -> Tensor<T::Float> {
    let lo = <T::Float as FloatElement>::from_f64(min);
    let hi = <T::Float as FloatElement>::from_f64(max);
    apply_unary_float(t, move |x| {
        let upper = if x < hi { x } else { hi };
        if lo < upper {
            upper
        } else {
            lo
        }
    })
}
