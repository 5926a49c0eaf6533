// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Depth-first bracket rendering of tensors.
//!
//! Layout rules, applied recursively through a [`TensorView`]:
//! - rank 0: the bare value;
//! - innermost axis: `[a b c]`, elements separated by one space;
//! - any outer axis: `[`, newline, one child per line indented by
//!   `indent + 2` spaces, children separated by `,` + newline, then a newline,
//!   `indent` spaces and `]`.
//!
//! ```text
//! [
//!   [1 2],
//!   [3 4]
//! ]
//! ```

use std::fmt;

use crate::{Element, Tensor, TensorView};

/// Columns of indentation added per nesting level.
const INDENT_STEP: usize = 2;

/// Writes `view` into `out` starting at nesting `indent`.
///
/// `precision` is forwarded to each element's `Display` impl (integers
/// ignore it).
pub fn render_into<T, W>(
    out: &mut W,
    view: &TensorView<'_, T>,
    indent: usize,
    precision: Option<usize>,
) -> fmt::Result
where
    T: Element,
    W: fmt::Write,
{
    if view.dims_left() == 0 {
        let value = view.get().map_err(|_| fmt::Error)?;
        return write_element(out, value, precision);
    }

    let extent = view.shape()[0];
    out.write_char('[')?;
    if view.dims_left() == 1 {
        for (i, &value) in view.as_slice().iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write_element(out, value, precision)?;
        }
    } else {
        out.write_char('\n')?;
        for i in 0..extent {
            let child = view.index(i).map_err(|_| fmt::Error)?;
            write!(out, "{:width$}", "", width = indent + INDENT_STEP)?;
            render_into(out, &child, indent + INDENT_STEP, precision)?;
            if i + 1 != extent {
                out.write_str(",\n")?;
            }
        }
        write!(out, "\n{:width$}", "", width = indent)?;
    }
    out.write_char(']')
}

fn write_element<T: Element, W: fmt::Write>(out: &mut W, value: T, precision: Option<usize>) -> fmt::Result {
    match precision {
        Some(p) => write!(out, "{value:.p$}"),
        None => write!(out, "{value}"),
    }
}

/// Renders a whole tensor to a `String`.
pub fn render<T: Element>(tensor: &Tensor<T>, precision: Option<usize>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_into(&mut out, &tensor.view(), 0, precision);
    out
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        render_into(f, &self.view(), 0, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar() {
        assert_eq!(Tensor::scalar(3i32).to_string(), "3");
    }

    #[test]
    fn test_vector() {
        let t = Tensor::from_vec([3], vec![1, 2, 3]).unwrap();
        assert_eq!(t.to_string(), "[1 2 3]");
    }

    #[test]
    fn test_matrix() {
        let t = Tensor::from_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
        assert_eq!(t.to_string(), "[\n  [1 2],\n  [3 4]\n]");
    }

    #[test]
    fn test_rank_three_indentation() {
        let t = Tensor::from_vec([2, 1, 2], vec![1, 2, 3, 4]).unwrap();
        let expected = "[\n  [\n    [1 2]\n  ],\n  [\n    [3 4]\n  ]\n]";
        assert_eq!(t.to_string(), expected);
    }

    #[test]
    fn test_precision_is_forwarded() {
        let t = Tensor::from_vec([2], vec![1.0f64, 2.5]).unwrap();
        assert_eq!(format!("{t:.2}"), "[1.00 2.50]");
        assert_eq!(render(&t, Some(1)), "[1.0 2.5]");
    }

    #[test]
    fn test_empty_innermost_axis() {
        let t = Tensor::<f32>::zeros([0]);
        assert_eq!(t.to_string(), "[]");
    }

    #[test]
    fn test_render_subview() {
        let t = Tensor::from_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut out = String::new();
        render_into(&mut out, &t.view().index(1).unwrap(), 0, None).unwrap();
        assert_eq!(out, "[4 5 6]");
    }
}
