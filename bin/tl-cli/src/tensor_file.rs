// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON tensor files.
//!
//! ```json
//! {"shape": [2, 2], "data": [3.0, 4.0, 0.0, 0.0]}
//! ```
//!
//! `data` is the flat row-major buffer; its length must match the shape.

use std::path::Path;

use anyhow::Context;
use tensor_core::{Tensor, TensorError};

/// On-disk form of a `Tensor<f64>`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TensorFile {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl TensorFile {
    /// Reads and parses a tensor file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read tensor file '{}'", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid tensor file '{}'", path.display()))
    }

    /// Validates the buffer length against the shape.
    pub fn into_tensor(self) -> Result<Tensor<f64>, TensorError> {
        Tensor::from_vec(self.shape, self.data)
    }
}

/// Loads a tensor file straight into a `Tensor<f64>`.
pub fn load_tensor(path: &Path) -> anyhow::Result<Tensor<f64>> {
    let tensor = TensorFile::load(path)?.into_tensor()?;
    tracing::debug!(path = %path.display(), shape = %tensor.shape(), "loaded tensor");
    Ok(tensor)
}
