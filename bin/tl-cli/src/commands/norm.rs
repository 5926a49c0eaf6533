// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tl norm` command: matrix norm of a tensor file.

use std::path::PathBuf;

use anyhow::Context;
use linalg::NormKind;

use crate::tensor_file::load_tensor;

pub fn execute(input: PathBuf, kind: String) -> anyhow::Result<()> {
    let kind: NormKind = kind.parse()?;
    let t = load_tensor(&input)?;
    let norm = linalg::matrix_norm_with(&t, kind)
        .with_context(|| format!("cannot take the {kind} norm of '{}'", input.display()))?;
    println!("{norm}");
    Ok(())
}
