// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tl show` command: render a tensor file.

use std::path::PathBuf;

use crate::config::CliConfig;
use crate::tensor_file::load_tensor;

pub fn execute(input: PathBuf, config: &CliConfig) -> anyhow::Result<()> {
    let t = load_tensor(&input)?;
    let p = config.precision;

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                tl · Tensor Inspector                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Summary ────────────────────────────────────────────────
    println!("  File:     {}", input.display());
    println!("  Shape:    {}", t.shape());
    println!("  Strides:  {:?}", t.strides());
    println!("  Rank:     {}", t.rank());
    println!("  Elements: {} ({} bytes as {})", t.len(), t.size_bytes(), t.dtype());
    if !t.is_empty() {
        println!(
            "  Sum {:.p$} · Mean {:.p$} · Min {:.p$} · Max {:.p$}",
            t.sum()?,
            t.mean()?,
            t.min()?,
            t.max()?,
        );
    }
    println!();

    // ── Contents ───────────────────────────────────────────────
    println!("{t:.p$}");
    println!();
    Ok(())
}
