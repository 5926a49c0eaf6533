// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `tl bench` command: wall-clock timings for the main kernels.
//!
//! For each side length `n` this times elementwise add over `n × n` tensors,
//! an `n × n` matmul and a relu map, and prints one row per size.

use std::time::{Duration, Instant};

use tensor_core::Tensor;

use crate::config::CliConfig;

pub fn execute(
    config: &CliConfig,
    sizes: Option<String>,
    iterations: Option<usize>,
) -> anyhow::Result<()> {
    let sizes = match sizes {
        Some(s) => parse_sizes(&s)?,
        None => config.bench_sizes.clone(),
    };
    let iterations = iterations.unwrap_or(config.bench_iterations).max(1);

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║                tl · Kernel Benchmarks               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Sizes:      {sizes:?}");
    println!("  Iterations: {iterations}");
    println!("  Threads:    {}", rayon::current_num_threads());
    println!();

    // ── Results Table ──────────────────────────────────────────
    println!(
        "  {:>6} {:>12} {:>12} {:>12} {:>12}",
        "n", "Elements", "add (ms)", "matmul (ms)", "relu (ms)",
    );
    println!("  {}", "-".repeat(58));

    for n in sizes {
        let a = patterned(n);
        let b = patterned(n);

        let add = time(iterations, || a.add(&b).map(drop))?;
        let matmul = time(iterations, || linalg::matmul(&a, &b).map(drop))?;
        let relu = time(iterations, || {
            drop(functional::relu(&a));
            Ok::<_, std::convert::Infallible>(())
        })?;

        println!(
            "  {:>6} {:>12} {:>12.3} {:>12.3} {:>12.3}",
            n,
            n * n,
            millis(add),
            millis(matmul),
            millis(relu),
        );
    }
    println!();
    Ok(())
}

/// Parses a comma-separated list of positive side lengths.
fn parse_sizes(s: &str) -> anyhow::Result<Vec<usize>> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(anyhow::anyhow!("invalid size '{part}'")),
            }
        })
        .collect()
}

fn patterned(n: usize) -> Tensor<f32> {
    let mut t = Tensor::zeros([n, n]);
    for (i, x) in t.as_mut_slice().iter_mut().enumerate() {
        *x = ((i % 13) as f32 - 6.0) * 0.5;
    }
    t
}

/// Mean wall-clock duration of `f` over `iterations` runs, after one warm-up.
///
/// Zero iterations still runs once.
fn time<E, F>(iterations: usize, mut f: F) -> anyhow::Result<Duration>
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnMut() -> Result<(), E>,
{
    let iterations = iterations.max(1);
    f()?;
    let start = Instant::now();
    for _ in 0..iterations {
        f()?;
    }
    Ok(start.elapsed().div_f64(iterations as f64))
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sizes() {
        assert_eq!(parse_sizes("8, 16,32").unwrap(), vec![8, 16, 32]);
        assert!(parse_sizes("8,zero").is_err());
        assert!(parse_sizes("0").is_err());
    }

    #[test]
    fn test_time_counts_every_run() {
        let mut calls = 0usize;
        let d = time(3, || {
            calls += 1;
            Ok::<_, std::convert::Infallible>(())
        })
        .unwrap();
        assert_eq!(calls, 4);
        assert!(d < Duration::from_secs(1));
    }

    #[test]
    fn test_time_zero_iterations() {
        let mut calls = 0usize;
        time(0, || {
            calls += 1;
            Ok::<_, std::convert::Infallible>(())
        })
        .unwrap();
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_patterned_shape() {
        let t = patterned(3);
        assert_eq!(t.shape().dims(), &[3, 3]);
        assert_eq!(t.get_flat(0), Some(-3.0));
    }
}
