// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # tl
//!
//! Command-line driver for the tensor library.
//!
//! ## Usage
//! ```bash
//! # Walk through construction, indexing, arithmetic and linear algebra
//! tl demo
//!
//! # Render a tensor stored as {"shape": [...], "data": [...]}
//! tl show --input matrix.json
//!
//! # Matrix norm of a tensor file
//! tl norm --input matrix.json --kind inf
//!
//! # Time elementwise, matmul and unary-map kernels
//! tl bench --sizes 64,256 --iterations 20
//! ```

mod commands;
mod config;
mod tensor_file;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(
    name = "tl",
    about = "Strided n-dimensional tensors: demos, inspection and benchmarks",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guided demonstration of the library.
    Demo,

    /// Print a tensor file with its shape, strides and summary statistics.
    Show {
        /// Path to a JSON tensor file.
        #[arg(short, long)]
        input: std::path::PathBuf,
    },

    /// Compute a matrix norm of a rank-2 tensor file.
    Norm {
        /// Path to a JSON tensor file.
        #[arg(short, long)]
        input: std::path::PathBuf,

        /// Norm kind: frob (or fro), 1, inf.
        #[arg(short, long, default_value = "frob")]
        kind: String,
    },

    /// Time elementwise add, matmul and relu over square tensors.
    Bench {
        /// Comma-separated side lengths (overrides `bench_sizes`).
        #[arg(long)]
        sizes: Option<String>,

        /// Timed iterations per measurement (overrides `bench_iterations`).
        #[arg(long)]
        iterations: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    let threads = config.resolve_threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to initialise the worker pool")?;
    tracing::info!(threads, "worker pool ready");

    match cli.command {
        Commands::Demo => commands::demo::execute(&config),
        Commands::Show { input } => commands::show::execute(input, &config),
        Commands::Norm { input, kind } => commands::norm::execute(input, kind),
        Commands::Bench { sizes, iterations } => {
            commands::bench::execute(&config, sizes, iterations)
        }
    }
}
