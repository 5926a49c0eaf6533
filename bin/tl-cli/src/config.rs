// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI configuration loaded from TOML files or taken from defaults.
//!
//! # TOML Format
//! ```toml
//! num_threads = 4
//! bench_sizes = [64, 128, 256]
//! bench_iterations = 10
//! precision = 4
//! ```
//!
//! Every key is optional; missing keys take their default.

use std::path::Path;

/// Errors raised while loading or validating a [`CliConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialise error: {0}")]
    Serialise(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings shared by all `tl` subcommands.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Size of the rayon pool (defaults to the number of online CPU cores).
    pub num_threads: Option<usize>,
    /// Square side lengths used by `tl bench`.
    pub bench_sizes: Vec<usize>,
    /// Timed iterations per benchmark measurement.
    pub bench_iterations: usize,
    /// Digits after the decimal point when printing float tensors.
    pub precision: usize,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolves the number of worker threads.
    pub fn resolve_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.num_threads == Some(0) {
            return Err(ConfigError::Invalid("num_threads must be at least 1".into()));
        }
        if self.bench_iterations == 0 {
            return Err(ConfigError::Invalid("bench_iterations must be at least 1".into()));
        }
        if self.bench_sizes.contains(&0) {
            return Err(ConfigError::Invalid("bench_sizes must be positive".into()));
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            bench_sizes: vec![64, 128, 256],
            bench_iterations: 10,
            precision: 4,
        }
    }
}
