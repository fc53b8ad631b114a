// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading logging settings from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read settings file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML content did not match the settings schema.
    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML content did not match the settings schema.
    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension maps to no known settings format.
    #[error("Unsupported settings format '{extension}' (expected yaml, yml or toml)")]
    UnsupportedFormat { extension: String },

    /// A history limit of zero would drop every entry as soon as it lands.
    #[error("loggable_history_limit must be at least 1, got {0}")]
    InvalidHistoryLimit(usize),
}
