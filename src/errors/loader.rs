// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for reading and writing configuration files.

use std::path::PathBuf;
use thiserror::Error;

use super::ConfigError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported config format for '{}': expected .yaml, .yml, .json or .toml", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config file '{}' must contain a mapping at the top level", path.display())]
    NotAMapping { path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
