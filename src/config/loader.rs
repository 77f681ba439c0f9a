// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reading and writing unit config trees as YAML, JSON or TOML files.
//!
//! The file holds the dictionary form of one unit (usually `nlu_engine`):
//!
//! ```yaml
//! unit_name: nlu_engine
//! intent_parsers_configs:
//!   - unit_name: deterministic_intent_parser
//!     max_queries: 100
//!     max_pattern_length: 1000
//!     ignore_stop_words: false
//! ```

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::ConfigDict;
use crate::errors::{ConfigError, LoadError};
use crate::observability::messages::loader::{ConfigLoadStarted, ConfigLoaded, ConfigSaved};
use crate::observability::messages::StructuredLog;
use crate::registry;
use crate::traits::{FromConfigDict, ProcessingUnitConfig};
use crate::units::NluEngineConfig;

/// On-disk format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }

    pub fn parse(&self, content: &str) -> Result<Value, LoadError> {
        let value = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(value)
    }

    pub fn render(&self, dict: &ConfigDict) -> Result<String, LoadError> {
        let content = match self {
            ConfigFormat::Yaml => serde_yaml::to_string(dict)?,
            ConfigFormat::Json => serde_json::to_string_pretty(dict)?,
            ConfigFormat::Toml => toml::to_string_pretty(dict)?,
        };
        Ok(content)
    }
}

/// Read a config file into its dictionary form.
pub fn load_dict<P: AsRef<Path>>(path: P) -> Result<ConfigDict, LoadError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let display_path = path.display().to_string();

    let start_msg = ConfigLoadStarted {
        path: &display_path,
        format: format.as_str(),
    };
    let span = start_msg.span("load_dict");
    let _guard = span.enter();
    start_msg.log();

    let content = fs::read_to_string(path)?;
    match format.parse(&content)? {
        Value::Object(dict) => Ok(dict),
        _ => Err(LoadError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Load any registered unit, dispatching on the file's `unit_name`.
pub fn load_unit_config<P: AsRef<Path>>(path: P) -> Result<Box<dyn ProcessingUnitConfig>, LoadError> {
    let path = path.as_ref();
    let dict = load_dict(path)?;
    let config = registry::unit_from_dict(&dict)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        unit_name: config.unit_name(),
    }
    .log();

    Ok(config)
}

/// Load an engine config; the file must describe an `nlu_engine` unit.
pub fn load_engine_config<P: AsRef<Path>>(path: P) -> Result<NluEngineConfig, LoadError> {
    let path = path.as_ref();
    let dict = load_dict(path)?;
    let config = NluEngineConfig::from_dict(&dict)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        unit_name: NluEngineConfig::UNIT_NAME,
    }
    .log();

    Ok(config)
}

/// Write a unit config tree in the format implied by the file extension.
pub fn save_unit_config<P: AsRef<Path>>(
    config: &dyn ProcessingUnitConfig,
    path: P,
) -> Result<(), LoadError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let dict = config.to_dict().map_err(ConfigError::from)?;
    let content = format.render(&dict)?;
    fs::write(path, &content)?;

    ConfigSaved {
        path: &path.display().to_string(),
        unit_name: config.unit_name(),
        size_bytes: content.len(),
    }
    .log();

    Ok(())
}
