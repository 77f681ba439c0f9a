// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for config file loading and saving.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Reading a config file started.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ConfigLoadStarted<'a> {
    pub path: &'a str,
    pub format: &'a str,
}

impl Display for ConfigLoadStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loading {} config from '{}'", self.format, self.path)
    }
}

impl StructuredLog for ConfigLoadStarted<'_> {
    fn log(&self) {
        tracing::debug!(path = self.path, format = self.format, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_load",
            span_name = name,
            path = self.path,
            format = self.format,
        )
    }
}

/// A config file was turned into a unit tree.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub unit_name: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loaded '{}' config from '{}'", self.unit_name, self.path)
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, unit_name = self.unit_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            unit_name = self.unit_name,
        )
    }
}

/// A unit tree was written to disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigSaved<'a> {
    pub path: &'a str,
    pub unit_name: &'a str,
    pub size_bytes: usize,
}

impl Display for ConfigSaved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Saved '{}' config to '{}' ({} bytes)",
            self.unit_name, self.path, self.size_bytes
        )
    }
}

impl StructuredLog for ConfigSaved<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            unit_name = self.unit_name,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_saved",
            span_name = name,
            path = self.path,
            unit_name = self.unit_name,
            size_bytes = self.size_bytes,
        )
    }
}
