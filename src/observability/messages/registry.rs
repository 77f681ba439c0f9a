// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for unit registry events.
//!
//! This module contains message types for logging events related to:
//! * Registry initialization
//! * Rejected registrations
//! * Lookups of unregistered unit names

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The process-wide registry was initialized.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use nlu_pipeline_config::observability::messages::registry::RegistryInitialized;
///
/// let msg = RegistryInitialized {
///     unit_count: 5,
///     source: "builtin",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RegistryInitialized {
    pub unit_count: usize,
    pub source: &'static str,
}

impl Display for RegistryInitialized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unit registry initialized from {} table: {} units",
            self.source, self.unit_count
        )
    }
}

impl StructuredLog for RegistryInitialized {
    fn log(&self) {
        tracing::info!(
            unit_count = self.unit_count,
            source = self.source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registry_initialized",
            span_name = name,
            unit_count = self.unit_count,
            source = self.source,
        )
    }
}

/// A registration was refused.
///
/// # Log Level
/// `error!` - Configuration error
pub struct RegistrationRejected<'a> {
    pub unit_name: &'a str,
    pub reason: &'a str,
}

impl Display for RegistrationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registration of unit '{}' rejected: {}",
            self.unit_name, self.reason
        )
    }
}

impl StructuredLog for RegistrationRejected<'_> {
    fn log(&self) {
        tracing::error!(
            unit_name = self.unit_name,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "registration_rejected",
            span_name = name,
            unit_name = self.unit_name,
            reason = self.reason,
        )
    }
}

/// A dictionary named a unit that nothing registered.
///
/// # Log Level
/// `error!` - Configuration error, aborts the load
///
/// # Example
/// ```
/// use nlu_pipeline_config::observability::messages::registry::UnknownUnitRequested;
///
/// let msg = UnknownUnitRequested {
///     unit_name: "does-not-exist",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct UnknownUnitRequested<'a> {
    pub unit_name: &'a str,
}

impl Display for UnknownUnitRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No processing unit registered as '{}'", self.unit_name)
    }
}

impl StructuredLog for UnknownUnitRequested<'_> {
    fn log(&self) {
        tracing::error!(unit_name = self.unit_name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unknown_unit",
            span_name = name,
            unit_name = self.unit_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let msg = RegistryInitialized {
            unit_count: 5,
            source: "builtin",
        };
        assert_eq!(msg.to_string(), "Unit registry initialized from builtin table: 5 units");

        let msg = UnknownUnitRequested { unit_name: "x" };
        assert_eq!(msg.to_string(), "No processing unit registered as 'x'");
    }
}
