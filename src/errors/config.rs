// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

use super::{RegistrationError, ResourceConflictError, UnknownUnitError};

/// What is wrong with a single key of a configuration dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyProblem {
    /// A key the target unit requires is absent.
    Missing,
    /// A key the target unit never produces is present.
    Unexpected,
    /// The key is present but its value cannot be read.
    InvalidValue(String),
    /// The discriminator names a different unit than the one being built.
    UnitNameMismatch { expected: String, found: String },
}

impl fmt::Display for KeyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyProblem::Missing => write!(f, "missing"),
            KeyProblem::Unexpected => write!(f, "unexpected"),
            KeyProblem::InvalidValue(reason) => write!(f, "invalid: {}", reason),
            KeyProblem::UnitNameMismatch { expected, found } => {
                write!(f, "for unit '{}', expected '{}'", found, expected)
            }
        }
    }
}

/// A configuration dictionary lacks required keys or carries unexpected ones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed config for unit '{unit_name}': key '{key}' is {problem}")]
pub struct MalformedConfigError {
    /// The unit being reconstructed (`"<unknown>"` when the discriminator itself is absent).
    pub unit_name: String,
    /// The offending key.
    pub key: String,
    pub problem: KeyProblem,
}

impl MalformedConfigError {
    pub fn missing(unit_name: &str, key: &str) -> Self {
        Self::new(unit_name, key, KeyProblem::Missing)
    }

    pub fn unexpected(unit_name: &str, key: &str) -> Self {
        Self::new(unit_name, key, KeyProblem::Unexpected)
    }

    pub fn invalid(unit_name: &str, key: &str, reason: impl Into<String>) -> Self {
        Self::new(unit_name, key, KeyProblem::InvalidValue(reason.into()))
    }

    fn new(unit_name: &str, key: &str, problem: KeyProblem) -> Self {
        Self {
            unit_name: unit_name.to_string(),
            key: key.to_string(),
            problem,
        }
    }
}

/// Any failure while building, reconstructing or resolving a config tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    ResourceConflict(#[from] ResourceConflictError),

    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnitError),

    #[error(transparent)]
    Malformed(#[from] MalformedConfigError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_key() {
        let err = MalformedConfigError::unexpected("nlu_engine", "foo");
        assert_eq!(
            err.to_string(),
            "Malformed config for unit 'nlu_engine': key 'foo' is unexpected"
        );

        let err = MalformedConfigError {
            unit_name: "nlu_engine".to_string(),
            key: "unit_name".to_string(),
            problem: KeyProblem::UnitNameMismatch {
                expected: "nlu_engine".to_string(),
                found: "crf_slot_filler".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Malformed config for unit 'nlu_engine': key 'unit_name' is for unit 'crf_slot_filler', expected 'nlu_engine'"
        );

        let err = MalformedConfigError::invalid("crf_slot_filler", "tagging_scheme", "7 is not a scheme");
        assert!(err.to_string().contains("'tagging_scheme'"));
        assert!(err.to_string().contains("7 is not a scheme"));
    }

    #[test]
    fn test_unknown_unit_converts_into_config_error() {
        let err: ConfigError = UnknownUnitError {
            unit_name: "does-not-exist".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown processing unit 'does-not-exist'");
    }
}
