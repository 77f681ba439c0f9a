// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for unit registration and lookup.

use thiserror::Error;

/// A `unit_name` has no registered reconstructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown processing unit '{unit_name}'")]
pub struct UnknownUnitError {
    pub unit_name: String,
}

/// Errors raised while populating or installing the unit registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The same unit name was registered twice.
    #[error("Processing unit '{unit_name}' is already registered")]
    DuplicateUnit { unit_name: String },

    /// The process-wide registry was already installed or already used.
    #[error("The unit registry is already initialized")]
    AlreadyInitialized,
}
