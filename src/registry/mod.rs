// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unit registry: maps a `unit_name` discriminator to the constructor that
//! rebuilds that unit from its dictionary.
//!
//! The registry is built explicitly from a table of `(unit_name, constructor)`
//! pairs and then frozen. A process holds at most one global registry:
//! [`install`] sets it once, and [`global`] falls back to the builtin table
//! the first time it is read. Reads never lock.
//!
//! # Example
//! ```rust
//! use nlu_pipeline_config::registry;
//! use nlu_pipeline_config::traits::ProcessingUnitConfig;
//! use nlu_pipeline_config::units::DeterministicIntentParserConfig;
//!
//! let dict = DeterministicIntentParserConfig::default().to_dict().unwrap();
//! let config = registry::unit_from_dict(&dict).unwrap();
//! assert_eq!(config.unit_name(), "deterministic_intent_parser");
//! ```

mod builtin;

pub use builtin::{construct, BUILTIN_UNITS};

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::config::{unit_name_of, ConfigDict};
use crate::errors::{ConfigError, RegistrationError, UnknownUnitError};
use crate::observability::messages::registry::{
    RegistrationRejected, RegistryInitialized, UnknownUnitRequested,
};
use crate::observability::messages::StructuredLog;
use crate::traits::ProcessingUnitConfig;

/// Rebuilds one concrete unit from its dictionary. Nested units are looked up
/// in the registry passed alongside.
pub type UnitConstructor =
    fn(&ConfigDict, &UnitRegistry) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError>;

static GLOBAL_REGISTRY: OnceLock<UnitRegistry> = OnceLock::new();

/// Read-only mapping from `unit_name` to constructor.
#[derive(Clone)]
pub struct UnitRegistry {
    names: Vec<&'static str>,
    constructors: HashMap<&'static str, UnitConstructor>,
}

impl UnitRegistry {
    pub fn builder() -> UnitRegistryBuilder {
        UnitRegistryBuilder::default()
    }

    /// A registry holding every unit shipped with this crate.
    pub fn builtin() -> Result<Self, RegistrationError> {
        Self::from_table(BUILTIN_UNITS)
    }

    pub fn from_table(table: &[(&'static str, UnitConstructor)]) -> Result<Self, RegistrationError> {
        table
            .iter()
            .try_fold(Self::builder(), |builder, &(name, constructor)| {
                builder.register(name, constructor)
            })
            .map(UnitRegistryBuilder::build)
    }

    /// Registered unit names, in registration order.
    pub fn unit_names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn contains(&self, unit_name: &str) -> bool {
        self.constructors.contains_key(unit_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn lookup(&self, unit_name: &str) -> Result<UnitConstructor, UnknownUnitError> {
        self.constructors.get(unit_name).copied().ok_or_else(|| {
            UnknownUnitRequested { unit_name }.log();
            UnknownUnitError {
                unit_name: unit_name.to_string(),
            }
        })
    }

    /// Rebuild the concrete unit named by the dictionary's discriminator.
    /// Every nested unit is resolved through this same registry.
    pub fn from_dict(&self, dict: &ConfigDict) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError> {
        let unit_name = unit_name_of(dict)?;
        let constructor = self.lookup(unit_name)?;
        constructor(dict, self)
    }
}

impl fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitRegistry").field("units", &self.names).finish()
    }
}

/// Collects registrations; each unit name may be registered once.
#[derive(Default)]
pub struct UnitRegistryBuilder {
    names: Vec<&'static str>,
    constructors: HashMap<&'static str, UnitConstructor>,
}

impl UnitRegistryBuilder {
    pub fn register(
        mut self,
        unit_name: &'static str,
        constructor: UnitConstructor,
    ) -> Result<Self, RegistrationError> {
        if self.constructors.contains_key(unit_name) {
            RegistrationRejected {
                unit_name,
                reason: "duplicate unit name",
            }
            .log();
            return Err(RegistrationError::DuplicateUnit {
                unit_name: unit_name.to_string(),
            });
        }

        tracing::debug!(unit_name, "Registered processing unit '{}'", unit_name);
        self.names.push(unit_name);
        self.constructors.insert(unit_name, constructor);
        Ok(self)
    }

    pub fn build(self) -> UnitRegistry {
        UnitRegistry {
            names: self.names,
            constructors: self.constructors,
        }
    }
}

impl fmt::Debug for UnitRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitRegistryBuilder").field("units", &self.names).finish()
    }
}

/// Install the process-wide registry. Must happen before the first lookup.
pub fn install(registry: UnitRegistry) -> Result<(), RegistrationError> {
    let unit_count = registry.len();
    GLOBAL_REGISTRY.set(registry).map_err(|_| {
        RegistrationRejected {
            unit_name: "*",
            reason: "registry already initialized",
        }
        .log();
        RegistrationError::AlreadyInitialized
    })?;

    RegistryInitialized {
        unit_count,
        source: "install",
    }
    .log();
    Ok(())
}

/// The process-wide registry, initialized from the builtin table if nothing
/// was installed.
pub fn global() -> Result<&'static UnitRegistry, RegistrationError> {
    if let Some(registry) = GLOBAL_REGISTRY.get() {
        return Ok(registry);
    }

    let builtin = UnitRegistry::builtin()?;
    let unit_count = builtin.len();
    let registry = GLOBAL_REGISTRY.get_or_init(|| {
        RegistryInitialized {
            unit_count,
            source: "builtin",
        }
        .log();
        builtin
    });
    Ok(registry)
}

/// Rebuild any registered unit from its dictionary using the global registry.
pub fn unit_from_dict(dict: &ConfigDict) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError> {
    global()?.from_dict(dict)
}
