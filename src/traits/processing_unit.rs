// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::Debug;

use crate::config::ConfigDict;
use crate::errors::{ConfigError, MalformedConfigError, ResourceConflictError};
use crate::registry::UnitRegistry;
use crate::resources::RequiredResources;

/// Configuration of one pipeline stage, leaf or composite.
///
/// Implementors are immutable value objects. Reconstruction from a dictionary
/// goes through the [unit registry](crate::registry), keyed by `unit_name`.
pub trait ProcessingUnitConfig: Debug + Send + Sync {
    /// Stable identifier of the concrete unit kind.
    fn unit_name(&self) -> &'static str;

    /// Resources that must be loaded before the unit can run. Composite units
    /// merge their own needs with those of every child.
    fn get_required_resources(&self) -> Result<RequiredResources, ResourceConflictError>;

    /// Data-only form of the config, `unit_name` included. Children are nested
    /// as their own `to_dict()` output. Fails when a parameter has no
    /// dictionary form, such as a non-finite number.
    fn to_dict(&self) -> Result<ConfigDict, MalformedConfigError>;

    fn clone_boxed(&self) -> Box<dyn ProcessingUnitConfig>;
}

/// Caller-routed reconstruction of one concrete unit type.
pub trait FromConfigDict: Sized {
    /// The discriminator this type expects on the wire.
    const UNIT_NAME: &'static str;

    /// Rebuild the config from the exact keys produced by `to_dict`. The input
    /// dictionary is left untouched. Composite units rebuild their children
    /// through the global registry.
    fn from_dict(dict: &ConfigDict) -> Result<Self, ConfigError>;

    /// Like [`from_dict`](FromConfigDict::from_dict), with nested units
    /// rebuilt through `registry`. Leaf units have no children to look up.
    fn from_dict_in(dict: &ConfigDict, _registry: &UnitRegistry) -> Result<Self, ConfigError> {
        Self::from_dict(dict)
    }
}

impl Clone for Box<dyn ProcessingUnitConfig> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Two configs are equal when they serialize to the same dictionary.
/// A config without a dictionary form equals nothing.
impl PartialEq for dyn ProcessingUnitConfig {
    fn eq(&self, other: &Self) -> bool {
        self.unit_name() == other.unit_name() && same_dict(self, other)
    }
}

pub(crate) fn same_dict(left: &dyn ProcessingUnitConfig, right: &dyn ProcessingUnitConfig) -> bool {
    match (left.to_dict(), right.to_dict()) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}
