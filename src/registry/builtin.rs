// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ConfigDict;
use crate::errors::ConfigError;
use crate::traits::{FromConfigDict, ProcessingUnitConfig};
use crate::units::{
    CrfSlotFillerConfig, DeterministicIntentParserConfig, LogRegIntentClassifierConfig,
    NluEngineConfig, ProbabilisticIntentParserConfig,
};

use super::{UnitConstructor, UnitRegistry};

/// Every unit this crate knows how to rebuild, in registration order.
pub const BUILTIN_UNITS: &[(&str, UnitConstructor)] = &[
    (NluEngineConfig::UNIT_NAME, construct::<NluEngineConfig>),
    (DeterministicIntentParserConfig::UNIT_NAME, construct::<DeterministicIntentParserConfig>),
    (ProbabilisticIntentParserConfig::UNIT_NAME, construct::<ProbabilisticIntentParserConfig>),
    (LogRegIntentClassifierConfig::UNIT_NAME, construct::<LogRegIntentClassifierConfig>),
    (CrfSlotFillerConfig::UNIT_NAME, construct::<CrfSlotFillerConfig>),
];

/// Generic reconstructor for any unit type that can route its own dictionary.
pub fn construct<T>(
    dict: &ConfigDict,
    registry: &UnitRegistry,
) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError>
where
    T: FromConfigDict + ProcessingUnitConfig + 'static,
{
    Ok(Box::new(T::from_dict_in(dict, registry)?))
}
