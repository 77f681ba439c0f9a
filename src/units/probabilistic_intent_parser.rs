// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{unit_dict, ConfigDict, DictReader};
use crate::errors::{ConfigError, MalformedConfigError, ResourceConflictError};
use crate::registry::{self, UnitRegistry};
use crate::resources::{merge_required_resources, RequiredResources};
use crate::traits::{same_dict, FromConfigDict, ProcessingUnitConfig};

use super::{CrfSlotFillerConfig, LogRegIntentClassifierConfig};

/// Configuration of the statistical intent parser: an intent classifier
/// followed by a slot filler, each a unit of its own.
#[derive(Debug, Clone)]
pub struct ProbabilisticIntentParserConfig {
    intent_classifier_config: Box<dyn ProcessingUnitConfig>,
    slot_filler_config: Box<dyn ProcessingUnitConfig>,
}

impl ProbabilisticIntentParserConfig {
    pub fn new(
        intent_classifier_config: Box<dyn ProcessingUnitConfig>,
        slot_filler_config: Box<dyn ProcessingUnitConfig>,
    ) -> Self {
        Self {
            intent_classifier_config,
            slot_filler_config,
        }
    }

    pub fn intent_classifier_config(&self) -> &dyn ProcessingUnitConfig {
        self.intent_classifier_config.as_ref()
    }

    pub fn slot_filler_config(&self) -> &dyn ProcessingUnitConfig {
        self.slot_filler_config.as_ref()
    }
}

impl PartialEq for ProbabilisticIntentParserConfig {
    fn eq(&self, other: &Self) -> bool {
        same_dict(self, other)
    }
}

impl Default for ProbabilisticIntentParserConfig {
    fn default() -> Self {
        Self::new(
            Box::new(LogRegIntentClassifierConfig::default()),
            Box::new(CrfSlotFillerConfig::default()),
        )
    }
}

impl ProcessingUnitConfig for ProbabilisticIntentParserConfig {
    fn unit_name(&self) -> &'static str {
        Self::UNIT_NAME
    }

    fn get_required_resources(&self) -> Result<RequiredResources, ResourceConflictError> {
        merge_required_resources(
            &self.intent_classifier_config.get_required_resources()?,
            &self.slot_filler_config.get_required_resources()?,
        )
    }

    fn to_dict(&self) -> Result<ConfigDict, MalformedConfigError> {
        unit_dict(Self::UNIT_NAME)
            .dict("intent_classifier_config", self.intent_classifier_config.to_dict()?)
            .dict("slot_filler_config", self.slot_filler_config.to_dict()?)
            .build()
    }

    fn clone_boxed(&self) -> Box<dyn ProcessingUnitConfig> {
        Box::new(self.clone())
    }
}

impl FromConfigDict for ProbabilisticIntentParserConfig {
    const UNIT_NAME: &'static str = "probabilistic_intent_parser";

    fn from_dict(dict: &ConfigDict) -> Result<Self, ConfigError> {
        Self::from_dict_in(dict, registry::global()?)
    }

    fn from_dict_in(dict: &ConfigDict, registry: &UnitRegistry) -> Result<Self, ConfigError> {
        let mut reader = DictReader::new(Self::UNIT_NAME, dict)?;
        let intent_classifier_config = reader.required_dict("intent_classifier_config")?;
        let slot_filler_config = reader.required_dict("slot_filler_config")?;
        reader.finish()?;

        Ok(Self::new(
            registry.from_dict(&intent_classifier_config)?,
            registry.from_dict(&slot_filler_config)?,
        ))
    }
}
