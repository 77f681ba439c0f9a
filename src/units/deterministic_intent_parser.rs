// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MAX_PATTERN_LENGTH, DEFAULT_MAX_QUERIES};
use crate::config::{unit_dict, ConfigDict, DictReader};
use crate::errors::{ConfigError, MalformedConfigError, ResourceConflictError};
use crate::resources::{CustomEntityParserUsage, RequiredResources, Requirement, ResourceKind};
use crate::traits::{FromConfigDict, ProcessingUnitConfig};

/// Configuration of the pattern-matching intent parser.
///
/// # Example
/// ```yaml
/// unit_name: deterministic_intent_parser
/// max_queries: 100
/// max_pattern_length: 1000
/// ignore_stop_words: false
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeterministicIntentParserConfig {
    pub max_queries: usize,
    pub max_pattern_length: usize,
    pub ignore_stop_words: bool,
}

impl Default for DeterministicIntentParserConfig {
    fn default() -> Self {
        Self {
            max_queries: DEFAULT_MAX_QUERIES,
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
            ignore_stop_words: false,
        }
    }
}

impl ProcessingUnitConfig for DeterministicIntentParserConfig {
    fn unit_name(&self) -> &'static str {
        Self::UNIT_NAME
    }

    fn get_required_resources(&self) -> Result<RequiredResources, ResourceConflictError> {
        // Patterns match custom values verbatim
        Ok(RequiredResources::from([
            (
                ResourceKind::CustomEntityParserUsage,
                Requirement::Usage(CustomEntityParserUsage::WithoutStems),
            ),
            (ResourceKind::StopWords, Requirement::Flag(self.ignore_stop_words)),
        ]))
    }

    fn to_dict(&self) -> Result<ConfigDict, MalformedConfigError> {
        unit_dict(Self::UNIT_NAME)
            .field("max_queries", &self.max_queries)
            .field("max_pattern_length", &self.max_pattern_length)
            .field("ignore_stop_words", &self.ignore_stop_words)
            .build()
    }

    fn clone_boxed(&self) -> Box<dyn ProcessingUnitConfig> {
        Box::new(self.clone())
    }
}

impl FromConfigDict for DeterministicIntentParserConfig {
    const UNIT_NAME: &'static str = "deterministic_intent_parser";

    fn from_dict(dict: &ConfigDict) -> Result<Self, ConfigError> {
        let mut reader = DictReader::new(Self::UNIT_NAME, dict)?;
        let config = Self {
            max_queries: reader.required("max_queries")?,
            max_pattern_length: reader.required("max_pattern_length")?,
            ignore_stop_words: reader.required("ignore_stop_words")?,
        };
        reader.finish()?;
        Ok(config)
    }
}
