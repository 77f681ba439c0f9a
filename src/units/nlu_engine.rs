// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{unit_dict, ConfigDict, DictReader};
use crate::errors::{ConfigError, MalformedConfigError, ResourceConflictError};
use crate::observability::messages::resources::ResourcesResolved;
use crate::observability::messages::StructuredLog;
use crate::registry::{self, UnitRegistry};
use crate::resources::{merge_all, CustomEntityParserUsage, RequiredResources, Requirement, ResourceKind};
use crate::traits::{same_dict, FromConfigDict, ProcessingUnitConfig};

use super::{DeterministicIntentParserConfig, ProbabilisticIntentParserConfig};

/// A child of the engine pipeline, either already built or still in
/// dictionary form.
pub enum UnitConfigInput {
    Config(Box<dyn ProcessingUnitConfig>),
    Dict(ConfigDict),
}

impl UnitConfigInput {
    fn into_config<F>(self, rebuild: &F) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError>
    where
        F: Fn(&ConfigDict) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError>,
    {
        match self {
            UnitConfigInput::Config(config) => Ok(config),
            UnitConfigInput::Dict(dict) => rebuild(&dict),
        }
    }
}

impl From<Box<dyn ProcessingUnitConfig>> for UnitConfigInput {
    fn from(config: Box<dyn ProcessingUnitConfig>) -> Self {
        UnitConfigInput::Config(config)
    }
}

impl From<ConfigDict> for UnitConfigInput {
    fn from(dict: ConfigDict) -> Self {
        UnitConfigInput::Dict(dict)
    }
}

/// Configuration of the whole NLU engine: an ordered pipeline of intent parsers.
///
/// The order of `intent_parsers_configs` is the order in which the engine
/// calls each parser, and is preserved exactly through serialization.
///
/// # Example
/// ```yaml
/// unit_name: nlu_engine
/// intent_parsers_configs:
///   - unit_name: deterministic_intent_parser
///     max_queries: 100
///     max_pattern_length: 1000
///     ignore_stop_words: false
/// ```
#[derive(Debug, Clone)]
pub struct NluEngineConfig {
    intent_parsers_configs: Vec<Box<dyn ProcessingUnitConfig>>,
}

impl NluEngineConfig {
    /// Build an engine config from explicit children, or from the default
    /// pipeline when `intent_parsers_configs` is `None`.
    ///
    /// Dictionary children are reconstructed through the global unit
    /// registry; the first one that fails aborts the whole construction.
    pub fn new(intent_parsers_configs: Option<Vec<UnitConfigInput>>) -> Result<Self, ConfigError> {
        Self::build(intent_parsers_configs, &|dict: &ConfigDict| registry::unit_from_dict(dict))
    }

    /// Like [`NluEngineConfig::new`], with dictionary children rebuilt
    /// through `registry`.
    pub fn new_in(
        intent_parsers_configs: Option<Vec<UnitConfigInput>>,
        registry: &UnitRegistry,
    ) -> Result<Self, ConfigError> {
        Self::build(intent_parsers_configs, &|dict: &ConfigDict| registry.from_dict(dict))
    }

    fn build<F>(intent_parsers_configs: Option<Vec<UnitConfigInput>>, rebuild: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&ConfigDict) -> Result<Box<dyn ProcessingUnitConfig>, ConfigError>,
    {
        let intent_parsers_configs = match intent_parsers_configs {
            Some(inputs) => inputs
                .into_iter()
                .map(|input| input.into_config(rebuild))
                .collect::<Result<Vec<_>, _>>()?,
            None => Self::default_pipeline(),
        };

        Ok(Self {
            intent_parsers_configs,
        })
    }

    /// Build an engine config from already-built children, in order.
    pub fn with_parsers(intent_parsers_configs: Vec<Box<dyn ProcessingUnitConfig>>) -> Self {
        Self {
            intent_parsers_configs,
        }
    }

    /// The canonical pipeline: a deterministic parser first, then a
    /// probabilistic parser, both with default settings.
    pub fn default_pipeline() -> Vec<Box<dyn ProcessingUnitConfig>> {
        vec![
            Box::new(DeterministicIntentParserConfig::default()),
            Box::new(ProbabilisticIntentParserConfig::default()),
        ]
    }

    pub fn intent_parsers_configs(&self) -> &[Box<dyn ProcessingUnitConfig>] {
        &self.intent_parsers_configs
    }
}

impl Default for NluEngineConfig {
    fn default() -> Self {
        Self::with_parsers(Self::default_pipeline())
    }
}

impl PartialEq for NluEngineConfig {
    fn eq(&self, other: &Self) -> bool {
        same_dict(self, other)
    }
}

impl ProcessingUnitConfig for NluEngineConfig {
    fn unit_name(&self) -> &'static str {
        Self::UNIT_NAME
    }

    fn get_required_resources(&self) -> Result<RequiredResources, ResourceConflictError> {
        // Custom slot values are resolved without stemming
        let own = RequiredResources::from([(
            ResourceKind::CustomEntityParserUsage,
            Requirement::Usage(CustomEntityParserUsage::WithoutStems),
        )]);
        let per_child = self
            .intent_parsers_configs
            .iter()
            .map(|config| config.get_required_resources())
            .collect::<Result<Vec<_>, _>>()?;
        let resources = merge_all(own, &per_child)?;

        ResourcesResolved {
            unit_name: Self::UNIT_NAME,
            child_count: self.intent_parsers_configs.len(),
            resources: &resources,
        }
        .log();

        Ok(resources)
    }

    fn to_dict(&self) -> Result<ConfigDict, MalformedConfigError> {
        let children = self
            .intent_parsers_configs
            .iter()
            .map(|config| config.to_dict())
            .collect::<Result<Vec<_>, _>>()?;

        unit_dict(Self::UNIT_NAME)
            .dicts("intent_parsers_configs", children)
            .build()
    }

    fn clone_boxed(&self) -> Box<dyn ProcessingUnitConfig> {
        Box::new(self.clone())
    }
}

impl FromConfigDict for NluEngineConfig {
    const UNIT_NAME: &'static str = "nlu_engine";

    fn from_dict(dict: &ConfigDict) -> Result<Self, ConfigError> {
        Self::from_dict_in(dict, registry::global()?)
    }

    fn from_dict_in(dict: &ConfigDict, registry: &UnitRegistry) -> Result<Self, ConfigError> {
        let mut reader = DictReader::new(Self::UNIT_NAME, dict)?;
        let children = reader.required_dicts("intent_parsers_configs")?;
        reader.finish()?;

        Self::new_in(Some(children.into_iter().map(UnitConfigInput::from).collect()), registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KeyProblem;
    use crate::registry::construct;
    use crate::units::{CrfSlotFillerConfig, LogRegIntentClassifierConfig};
    use serde_json::{json, Value};

    fn unit_names(config: &NluEngineConfig) -> Vec<&'static str> {
        config
            .intent_parsers_configs()
            .iter()
            .map(|c| c.unit_name())
            .collect()
    }

    #[test]
    fn test_default_pipeline() {
        let config = NluEngineConfig::new(None).unwrap();
        assert_eq!(
            unit_names(&config),
            vec!["deterministic_intent_parser", "probabilistic_intent_parser"]
        );
        assert_eq!(config, NluEngineConfig::default());

        let dict = config.to_dict().unwrap();
        let children = dict["intent_parsers_configs"].as_array().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0]["unit_name"], json!("deterministic_intent_parser"));
        assert_eq!(children[1]["unit_name"], json!("probabilistic_intent_parser"));
    }

    #[test]
    fn test_explicit_empty_pipeline_stays_empty() {
        let config = NluEngineConfig::new(Some(vec![])).unwrap();
        assert!(config.intent_parsers_configs().is_empty());

        // The engine's own requirement is kept even without children.
        let resources = config.get_required_resources().unwrap();
        assert_eq!(
            resources.custom_entity_parser_usage(),
            Some(CustomEntityParserUsage::WithoutStems)
        );
        assert_eq!(resources.len(), 1);
    }

    #[test]
    fn test_order_is_preserved_through_round_trip() {
        let config = NluEngineConfig::with_parsers(vec![
            Box::new(ProbabilisticIntentParserConfig::default()),
            Box::new(DeterministicIntentParserConfig {
                max_queries: 5,
                ..Default::default()
            }),
            Box::new(DeterministicIntentParserConfig::default()),
        ]);

        let dict = config.to_dict().unwrap();
        let restored = NluEngineConfig::from_dict(&dict).unwrap();

        assert_eq!(restored, config);
        assert_eq!(
            unit_names(&restored),
            vec![
                "probabilistic_intent_parser",
                "deterministic_intent_parser",
                "deterministic_intent_parser"
            ]
        );
        assert_eq!(restored.intent_parsers_configs()[1].to_dict().unwrap()["max_queries"], json!(5));
    }

    #[test]
    fn test_resources_do_not_depend_on_child_order() {
        let children = || -> Vec<Box<dyn ProcessingUnitConfig>> {
            vec![
                Box::new(DeterministicIntentParserConfig {
                    ignore_stop_words: true,
                    ..Default::default()
                }),
                Box::new(ProbabilisticIntentParserConfig::default()),
                Box::new(CrfSlotFillerConfig::default()),
            ]
        };

        let forward = NluEngineConfig::with_parsers(children());
        let mut reversed_children = children();
        reversed_children.reverse();
        let backward = NluEngineConfig::with_parsers(reversed_children);

        let forward_resources = forward.get_required_resources().unwrap();
        assert_eq!(forward_resources, backward.get_required_resources().unwrap());

        // Unstemmed custom entity resolution wins over the slot filler's stemmed matching.
        assert_eq!(
            forward_resources.custom_entity_parser_usage(),
            Some(CustomEntityParserUsage::WithoutStems)
        );
        assert!(forward_resources.needs_noise());
        assert!(forward_resources.gazetteers().contains("top_10000_words_stemmed"));
    }

    #[test]
    fn test_dictionary_children_are_coerced() {
        let dict = DeterministicIntentParserConfig::default().to_dict().unwrap();
        let config = NluEngineConfig::new(Some(vec![
            UnitConfigInput::from(dict),
            UnitConfigInput::from(Box::new(LogRegIntentClassifierConfig::default()) as Box<dyn ProcessingUnitConfig>),
        ]))
        .unwrap();

        assert_eq!(
            unit_names(&config),
            vec!["deterministic_intent_parser", "log_reg_intent_classifier"]
        );
    }

    #[test]
    fn test_malformed_child_aborts_construction() {
        let mut child = DeterministicIntentParserConfig::default().to_dict().unwrap();
        child.insert("bogus".to_string(), json!(1));

        let err = NluEngineConfig::new(Some(vec![UnitConfigInput::from(child)])).unwrap_err();
        match err {
            ConfigError::Malformed(err) => {
                assert_eq!(err.unit_name, "deterministic_intent_parser");
                assert_eq!(err.key, "bogus");
                assert_eq!(err.problem, KeyProblem::Unexpected);
            }
            other => panic!("Expected a malformed config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_dict_requires_children_key() {
        let dict = match json!({"unit_name": "nlu_engine"}) {
            Value::Object(dict) => dict,
            _ => unreachable!(),
        };

        match NluEngineConfig::from_dict(&dict).unwrap_err() {
            ConfigError::Malformed(err) => {
                assert_eq!(err.key, "intent_parsers_configs");
                assert_eq!(err.problem, KeyProblem::Missing);
            }
            other => panic!("Expected a malformed config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_dict_does_not_mutate_input() {
        let dict = NluEngineConfig::default().to_dict().unwrap();
        let before = dict.clone();

        NluEngineConfig::from_dict(&dict).unwrap();

        assert_eq!(dict, before);
        assert!(dict.contains_key("unit_name"));
    }

    #[test]
    fn test_restricted_registry_rejects_unregistered_children() {
        let registry = UnitRegistry::builder()
            .register(NluEngineConfig::UNIT_NAME, construct::<NluEngineConfig>)
            .unwrap()
            .build();
        let dict = NluEngineConfig::default().to_dict().unwrap();

        match registry.from_dict(&dict).unwrap_err() {
            ConfigError::UnknownUnit(err) => {
                assert_eq!(err.unit_name, "deterministic_intent_parser")
            }
            other => panic!("Expected an unknown unit error, got {:?}", other),
        }

        let registry = UnitRegistry::builder()
            .register(NluEngineConfig::UNIT_NAME, construct::<NluEngineConfig>)
            .unwrap()
            .register(
                DeterministicIntentParserConfig::UNIT_NAME,
                construct::<DeterministicIntentParserConfig>,
            )
            .unwrap()
            .build();
        let config = NluEngineConfig::with_parsers(vec![Box::new(DeterministicIntentParserConfig::default())]);

        let restored = registry.from_dict(&config.to_dict().unwrap()).unwrap();
        assert_eq!(restored.unit_name(), "nlu_engine");
    }
}
