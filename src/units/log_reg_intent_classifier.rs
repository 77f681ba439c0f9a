// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_NOISE_REWEIGHT_FACTOR, DEFAULT_PVALUE_THRESHOLD};
use crate::config::{unit_dict, ConfigDict, DictReader};
use crate::errors::{ConfigError, MalformedConfigError, ResourceConflictError};
use crate::resources::{merge_required_resources, RequiredResources, Requirement, ResourceKind};
use crate::traits::{FromConfigDict, ProcessingUnitConfig};

use super::data_augmentation::IntentClassifierDataAugmentationConfig;

/// Text featurizer settings of the intent classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturizerConfig {
    pub use_stemming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_clusters_name: Option<String>,
    pub pvalue_threshold: f64,
    pub added_cooccurrence_feature_ratio: f64,
}

impl Default for FeaturizerConfig {
    fn default() -> Self {
        Self {
            use_stemming: false,
            word_clusters_name: None,
            pvalue_threshold: DEFAULT_PVALUE_THRESHOLD,
            added_cooccurrence_feature_ratio: 0.0,
        }
    }
}

impl FeaturizerConfig {
    pub fn required_resources(&self) -> RequiredResources {
        let resources = RequiredResources::new()
            .with(ResourceKind::Stemming, Requirement::Flag(self.use_stemming));
        match &self.word_clusters_name {
            Some(name) => resources.with(ResourceKind::WordClusters, Requirement::names([name.as_str()])),
            None => resources,
        }
    }
}

/// Configuration of the logistic regression intent classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRegIntentClassifierConfig {
    pub data_augmentation_config: IntentClassifierDataAugmentationConfig,
    pub featurizer_config: FeaturizerConfig,
    pub noise_reweight_factor: f64,
    pub random_seed: Option<u64>,
}

impl Default for LogRegIntentClassifierConfig {
    fn default() -> Self {
        Self {
            data_augmentation_config: IntentClassifierDataAugmentationConfig::default(),
            featurizer_config: FeaturizerConfig::default(),
            noise_reweight_factor: DEFAULT_NOISE_REWEIGHT_FACTOR,
            random_seed: None,
        }
    }
}

impl ProcessingUnitConfig for LogRegIntentClassifierConfig {
    fn unit_name(&self) -> &'static str {
        Self::UNIT_NAME
    }

    fn get_required_resources(&self) -> Result<RequiredResources, ResourceConflictError> {
        // Noise utterances feed the "no intent" class
        let own = RequiredResources::from([
            (ResourceKind::Noise, Requirement::Flag(true)),
            (ResourceKind::StopWords, Requirement::Flag(true)),
        ]);
        merge_required_resources(&own, &self.featurizer_config.required_resources())
    }

    fn to_dict(&self) -> Result<ConfigDict, MalformedConfigError> {
        unit_dict(Self::UNIT_NAME)
            .field("data_augmentation_config", &self.data_augmentation_config)
            .field("featurizer_config", &self.featurizer_config)
            .field("noise_reweight_factor", &self.noise_reweight_factor)
            .optional("random_seed", &self.random_seed)
            .build()
    }

    fn clone_boxed(&self) -> Box<dyn ProcessingUnitConfig> {
        Box::new(self.clone())
    }
}

impl FromConfigDict for LogRegIntentClassifierConfig {
    const UNIT_NAME: &'static str = "log_reg_intent_classifier";

    fn from_dict(dict: &ConfigDict) -> Result<Self, ConfigError> {
        let mut reader = DictReader::new(Self::UNIT_NAME, dict)?;
        let config = Self {
            data_augmentation_config: reader.required("data_augmentation_config")?,
            featurizer_config: reader.required("featurizer_config")?,
            noise_reweight_factor: reader.required("noise_reweight_factor")?,
            random_seed: reader.optional("random_seed")?,
        };
        reader.finish()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::KeyProblem;
    use serde_json::json;

    #[test]
    fn test_round_trip_with_seed_and_clusters() {
        let config = LogRegIntentClassifierConfig {
            featurizer_config: FeaturizerConfig {
                use_stemming: true,
                word_clusters_name: Some("brown_clusters".to_string()),
                ..Default::default()
            },
            noise_reweight_factor: 0.5,
            random_seed: Some(42),
            ..Default::default()
        };

        let dict = config.to_dict().unwrap();
        assert_eq!(dict["random_seed"], json!(42));

        let restored = LogRegIntentClassifierConfig::from_dict(&dict).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_unset_seed_is_omitted_and_accepts_null() {
        let mut dict = LogRegIntentClassifierConfig::default().to_dict().unwrap();
        assert!(!dict.contains_key("random_seed"));

        dict.insert("random_seed".to_string(), serde_json::Value::Null);
        let restored = LogRegIntentClassifierConfig::from_dict(&dict).unwrap();
        assert_eq!(restored.random_seed, None);
    }

    #[test]
    fn test_required_resources() {
        let config = LogRegIntentClassifierConfig {
            featurizer_config: FeaturizerConfig {
                use_stemming: true,
                word_clusters_name: Some("brown_clusters".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let resources = config.get_required_resources().unwrap();
        assert!(resources.needs_noise());
        assert!(resources.needs_stop_words());
        assert!(resources.needs_stemming());
        assert!(resources.word_clusters().contains("brown_clusters"));
        assert_eq!(resources.custom_entity_parser_usage(), None);
    }

    #[test]
    fn test_unknown_nested_field_names_enclosing_key() {
        let mut dict = LogRegIntentClassifierConfig::default().to_dict().unwrap();
        dict["featurizer_config"]["sublinear_tf"] = json!(true);

        let err = LogRegIntentClassifierConfig::from_dict(&dict).unwrap_err();
        match err {
            ConfigError::Malformed(err) => {
                assert_eq!(err.key, "featurizer_config");
                match err.problem {
                    KeyProblem::InvalidValue(reason) => assert!(reason.contains("sublinear_tf")),
                    other => panic!("Expected an invalid value, got {:?}", other),
                }
            }
            other => panic!("Expected a malformed config error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_parameters_have_no_dictionary_form() {
        let config = LogRegIntentClassifierConfig {
            noise_reweight_factor: f64::NAN,
            ..Default::default()
        };

        let err = config.to_dict().unwrap_err();
        assert_eq!(err.unit_name, "log_reg_intent_classifier");
        assert_eq!(err.key, "noise_reweight_factor");
        assert!(matches!(err.problem, KeyProblem::InvalidValue(_)));

        let config = LogRegIntentClassifierConfig {
            featurizer_config: FeaturizerConfig {
                pvalue_threshold: f64::INFINITY,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.to_dict().unwrap_err().key, "featurizer_config");
    }
}
