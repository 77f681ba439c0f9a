// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_CRF_ALGORITHM, DEFAULT_CRF_C1, DEFAULT_CRF_C2};
use crate::config::{unit_dict, ConfigDict, DictReader};
use crate::errors::{ConfigError, MalformedConfigError, ResourceConflictError};
use crate::resources::{merge_all, RequiredResources};
use crate::traits::{FromConfigDict, ProcessingUnitConfig};

use super::data_augmentation::SlotFillerDataAugmentationConfig;
use super::feature_factories::{default_feature_factory_configs, FeatureFactoryConfig};

/// Token labelling scheme, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaggingScheme {
    Io,
    Bio,
    Bilou,
}

impl From<TaggingScheme> for u8 {
    fn from(scheme: TaggingScheme) -> Self {
        match scheme {
            TaggingScheme::Io => 0,
            TaggingScheme::Bio => 1,
            TaggingScheme::Bilou => 2,
        }
    }
}

impl TryFrom<u8> for TaggingScheme {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TaggingScheme::Io),
            1 => Ok(TaggingScheme::Bio),
            2 => Ok(TaggingScheme::Bilou),
            other => Err(format!("{} is not a tagging scheme code (0=IO, 1=BIO, 2=BILOU)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrfArgs {
    pub c1: f64,
    pub c2: f64,
    pub algorithm: String,
}

impl Default for CrfArgs {
    fn default() -> Self {
        Self {
            c1: DEFAULT_CRF_C1,
            c2: DEFAULT_CRF_C2,
            algorithm: DEFAULT_CRF_ALGORITHM.to_string(),
        }
    }
}

/// Configuration of the CRF slot filler.
#[derive(Debug, Clone, PartialEq)]
pub struct CrfSlotFillerConfig {
    pub feature_factory_configs: Vec<FeatureFactoryConfig>,
    pub tagging_scheme: TaggingScheme,
    pub crf_args: CrfArgs,
    pub data_augmentation_config: SlotFillerDataAugmentationConfig,
    pub random_seed: Option<u64>,
}

impl Default for CrfSlotFillerConfig {
    fn default() -> Self {
        Self {
            feature_factory_configs: default_feature_factory_configs(),
            tagging_scheme: TaggingScheme::Bio,
            crf_args: CrfArgs::default(),
            data_augmentation_config: SlotFillerDataAugmentationConfig::default(),
            random_seed: None,
        }
    }
}

impl ProcessingUnitConfig for CrfSlotFillerConfig {
    fn unit_name(&self) -> &'static str {
        Self::UNIT_NAME
    }

    fn get_required_resources(&self) -> Result<RequiredResources, ResourceConflictError> {
        let per_factory: Vec<RequiredResources> = self
            .feature_factory_configs
            .iter()
            .map(FeatureFactoryConfig::required_resources)
            .collect();
        merge_all(RequiredResources::new(), &per_factory)
    }

    fn to_dict(&self) -> Result<ConfigDict, MalformedConfigError> {
        unit_dict(Self::UNIT_NAME)
            .field("feature_factory_configs", &self.feature_factory_configs)
            .field("tagging_scheme", &self.tagging_scheme)
            .field("crf_args", &self.crf_args)
            .field("data_augmentation_config", &self.data_augmentation_config)
            .optional("random_seed", &self.random_seed)
            .build()
    }

    fn clone_boxed(&self) -> Box<dyn ProcessingUnitConfig> {
        Box::new(self.clone())
    }
}

impl FromConfigDict for CrfSlotFillerConfig {
    const UNIT_NAME: &'static str = "crf_slot_filler";

    fn from_dict(dict: &ConfigDict) -> Result<Self, ConfigError> {
        let mut reader = DictReader::new(Self::UNIT_NAME, dict)?;
        let config = Self {
            feature_factory_configs: reader.required("feature_factory_configs")?,
            tagging_scheme: reader.required("tagging_scheme")?,
            crf_args: reader.required("crf_args")?,
            data_augmentation_config: reader.required("data_augmentation_config")?,
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
    use crate::resources::CustomEntityParserUsage;
    use crate::units::feature_factories::{EntityMatchArgs, OffsetArgs};
    use serde_json::json;

    #[test]
    fn test_default_round_trip() {
        let config = CrfSlotFillerConfig::default();
        let dict = config.to_dict().unwrap();

        assert_eq!(dict["tagging_scheme"], json!(1));
        assert_eq!(dict["crf_args"], json!({"c1": 0.1, "c2": 0.1, "algorithm": "lbfgs"}));

        let restored = CrfSlotFillerConfig::from_dict(&dict).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_default_features_resources() {
        let resources = CrfSlotFillerConfig::default().get_required_resources().unwrap();

        assert!(resources.needs_stemming());
        assert!(resources.gazetteers().contains("top_10000_words_stemmed"));
        assert!(resources.word_clusters().contains("brown_clusters"));
        assert_eq!(
            resources.custom_entity_parser_usage(),
            Some(CustomEntityParserUsage::WithStems)
        );
    }

    #[test]
    fn test_no_features_need_no_resources() {
        let config = CrfSlotFillerConfig {
            feature_factory_configs: vec![FeatureFactoryConfig::IsDigit(OffsetArgs { offsets: vec![0] })],
            ..Default::default()
        };
        assert!(config.get_required_resources().unwrap().is_empty());
    }

    #[test]
    fn test_unstemmed_entity_match_dominates_stemmed() {
        let config = CrfSlotFillerConfig {
            feature_factory_configs: vec![
                FeatureFactoryConfig::EntityMatch(EntityMatchArgs { use_stemming: true, offsets: vec![0] }),
                FeatureFactoryConfig::EntityMatch(EntityMatchArgs { use_stemming: false, offsets: vec![0] }),
            ],
            ..Default::default()
        };

        let resources = config.get_required_resources().unwrap();
        assert_eq!(
            resources.custom_entity_parser_usage(),
            Some(CustomEntityParserUsage::WithoutStems)
        );
    }

    #[test]
    fn test_invalid_tagging_scheme_is_named() {
        let mut dict = CrfSlotFillerConfig::default().to_dict().unwrap();
        dict.insert("tagging_scheme".to_string(), json!(7));

        match CrfSlotFillerConfig::from_dict(&dict).unwrap_err() {
            ConfigError::Malformed(err) => {
                assert_eq!(err.key, "tagging_scheme");
                assert!(matches!(err.problem, KeyProblem::InvalidValue(_)));
            }
            other => panic!("Expected a malformed config error, got {:?}", other),
        }
    }
}
