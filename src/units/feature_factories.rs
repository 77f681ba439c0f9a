// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Feature factory configs used by the CRF slot filler.
//!
//! Serialized as `{"factory_name": "<name>", "args": {...}}`. Each factory
//! declares the resources its features are computed from.

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_COMMON_WORDS_GAZETTEER, DEFAULT_WORD_CLUSTERS};
use crate::resources::{CustomEntityParserUsage, RequiredResources, Requirement, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "factory_name", content = "args", rename_all = "snake_case", deny_unknown_fields)]
pub enum FeatureFactoryConfig {
    Ngram(NgramArgs),
    ShapeNgram(ShapeNgramArgs),
    IsDigit(OffsetArgs),
    IsFirst(OffsetArgs),
    IsLast(OffsetArgs),
    WordCluster(WordClusterArgs),
    EntityMatch(EntityMatchArgs),
    BuiltinEntityMatch(OffsetArgs),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NgramArgs {
    pub n: usize,
    pub use_stemming: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_words_gazetteer_name: Option<String>,
    pub offsets: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeNgramArgs {
    pub n: usize,
    pub offsets: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetArgs {
    pub offsets: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordClusterArgs {
    pub cluster_name: String,
    pub use_stemming: bool,
    pub offsets: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityMatchArgs {
    pub use_stemming: bool,
    pub offsets: Vec<i32>,
}

impl FeatureFactoryConfig {
    pub fn factory_name(&self) -> &'static str {
        match self {
            FeatureFactoryConfig::Ngram(_) => "ngram",
            FeatureFactoryConfig::ShapeNgram(_) => "shape_ngram",
            FeatureFactoryConfig::IsDigit(_) => "is_digit",
            FeatureFactoryConfig::IsFirst(_) => "is_first",
            FeatureFactoryConfig::IsLast(_) => "is_last",
            FeatureFactoryConfig::WordCluster(_) => "word_cluster",
            FeatureFactoryConfig::EntityMatch(_) => "entity_match",
            FeatureFactoryConfig::BuiltinEntityMatch(_) => "builtin_entity_match",
        }
    }

    pub fn required_resources(&self) -> RequiredResources {
        match self {
            FeatureFactoryConfig::Ngram(args) => {
                let resources = RequiredResources::new()
                    .with(ResourceKind::Stemming, Requirement::Flag(args.use_stemming));
                match &args.common_words_gazetteer_name {
                    Some(name) => resources.with(
                        ResourceKind::GazetteerNames,
                        Requirement::names([name.as_str()]),
                    ),
                    None => resources,
                }
            }
            FeatureFactoryConfig::WordCluster(args) => RequiredResources::from([
                (ResourceKind::WordClusters, Requirement::names([args.cluster_name.as_str()])),
                (ResourceKind::Stemming, Requirement::Flag(args.use_stemming)),
            ]),
            FeatureFactoryConfig::EntityMatch(args) => {
                let usage = if args.use_stemming {
                    CustomEntityParserUsage::WithStems
                } else {
                    CustomEntityParserUsage::WithoutStems
                };
                RequiredResources::from([
                    (ResourceKind::Stemming, Requirement::Flag(args.use_stemming)),
                    (ResourceKind::CustomEntityParserUsage, Requirement::Usage(usage)),
                ])
            }
            FeatureFactoryConfig::ShapeNgram(_)
            | FeatureFactoryConfig::IsDigit(_)
            | FeatureFactoryConfig::IsFirst(_)
            | FeatureFactoryConfig::IsLast(_)
            | FeatureFactoryConfig::BuiltinEntityMatch(_) => RequiredResources::new(),
        }
    }
}

/// The feature set used when a slot filler is built without explicit features.
pub fn default_feature_factory_configs() -> Vec<FeatureFactoryConfig> {
    vec![
        FeatureFactoryConfig::Ngram(NgramArgs {
            n: 1,
            use_stemming: true,
            common_words_gazetteer_name: Some(DEFAULT_COMMON_WORDS_GAZETTEER.to_string()),
            offsets: vec![-2, -1, 0, 1, 2],
        }),
        FeatureFactoryConfig::Ngram(NgramArgs {
            n: 2,
            use_stemming: true,
            common_words_gazetteer_name: Some(DEFAULT_COMMON_WORDS_GAZETTEER.to_string()),
            offsets: vec![-2, 1],
        }),
        FeatureFactoryConfig::ShapeNgram(ShapeNgramArgs { n: 1, offsets: vec![0] }),
        FeatureFactoryConfig::ShapeNgram(ShapeNgramArgs { n: 2, offsets: vec![-1, 0] }),
        FeatureFactoryConfig::ShapeNgram(ShapeNgramArgs { n: 3, offsets: vec![-1] }),
        FeatureFactoryConfig::IsDigit(OffsetArgs { offsets: vec![-1, 0, 1] }),
        FeatureFactoryConfig::IsFirst(OffsetArgs { offsets: vec![-2, -1, 0] }),
        FeatureFactoryConfig::IsLast(OffsetArgs { offsets: vec![0, 1, 2] }),
        FeatureFactoryConfig::WordCluster(WordClusterArgs {
            cluster_name: DEFAULT_WORD_CLUSTERS.to_string(),
            use_stemming: false,
            offsets: vec![-2, -1, 0, 1],
        }),
        FeatureFactoryConfig::EntityMatch(EntityMatchArgs {
            use_stemming: true,
            offsets: vec![-2, -1, 0],
        }),
        FeatureFactoryConfig::BuiltinEntityMatch(OffsetArgs {
            offsets: vec![-2, -1, 0],
        }),
    ]
}
