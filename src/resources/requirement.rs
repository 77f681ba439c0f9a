// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The closed set of external language resources a unit can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    CustomEntityParserUsage,
    Stemming,
    GazetteerNames,
    WordClusters,
    StopWords,
    Noise,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::CustomEntityParserUsage,
        ResourceKind::Stemming,
        ResourceKind::GazetteerNames,
        ResourceKind::WordClusters,
        ResourceKind::StopWords,
        ResourceKind::Noise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::CustomEntityParserUsage => "custom-entity-parser-usage",
            ResourceKind::Stemming => "stemming",
            ResourceKind::GazetteerNames => "gazetteer-names",
            ResourceKind::WordClusters => "word-clusters",
            ResourceKind::StopWords => "stop-words",
            ResourceKind::Noise => "noise",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the custom entity parser must be built.
///
/// Variants are declared in precedence order: when two units disagree the
/// later variant wins (see [`CustomEntityParserUsage::merge`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomEntityParserUsage {
    WithStems,
    WithoutStems,
    WithAndWithoutStems,
}

impl CustomEntityParserUsage {
    /// Unstemmed matching must never be replaced by stemmed matching, so
    /// `WithoutStems` beats `WithStems`, and `WithAndWithoutStems` covers both.
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for CustomEntityParserUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CustomEntityParserUsage::WithStems => "WITH_STEMS",
            CustomEntityParserUsage::WithoutStems => "WITHOUT_STEMS",
            CustomEntityParserUsage::WithAndWithoutStems => "WITH_AND_WITHOUT_STEMS",
        };
        f.write_str(s)
    }
}

/// A single requirement descriptor: a scalar mode, a flag, or a set of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    Usage(CustomEntityParserUsage),
    Flag(bool),
    Names(BTreeSet<String>),
}

impl Requirement {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Requirement::Names(names.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Usage(usage) => write!(f, "{}", usage),
            Requirement::Flag(flag) => write!(f, "{}", flag),
            Requirement::Names(names) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                write!(f, "{{{}}}", names.join(", "))
            }
        }
    }
}

/// Which external resources are needed, and how.
///
/// A value is never changed once produced; combining requirements always goes
/// through [`merge_required_resources`](super::merge_required_resources), which
/// returns a fresh map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredResources(BTreeMap<ResourceKind, Requirement>);

impl RequiredResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with `kind` set to `requirement`.
    pub fn with(mut self, kind: ResourceKind, requirement: Requirement) -> Self {
        self.0.insert(kind, requirement);
        self
    }

    pub fn get(&self, kind: ResourceKind) -> Option<&Requirement> {
        self.0.get(&kind)
    }

    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.0.contains_key(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &Requirement)> {
        self.0.iter().map(|(kind, requirement)| (*kind, requirement))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn custom_entity_parser_usage(&self) -> Option<CustomEntityParserUsage> {
        match self.get(ResourceKind::CustomEntityParserUsage) {
            Some(Requirement::Usage(usage)) => Some(*usage),
            _ => None,
        }
    }

    pub fn needs_stemming(&self) -> bool {
        self.flag(ResourceKind::Stemming)
    }

    pub fn needs_stop_words(&self) -> bool {
        self.flag(ResourceKind::StopWords)
    }

    pub fn needs_noise(&self) -> bool {
        self.flag(ResourceKind::Noise)
    }

    pub fn gazetteers(&self) -> BTreeSet<String> {
        self.names(ResourceKind::GazetteerNames)
    }

    pub fn word_clusters(&self) -> BTreeSet<String> {
        self.names(ResourceKind::WordClusters)
    }

    fn flag(&self, kind: ResourceKind) -> bool {
        matches!(self.get(kind), Some(Requirement::Flag(true)))
    }

    fn names(&self, kind: ResourceKind) -> BTreeSet<String> {
        match self.get(kind) {
            Some(Requirement::Names(names)) => names.clone(),
            _ => BTreeSet::new(),
        }
    }
}

impl FromIterator<(ResourceKind, Requirement)> for RequiredResources {
    fn from_iter<T: IntoIterator<Item = (ResourceKind, Requirement)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(ResourceKind, Requirement); N]> for RequiredResources {
    fn from(entries: [(ResourceKind, Requirement); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_match_serialized_form() {
        for kind in ResourceKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn test_usage_precedence() {
        use CustomEntityParserUsage::*;
        assert_eq!(WithStems.merge(WithoutStems), WithoutStems);
        assert_eq!(WithoutStems.merge(WithStems), WithoutStems);
        assert_eq!(WithStems.merge(WithAndWithoutStems), WithAndWithoutStems);
        assert_eq!(WithStems.merge(WithStems), WithStems);
    }

    #[test]
    fn test_typed_accessors() {
        let resources = RequiredResources::from([
            (
                ResourceKind::CustomEntityParserUsage,
                Requirement::Usage(CustomEntityParserUsage::WithoutStems),
            ),
            (ResourceKind::Stemming, Requirement::Flag(true)),
            (ResourceKind::StopWords, Requirement::Flag(false)),
            (ResourceKind::GazetteerNames, Requirement::names(["cities"])),
        ]);

        assert_eq!(
            resources.custom_entity_parser_usage(),
            Some(CustomEntityParserUsage::WithoutStems)
        );
        assert!(resources.needs_stemming());
        assert!(!resources.needs_stop_words());
        assert!(!resources.needs_noise());
        assert!(resources.gazetteers().contains("cities"));
        assert!(resources.word_clusters().is_empty());
        assert_eq!(resources.len(), 4);
    }

    #[test]
    fn test_serializes_as_flat_mapping() {
        let resources = RequiredResources::new()
            .with(ResourceKind::Noise, Requirement::Flag(true))
            .with(ResourceKind::WordClusters, Requirement::names(["brown_clusters"]))
            .with(
                ResourceKind::CustomEntityParserUsage,
                Requirement::Usage(CustomEntityParserUsage::WithStems),
            );

        let json = serde_json::to_value(&resources).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "custom-entity-parser-usage": "WITH_STEMS",
                "word-clusters": ["brown_clusters"],
                "noise": true,
            })
        );
    }
}
