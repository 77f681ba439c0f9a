// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Data augmentation settings nested inside classifier and slot filler configs.

use serde::{Deserialize, Serialize};

use crate::config::consts::{
    DEFAULT_CAPITALIZATION_RATIO, DEFAULT_INTENT_MIN_UTTERANCES, DEFAULT_INTENT_NOISE_FACTOR,
    DEFAULT_SLOT_FILLER_MIN_UTTERANCES,
};

/// Augmentation applied to the intent classifier training set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntentClassifierDataAugmentationConfig {
    pub min_utterances: usize,
    pub noise_factor: usize,
    pub add_builtin_entities_examples: bool,
    pub unknown_word_prob: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_words_replacement_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unknown_words: Option<usize>,
}

impl Default for IntentClassifierDataAugmentationConfig {
    fn default() -> Self {
        Self {
            min_utterances: DEFAULT_INTENT_MIN_UTTERANCES,
            noise_factor: DEFAULT_INTENT_NOISE_FACTOR,
            add_builtin_entities_examples: true,
            unknown_word_prob: 0.0,
            unknown_words_replacement_string: None,
            max_unknown_words: None,
        }
    }
}

/// Augmentation applied to the slot filler training set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotFillerDataAugmentationConfig {
    pub min_utterances: usize,
    pub capitalization_ratio: f64,
    pub add_builtin_entities_examples: bool,
}

impl Default for SlotFillerDataAugmentationConfig {
    fn default() -> Self {
        Self {
            min_utterances: DEFAULT_SLOT_FILLER_MIN_UTTERANCES,
            capitalization_ratio: DEFAULT_CAPITALIZATION_RATIO,
            add_builtin_entities_examples: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_options_are_omitted() {
        let value = serde_json::to_value(IntentClassifierDataAugmentationConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "min_utterances": 20,
                "noise_factor": 5,
                "add_builtin_entities_examples": true,
                "unknown_word_prob": 0.0,
            })
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = serde_json::from_value::<SlotFillerDataAugmentationConfig>(json!({
            "min_utterances": 10,
            "capitalization_ratio": 0.5,
            "add_builtin_entities_examples": false,
            "noise_factor": 2,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("noise_factor"));
    }
}
