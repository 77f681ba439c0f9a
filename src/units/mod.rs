// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Concrete processing unit configs.
//!
//! | unit_name | kind |
//! |---|---|
//! | `nlu_engine` | composite: ordered intent parsers |
//! | `deterministic_intent_parser` | leaf |
//! | `probabilistic_intent_parser` | composite: classifier + slot filler |
//! | `log_reg_intent_classifier` | leaf |
//! | `crf_slot_filler` | leaf |

pub mod crf_slot_filler;
pub mod data_augmentation;
pub mod deterministic_intent_parser;
pub mod feature_factories;
pub mod log_reg_intent_classifier;
pub mod nlu_engine;
pub mod probabilistic_intent_parser;

pub use crf_slot_filler::{CrfArgs, CrfSlotFillerConfig, TaggingScheme};
pub use data_augmentation::{IntentClassifierDataAugmentationConfig, SlotFillerDataAugmentationConfig};
pub use deterministic_intent_parser::DeterministicIntentParserConfig;
pub use feature_factories::FeatureFactoryConfig;
pub use log_reg_intent_classifier::{FeaturizerConfig, LogRegIntentClassifierConfig};
pub use nlu_engine::{NluEngineConfig, UnitConfigInput};
pub use probabilistic_intent_parser::ProbabilisticIntentParserConfig;
