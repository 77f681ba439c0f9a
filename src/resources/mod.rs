// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resource requirements declared by processing units.

mod merge;
mod requirement;

pub use merge::{merge_all, merge_required_resources};
pub use requirement::{CustomEntityParserUsage, RequiredResources, Requirement, ResourceKind};
