// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for resource requirement merging.

use crate::resources::{Requirement, ResourceKind};
use thiserror::Error;

/// Two requirement descriptors for the same resource kind have no precedence rule.
///
/// Raised by [`merge_required_resources`](crate::resources::merge_required_resources)
/// and surfaced unchanged through every `get_required_resources` call above it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Conflicting requirements for resource '{kind}': {left} vs {right}")]
pub struct ResourceConflictError {
    pub kind: ResourceKind,
    pub left: Requirement,
    pub right: Requirement,
}
