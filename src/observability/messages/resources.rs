// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for resource requirement resolution.

use crate::observability::messages::StructuredLog;
use crate::resources::{RequiredResources, Requirement};
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A composite unit finished aggregating its children's requirements.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ResourcesResolved<'a> {
    pub unit_name: &'a str,
    pub child_count: usize,
    pub resources: &'a RequiredResources,
}

impl ResourcesResolved<'_> {
    fn kinds(&self) -> String {
        self.resources
            .iter()
            .map(|(kind, _)| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for ResourcesResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved resources for '{}' over {} children: [{}]",
            self.unit_name,
            self.child_count,
            self.kinds()
        )
    }
}

impl StructuredLog for ResourcesResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            unit_name = self.unit_name,
            child_count = self.child_count,
            resource_count = self.resources.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "resources_resolved",
            span_name = name,
            unit_name = self.unit_name,
            child_count = self.child_count,
            resource_count = self.resources.len(),
        )
    }
}

/// Two requirement descriptors for one resource could not be merged.
///
/// # Log Level
/// `error!` - Configuration contract violation
///
/// # Example
/// ```
/// use nlu_pipeline_config::observability::messages::resources::ResourceConflictDetected;
/// use nlu_pipeline_config::resources::Requirement;
///
/// let msg = ResourceConflictDetected {
///     kind: "stemming",
///     left: &Requirement::Flag(true),
///     right: &Requirement::names(["x"]),
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ResourceConflictDetected<'a> {
    pub kind: &'a str,
    pub left: &'a Requirement,
    pub right: &'a Requirement,
}

impl Display for ResourceConflictDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No precedence rule for resource '{}': {} vs {}",
            self.kind, self.left, self.right
        )
    }
}

impl StructuredLog for ResourceConflictDetected<'_> {
    fn log(&self) {
        tracing::error!(
            kind = self.kind,
            left = %self.left,
            right = %self.right,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "resource_conflict",
            span_name = name,
            kind = self.kind,
            left = %self.left,
            right = %self.right,
        )
    }
}
