// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Merging of resource requirement maps.
//!
//! Keys present on one side only are copied through. Keys present on both
//! sides are combined with a fixed per-kind precedence table:
//!
//! | kind | descriptors | result |
//! |---|---|---|
//! | `gazetteer-names`, `word-clusters` | names, names | union |
//! | `custom-entity-parser-usage` | usage, usage | `WITH_STEMS < WITHOUT_STEMS < WITH_AND_WITHOUT_STEMS` |
//! | `stemming`, `stop-words`, `noise` | flag, flag | `true` wins |
//!
//! Every other pairing is a [`ResourceConflictError`]. Each rule is a join on
//! a lattice, so merging is associative and commutative and the empty map is
//! its identity: the order in which a pipeline's children are folded never
//! changes the result.

use crate::errors::ResourceConflictError;
use crate::observability::messages::resources::ResourceConflictDetected;
use crate::observability::messages::StructuredLog;

use super::{Requirement, RequiredResources, ResourceKind};

/// Combine two requirement maps into a new one.
pub fn merge_required_resources(
    lhs: &RequiredResources,
    rhs: &RequiredResources,
) -> Result<RequiredResources, ResourceConflictError> {
    let mut merged: Vec<(ResourceKind, Requirement)> = Vec::with_capacity(lhs.len() + rhs.len());

    for (kind, left) in lhs.iter() {
        let requirement = match rhs.get(kind) {
            Some(right) => merge_requirement(kind, left, right)?,
            None => left.clone(),
        };
        merged.push((kind, requirement));
    }

    for (kind, right) in rhs.iter() {
        if !lhs.contains(kind) {
            merged.push((kind, right.clone()));
        }
    }

    Ok(merged.into_iter().collect())
}

/// Fold any number of requirement maps, starting from `base`.
pub fn merge_all<'a, I>(
    base: RequiredResources,
    others: I,
) -> Result<RequiredResources, ResourceConflictError>
where
    I: IntoIterator<Item = &'a RequiredResources>,
{
    others
        .into_iter()
        .try_fold(base, |acc, next| merge_required_resources(&acc, next))
}

fn merge_requirement(
    kind: ResourceKind,
    left: &Requirement,
    right: &Requirement,
) -> Result<Requirement, ResourceConflictError> {
    use ResourceKind::*;

    match (kind, left, right) {
        (GazetteerNames | WordClusters, Requirement::Names(l), Requirement::Names(r)) => {
            Ok(Requirement::Names(l.union(r).cloned().collect()))
        }
        (CustomEntityParserUsage, Requirement::Usage(l), Requirement::Usage(r)) => {
            Ok(Requirement::Usage(l.merge(*r)))
        }
        (Stemming | StopWords | Noise, Requirement::Flag(l), Requirement::Flag(r)) => {
            Ok(Requirement::Flag(*l || *r))
        }
        _ => {
            ResourceConflictDetected {
                kind: kind.as_str(),
                left,
                right,
            }
            .log();

            Err(ResourceConflictError {
                kind,
                left: left.clone(),
                right: right.clone(),
            })
        }
    }
}
