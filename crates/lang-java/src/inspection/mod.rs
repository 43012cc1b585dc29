//! Collection-usage inspections.
//!
//! Each inspection is a set of per-node checks run by [`crate::analysis::analyze`].
//! Checks never fail: unresolved symbols take the permissive default
//! documented at the call site, structural dead-ends yield nothing.

pub mod chain;
pub mod lazy;
pub mod literal;
pub mod not_empty;
pub mod suspicious;

use crate::names::{EC_LAZY_ITERABLE, EC_RICH_ITERABLE, METHOD_AS_LAZY, METHOD_NOT_EMPTY};
use crate::syntax::{NodeId, SyntaxTree};
use crate::types::JavaTypeSystem;
use collscope_api::models::InspectionId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Tunables shared by all inspections of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Interface whose presence enables the inspections.
    pub rich_iterable: String,
    pub lazy_iterable: String,
    pub as_lazy_method: String,
    pub not_empty_method: String,
    pub enabled: BTreeSet<InspectionId>,
    /// Also report lookups whose argument could be cast to the element type.
    pub report_convertible_method_calls: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            rich_iterable: EC_RICH_ITERABLE.to_string(),
            lazy_iterable: EC_LAZY_ITERABLE.to_string(),
            as_lazy_method: METHOD_AS_LAZY.to_string(),
            not_empty_method: METHOD_NOT_EMPTY.to_string(),
            enabled: InspectionId::ALL.into_iter().collect(),
            report_convertible_method_calls: true,
        }
    }
}

impl AnalysisOptions {
    pub fn is_enabled(&self, id: InspectionId) -> bool {
        self.enabled.contains(&id)
    }

    /// Options with only the given inspections switched on.
    pub fn only(ids: impl IntoIterator<Item = InspectionId>) -> Self {
        Self {
            enabled: ids.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// Call nodes already covered by a reported chain.
///
/// Owned by a single analysis run and dropped with it.
#[derive(Debug, Default)]
pub struct SeenCalls(HashSet<NodeId>);

impl SeenCalls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    pub fn mark_all(&mut self, ids: &[NodeId]) {
        self.0.extend(ids.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a single-node check can see.
#[derive(Clone, Copy)]
pub struct InspectionContext<'a> {
    pub tree: &'a SyntaxTree,
    pub ts: &'a dyn JavaTypeSystem,
    pub options: &'a AnalysisOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_enable_everything() {
        let options = AnalysisOptions::default();
        for id in InspectionId::ALL {
            assert!(options.is_enabled(id));
        }
        assert!(options.report_convertible_method_calls);
    }

    #[test]
    fn test_partial_options_take_defaults() {
        let options: AnalysisOptions =
            serde_json::from_str(r#"{ "enabled": ["prefer-not-empty"] }"#).unwrap();
        assert_eq!(options.lazy_iterable, EC_LAZY_ITERABLE);
        assert!(options.is_enabled(InspectionId::PreferNotEmpty));
        assert!(!options.is_enabled(InspectionId::NeedlessIntermediateCollections));
    }

    #[test]
    fn test_seen_calls() {
        let mut seen = SeenCalls::new();
        assert!(seen.is_empty());
        seen.mark_all(&[NodeId(3), NodeId(7), NodeId(3)]);
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(NodeId(7)));
        assert!(!seen.contains(NodeId(4)));
    }
}
