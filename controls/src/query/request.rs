//! Per-view request parameter assembly
//!
//! A control relates to one or more dashboard views; when its value changes,
//! every related view gets a request-parameter bundle. Column-bound controls
//! contribute predicate fragments, variable-bound controls contribute
//! bindings, never both.

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::controls::{Control, InteractionType};

use super::predicates::control_to_predicates;
use super::variables::{QueryVariable, control_to_variables};

/// What one control contributes to one view's data query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControlRequestParams {
    /// SQL predicate fragments, joined by the query layer with AND/OR
    pub filters: Vec<String>,
    /// Named bindings for the view's query template
    pub variables: Vec<QueryVariable>,
}

impl ControlRequestParams {
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.variables.is_empty()
    }

    /// Fold another control's contribution for the same view into this one
    pub fn merge(&mut self, other: ControlRequestParams) {
        self.filters.extend(other.filters);
        self.variables.extend(other.variables);
    }
}

/// Translate one control's current value for every view it relates to,
/// keyed by view id
pub fn build_request_params(
    control: &Control,
    value: &JsonValue,
) -> FxHashMap<String, ControlRequestParams> {
    let mut by_view = FxHashMap::default();

    for (view_id, fields) in &control.related_views {
        let params = match control.interaction_type {
            InteractionType::Column => ControlRequestParams {
                filters: fields
                    .first()
                    .map(|field| control_to_predicates(control, field, value))
                    .unwrap_or_default(),
                variables: Vec::new(),
            },
            InteractionType::Variable => ControlRequestParams {
                filters: Vec::new(),
                variables: control_to_variables(control, fields, value),
            },
        };
        by_view.insert(view_id.clone(), params);
    }

    by_view
}

/// Merge the per-view contributions of many controls into one map, as the
/// dashboard does before issuing view queries
pub fn merge_request_params(
    all: impl IntoIterator<Item = FxHashMap<String, ControlRequestParams>>,
) -> FxHashMap<String, ControlRequestParams> {
    let mut merged: FxHashMap<String, ControlRequestParams> = FxHashMap::default();
    for map in all {
        for (view_id, params) in map {
            merged.entry(view_id).or_default().merge(params);
        }
    }
    merged
}
