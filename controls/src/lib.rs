//! # Glint Controls
//!
//! Global filter controls for Glint dashboards: the configuration model
//! for dashboard filter widgets and the translation of user-entered values
//! into SQL predicates and query-variable bindings.
//!
//! A dashboard saves its filter bar as a flat list of control definitions;
//! controls may nest (a City select under a Region select) by naming a
//! parent key. At query time each control's current value is translated,
//! per related view, into either SQL predicate fragments (column-bound
//! controls) or named template variables (variable-bound controls).
//!
//! # Core Types
//!
//! - [`Control`] - a persisted filter control definition
//! - [`ControlTree`] - the resolved parent/child forest with key lookup
//! - [`ControlRequestParams`] - what one control contributes to one view
//! - [`QueryVariable`] - a named template substitution
//!
//! # Example
//!
//! ```
//! use glint_controls::{ControlTree, build_request_params, parse_controls};
//!
//! let controls = parse_controls(r#"[
//!     {"key": "city", "name": "City", "type": "select",
//!      "interactionType": "column", "operator": "=",
//!      "relatedViews": {"12": {"name": "city", "type": "VARCHAR"}}}
//! ]"#).unwrap();
//! let tree = ControlTree::build(&controls).unwrap();
//!
//! let value = serde_json::json!("beijing");
//! let params = build_request_params(tree.get("city").unwrap(), &value);
//! assert_eq!(params.get("12").unwrap().filters, vec!["city = 'beijing'"]);
//! ```

pub mod controls;
pub mod query;
pub mod utils;

pub use controls::{
    Control, ControlError, ControlTree, ControlType, DateFormat, DynamicDefault, FieldType,
    InteractionType, Operator, RelatedField, RelatedFields, VariableValueType, parse_controls,
};
pub use query::{
    ControlRequestParams, QueryVariable, build_request_params, control_to_predicates,
    control_to_variables, merge_request_params,
};
