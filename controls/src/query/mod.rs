//! Query translation
//!
//! Translates control values into the two query-side outputs: SQL predicate
//! fragments for column-bound controls and named variable bindings for
//! variable-bound controls, plus the per-view request bundles the dashboard
//! sends with a data query.
//!
//! ## Usage
//!
//! ```
//! use glint_controls::controls::{Control, ControlType, FieldType, Operator, RelatedField};
//! use glint_controls::query::control_to_predicates;
//!
//! let mut control = Control::draft();
//! control.control_type = ControlType::Select;
//! control.operator = Operator::In;
//! control.multiple = true;
//!
//! let field = RelatedField {
//!     name: "region".to_string(),
//!     field_type: FieldType::Sql("VARCHAR".to_string()),
//! };
//! let value = serde_json::json!(["north", "south"]);
//!
//! let filters = control_to_predicates(&control, &field, &value);
//! assert_eq!(filters, vec!["region in ('north','south')"]);
//! ```

mod predicates;
mod request;
mod variables;

pub use predicates::control_to_predicates;
pub use request::{ControlRequestParams, build_request_params, merge_request_params};
pub use variables::{QueryVariable, control_to_variables, valid_variable_value};
