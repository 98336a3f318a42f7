//! Global control definitions
//!
//! The configuration model for dashboard filter controls: the persisted
//! control types, the tree of parent/child controls, dynamic date defaults,
//! and validated parsing of saved definitions.
//!
//! ## Usage
//!
//! ```
//! use glint_controls::controls::{ControlTree, parse_controls};
//!
//! let json = r#"[
//!     {"key": "region", "name": "Region", "type": "select",
//!      "interactionType": "column", "operator": "="},
//!     {"key": "city", "name": "City", "type": "select",
//!      "interactionType": "column", "operator": "=", "parent": "region"}
//! ]"#;
//! let controls = parse_controls(json).unwrap();
//! let tree = ControlTree::build(&controls).unwrap();
//! assert_eq!(tree.root_keys(), &["region"]);
//! assert_eq!(tree.descendant_keys("region"), &["city"]);
//! ```

mod dates;
mod error;
mod parser;
mod tree;
mod types;

pub use dates::{DateFormat, DynamicDefault};
pub use error::ControlError;
pub use parser::parse_controls;
pub use tree::ControlTree;
pub use types::{
    Control, ControlType, FieldType, InteractionType, Operator, RelatedField, RelatedFields,
    VariableValueType,
};
