//! Control type definitions
//!
//! Core types for global filter controls, matching the JSON the dashboard
//! UI persists (camelCase keys, symbolic operator tags). These types carry
//! no rendering concerns; they are the contract between the control editor,
//! the saved dashboard, and query translation.

use chrono::{DateTime, TimeZone};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::utils::json::scalar_string;
use crate::utils::sql::is_number_type;
use crate::utils::time::parse_date_value;

use super::dates::{DateFormat, DynamicDefault};

// ============================================================================
// CLASSIFICATION ENUMS
// ============================================================================

/// Widget kinds a global control can render as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlType {
    InputText,
    Select,
    NumberRange,
    TreeSelect,
    Date,
    DateRange,
}

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputText => "inputText",
            Self::Select => "select",
            Self::NumberRange => "numberRange",
            Self::TreeSelect => "treeSelect",
            Self::Date => "date",
            Self::DateRange => "dateRange",
        }
    }

    /// Operators the control editor offers for this widget kind.
    ///
    /// Select and date widgets distinguish single from multiple mode; range
    /// widgets have fixed `>=` / `<=` semantics and offer no choice.
    pub fn operator_options(&self, multiple: bool) -> &'static [Operator] {
        use Operator::*;
        match self {
            Self::InputText => &[Equal, NotEqual, Contain],
            Self::Select => {
                if multiple {
                    &[In, NotIn]
                } else {
                    &[Equal, NotEqual]
                }
            }
            Self::NumberRange => &[],
            Self::TreeSelect => &[In, NotIn],
            Self::Date => {
                if multiple {
                    &[In]
                } else {
                    &[Equal, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual]
                }
            }
            Self::DateRange => &[],
        }
    }

    /// Picker formats the control editor offers for this widget kind
    pub fn date_format_options(&self, multiple: bool) -> &'static [DateFormat] {
        match self {
            Self::Date | Self::DateRange => {
                if multiple {
                    &[DateFormat::Date, DateFormat::Month, DateFormat::Year]
                } else {
                    &[
                        DateFormat::Date,
                        DateFormat::Datetime,
                        DateFormat::DatetimeMinute,
                        DateFormat::Month,
                        DateFormat::Week,
                        DateFormat::Year,
                    ]
                }
            }
            _ => &[],
        }
    }
}

/// How a control feeds the query: a column predicate or a named variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    #[default]
    Column,
    Variable,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Variable => "variable",
        }
    }
}

/// Comparison operators, tagged with their SQL spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "like")]
    Contain,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Contain => "like",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::In => "in",
            Self::NotIn => "not in",
        }
    }
}

/// Value types a query variable can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableValueType {
    String,
    Number,
    Boolean,
    Date,
    Sql,
}

impl VariableValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Sql => "sql",
        }
    }
}

// ============================================================================
// RELATED FIELDS
// ============================================================================

/// Declared type of a related field: a closed variable value type for
/// variable-bound controls, a free-form SQL column type name otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldType {
    Variable(VariableValueType),
    Sql(String),
}

impl FieldType {
    /// The type name as the quoting rules see it
    pub fn sql_type_name(&self) -> &str {
        match self {
            Self::Variable(v) => v.as_str(),
            Self::Sql(s) => s,
        }
    }

    /// Whether comparison values are emitted unquoted
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Variable(v) => matches!(v, VariableValueType::Number),
            Self::Sql(s) => is_number_type(s),
        }
    }

    /// The variable value type, if this field is variable-typed
    pub fn variable_type(&self) -> Option<VariableValueType> {
        match self {
            Self::Variable(v) => Some(*v),
            Self::Sql(_) => None,
        }
    }
}

/// One column or variable a control feeds in a view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// The related field(s) of a control in one view.
///
/// Range controls (number range, date range) bound to variables relate to a
/// two-field pair, one per bound; everything else relates to a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelatedFields {
    One(RelatedField),
    Many(Vec<RelatedField>),
}

impl RelatedFields {
    /// The single related field, if this is not a pair
    pub fn single(&self) -> Option<&RelatedField> {
        match self {
            Self::One(f) => Some(f),
            Self::Many(_) => None,
        }
    }

    /// The first related field regardless of shape
    pub fn first(&self) -> Option<&RelatedField> {
        match self {
            Self::One(f) => Some(f),
            Self::Many(fields) => fields.first(),
        }
    }

    /// The lower/upper bound pair for range controls
    pub fn pair(&self) -> Option<(&RelatedField, &RelatedField)> {
        match self {
            Self::Many(fields) if fields.len() >= 2 => Some((&fields[0], &fields[1])),
            _ => None,
        }
    }
}

// ============================================================================
// CONTROL
// ============================================================================

/// A global filter control definition as the dashboard persists it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    /// Unique key within the dashboard
    pub key: String,
    /// Display name, doubles as the widget placeholder
    pub name: String,
    #[serde(rename = "type")]
    pub control_type: ControlType,
    #[serde(default)]
    pub interaction_type: InteractionType,
    pub operator: Operator,
    #[serde(default)]
    pub date_format: Option<DateFormat>,
    #[serde(default)]
    pub multiple: bool,
    /// Option-source columns for tree-select widgets
    #[serde(default)]
    pub text_column: Option<String>,
    #[serde(default)]
    pub value_column: Option<String>,
    #[serde(default)]
    pub parent_column: Option<String>,
    /// Static option list for select widgets
    #[serde(default)]
    pub options: Option<Vec<JsonValue>>,
    /// Layout width in grid columns; 0 lets the dashboard decide
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub dynamic_default_value: Option<DynamicDefault>,
    #[serde(default)]
    pub default_value: Option<JsonValue>,
    /// Related field(s) per view id
    #[serde(default)]
    pub related_views: FxHashMap<String, RelatedFields>,
    /// Key of the parent control, when nested under another control
    #[serde(default)]
    pub parent: Option<String>,
}

impl Control {
    /// A freshly created control, as the dashboard editor makes one
    pub fn draft() -> Self {
        Self {
            key: Uuid::new_v4().simple().to_string(),
            name: "New filter".to_string(),
            control_type: ControlType::Select,
            interaction_type: InteractionType::Column,
            operator: Operator::Equal,
            date_format: None,
            multiple: false,
            text_column: None,
            value_column: None,
            parent_column: None,
            options: None,
            width: 0,
            dynamic_default_value: None,
            default_value: None,
            related_views: FxHashMap::default(),
            parent: None,
        }
    }

    /// The picker format, defaulting to the plain date format
    pub fn date_format_or_default(&self) -> DateFormat {
        self.date_format.unwrap_or_default()
    }

    /// The initial value of a date control, resolved against "now".
    ///
    /// Dynamic rules compute a date; the custom rule parses the stored
    /// static default. Non-date controls and date controls without a
    /// dynamic rule return `None`; their static default applies as stored.
    pub fn default_date<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
        if self.control_type != ControlType::Date {
            return None;
        }
        let rule = self.dynamic_default_value?;
        if let Some(resolved) = rule.resolve(now.clone()) {
            return Some(resolved);
        }
        let raw = self.default_value.as_ref().and_then(scalar_string)?;
        let naive = parse_date_value(&raw)?;
        now.timezone().from_local_datetime(&naive).earliest()
    }
}
