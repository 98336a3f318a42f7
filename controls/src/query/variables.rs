//! Value-to-variable translation
//!
//! Variable-bound controls do not touch columns directly; they feed named
//! substitutions into the query template of each related view. Range
//! controls map their two bounds positionally onto a two-field pair. Like
//! predicate translation, this fails soft on absent or malformed values.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::controls::{Control, ControlType, RelatedFields, VariableValueType};
use crate::utils::json::{is_truthy, scalar_string};
use crate::utils::sql::quote_literal;
use crate::utils::time::format_date_value;

use super::predicates::{input_text_value, numeric_bound};

/// A named substitution consumed by the query-templating layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVariable {
    pub name: String,
    pub value: String,
}

/// Render a variable comparison value per its declared type: `string` and
/// `date` quote, `boolean` renders truthiness, `number` and `sql` (and
/// misdeclared SQL column types) pass through raw.
pub fn valid_variable_value(value: &JsonValue, value_type: Option<VariableValueType>) -> String {
    match value_type {
        Some(VariableValueType::String) | Some(VariableValueType::Date) => {
            quote_literal(&scalar_string(value).unwrap_or_default())
        }
        Some(VariableValueType::Boolean) => is_truthy(value).to_string(),
        _ => scalar_string(value).unwrap_or_default(),
    }
}

/// Translate one control's value into variable bindings for a view's
/// related field(s)
pub fn control_to_variables(
    control: &Control,
    fields: &RelatedFields,
    value: &JsonValue,
) -> Vec<QueryVariable> {
    let mut variables = Vec::new();
    if value.is_null() {
        return variables;
    }

    match control.control_type {
        ControlType::InputText => {
            if let Some(field) = fields.single() {
                let value_type = field.field_type.variable_type();
                if value.is_object() {
                    if let Some(text) = input_text_value(value) {
                        variables.push(QueryVariable {
                            name: field.name.clone(),
                            value: valid_variable_value(&JsonValue::String(text), value_type),
                        });
                    }
                } else if scalar_string(value).is_some() {
                    variables.push(QueryVariable {
                        name: field.name.clone(),
                        value: valid_variable_value(value, value_type),
                    });
                }
            }
        }
        ControlType::Select if control.multiple => {
            push_joined(&mut variables, fields, value);
        }
        ControlType::Select => {
            if let Some(field) = fields.single() {
                if scalar_string(value).is_some() {
                    variables.push(QueryVariable {
                        name: field.name.clone(),
                        value: valid_variable_value(value, field.field_type.variable_type()),
                    });
                }
            }
        }
        ControlType::NumberRange => {
            if let (Some((lower, upper)), Some(items)) = (fields.pair(), value.as_array()) {
                for (field, item) in [lower, upper].into_iter().zip(items.iter().take(2)) {
                    if numeric_bound(item).is_some() {
                        variables.push(QueryVariable {
                            name: field.name.clone(),
                            value: valid_variable_value(item, field.field_type.variable_type()),
                        });
                    }
                }
            }
        }
        ControlType::TreeSelect => {
            push_joined(&mut variables, fields, value);
        }
        ControlType::Date if control.multiple => {
            // Multi date pickers submit a comma-joined, pre-formatted string;
            // pieces are always date literals, so always quoted
            if let (Some(field), Some(raw)) = (fields.single(), value.as_str()) {
                let parts: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(quote_literal)
                    .collect();
                if !parts.is_empty() {
                    variables.push(QueryVariable {
                        name: field.name.clone(),
                        value: parts.join(","),
                    });
                }
            }
        }
        ControlType::Date => {
            if let Some(field) = fields.single() {
                if let Some(formatted) = scalar_string(value).and_then(|raw| {
                    format_date_value(&raw, control.date_format_or_default().strftime())
                }) {
                    variables.push(QueryVariable {
                        name: field.name.clone(),
                        value: quote_literal(&formatted),
                    });
                }
            }
        }
        ControlType::DateRange => {
            if let (Some((start, end)), Some(items)) = (fields.pair(), value.as_array()) {
                let strftime = control.date_format_or_default().strftime();
                for (field, item) in [start, end].into_iter().zip(items.iter().take(2)) {
                    if let Some(formatted) =
                        scalar_string(item).and_then(|raw| format_date_value(&raw, strftime))
                    {
                        variables.push(QueryVariable {
                            name: field.name.clone(),
                            value: quote_literal(&formatted),
                        });
                    }
                }
            }
        }
    }

    variables
}

/// Multi-valued select shapes join their rendered items into one
/// comma-separated binding, emitted only when the list is non-empty
fn push_joined(variables: &mut Vec<QueryVariable>, fields: &RelatedFields, value: &JsonValue) {
    let (Some(field), Some(items)) = (fields.single(), value.as_array()) else {
        return;
    };
    if items.is_empty() {
        return;
    }
    let value_type = field.field_type.variable_type();
    let rendered: Vec<String> = items
        .iter()
        .map(|item| valid_variable_value(item, value_type))
        .collect();
    variables.push(QueryVariable {
        name: field.name.clone(),
        value: rendered.join(","),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{DateFormat, FieldType, Operator, RelatedField};
    use serde_json::json;

    fn var_field(name: &str, value_type: VariableValueType) -> RelatedFields {
        RelatedFields::One(RelatedField {
            name: name.to_string(),
            field_type: FieldType::Variable(value_type),
        })
    }

    fn var_pair(lower: &str, upper: &str, value_type: VariableValueType) -> RelatedFields {
        RelatedFields::Many(vec![
            RelatedField {
                name: lower.to_string(),
                field_type: FieldType::Variable(value_type),
            },
            RelatedField {
                name: upper.to_string(),
                field_type: FieldType::Variable(value_type),
            },
        ])
    }

    fn control(control_type: ControlType, multiple: bool) -> Control {
        let mut c = Control::draft();
        c.control_type = control_type;
        c.operator = Operator::Equal;
        c.multiple = multiple;
        c
    }

    fn binding(name: &str, value: &str) -> QueryVariable {
        QueryVariable {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_null_value_yields_nothing() {
        let c = control(ControlType::InputText, false);
        let fields = var_field("city", VariableValueType::String);
        assert!(control_to_variables(&c, &fields, &json!(null)).is_empty());
    }

    #[test]
    fn test_text_string_variable_quoted() {
        let c = control(ControlType::InputText, false);
        let fields = var_field("city", VariableValueType::String);
        assert_eq!(
            control_to_variables(&c, &fields, &json!("beijing")),
            vec![binding("city", "'beijing'")]
        );
    }

    #[test]
    fn test_text_number_variable_raw() {
        let c = control(ControlType::InputText, false);
        let fields = var_field("age", VariableValueType::Number);
        assert_eq!(
            control_to_variables(&c, &fields, &json!("30")),
            vec![binding("age", "30")]
        );
    }

    #[test]
    fn test_boolean_variable_truthiness() {
        let c = control(ControlType::InputText, false);
        let fields = var_field("active", VariableValueType::Boolean);
        assert_eq!(
            control_to_variables(&c, &fields, &json!(false)),
            vec![binding("active", "false")]
        );
        assert_eq!(
            control_to_variables(&c, &fields, &json!("yes")),
            vec![binding("active", "true")]
        );
    }

    #[test]
    fn test_text_event_payload() {
        let c = control(ControlType::InputText, false);
        let fields = var_field("city", VariableValueType::String);
        let event = json!({ "target": { "value": " beijing " } });
        assert_eq!(
            control_to_variables(&c, &fields, &event),
            vec![binding("city", "'beijing'")]
        );
        let blank = json!({ "target": { "value": "  " } });
        assert!(control_to_variables(&c, &fields, &blank).is_empty());
    }

    #[test]
    fn test_multi_select_joins_quoted() {
        let c = control(ControlType::Select, true);
        let fields = var_field("regions", VariableValueType::String);
        assert_eq!(
            control_to_variables(&c, &fields, &json!(["north", "south"])),
            vec![binding("regions", "'north','south'")]
        );
    }

    #[test]
    fn test_multi_select_empty_yields_nothing() {
        let c = control(ControlType::Select, true);
        let fields = var_field("regions", VariableValueType::String);
        assert!(control_to_variables(&c, &fields, &json!([])).is_empty());
    }

    #[test]
    fn test_tree_select_numbers_raw() {
        let c = control(ControlType::TreeSelect, true);
        let fields = var_field("org_ids", VariableValueType::Number);
        assert_eq!(
            control_to_variables(&c, &fields, &json!([3, 5])),
            vec![binding("org_ids", "3,5")]
        );
    }

    #[test]
    fn test_number_range_maps_bounds_to_fields() {
        let c = control(ControlType::NumberRange, false);
        let fields = var_pair("min_price", "max_price", VariableValueType::Number);
        assert_eq!(
            control_to_variables(&c, &fields, &json!(["1.5", "10"])),
            vec![binding("min_price", "1.5"), binding("max_price", "10")]
        );
    }

    #[test]
    fn test_number_range_skips_empty_bound() {
        let c = control(ControlType::NumberRange, false);
        let fields = var_pair("min_price", "max_price", VariableValueType::Number);
        assert_eq!(
            control_to_variables(&c, &fields, &json!(["", "5"])),
            vec![binding("max_price", "5")]
        );
    }

    #[test]
    fn test_number_range_without_pair_yields_nothing() {
        let c = control(ControlType::NumberRange, false);
        let fields = var_field("price", VariableValueType::Number);
        assert!(control_to_variables(&c, &fields, &json!(["1", "2"])).is_empty());
    }

    #[test]
    fn test_single_date_quoted_formatted() {
        let mut c = control(ControlType::Date, false);
        c.date_format = Some(DateFormat::Date);
        let fields = var_field("day", VariableValueType::Date);
        assert_eq!(
            control_to_variables(&c, &fields, &json!("2023-01-15T08:30:00Z")),
            vec![binding("day", "'2023-01-15'")]
        );
    }

    #[test]
    fn test_multi_date_splits_and_quotes() {
        let c = control(ControlType::Date, true);
        let fields = var_field("days", VariableValueType::Date);
        assert_eq!(
            control_to_variables(&c, &fields, &json!("2023-01-01,2023-01-02")),
            vec![binding("days", "'2023-01-01','2023-01-02'")]
        );
    }

    #[test]
    fn test_date_range_maps_bounds_to_fields() {
        let mut c = control(ControlType::DateRange, false);
        c.date_format = Some(DateFormat::Date);
        let fields = var_pair("start_day", "end_day", VariableValueType::Date);
        assert_eq!(
            control_to_variables(&c, &fields, &json!(["2023-01-01", "2023-01-31"])),
            vec![
                binding("start_day", "'2023-01-01'"),
                binding("end_day", "'2023-01-31'")
            ]
        );
    }

    #[test]
    fn test_date_range_single_element_emits_start_only() {
        let mut c = control(ControlType::DateRange, false);
        c.date_format = Some(DateFormat::Date);
        let fields = var_pair("start_day", "end_day", VariableValueType::Date);
        assert_eq!(
            control_to_variables(&c, &fields, &json!(["2023-01-01"])),
            vec![binding("start_day", "'2023-01-01'")]
        );
    }

    #[test]
    fn test_valid_variable_value_types() {
        assert_eq!(
            valid_variable_value(&json!("x"), Some(VariableValueType::String)),
            "'x'"
        );
        assert_eq!(
            valid_variable_value(&json!("2023-01-01"), Some(VariableValueType::Date)),
            "'2023-01-01'"
        );
        assert_eq!(
            valid_variable_value(&json!(7), Some(VariableValueType::Number)),
            "7"
        );
        assert_eq!(
            valid_variable_value(&json!("select 1"), Some(VariableValueType::Sql)),
            "select 1"
        );
        assert_eq!(valid_variable_value(&json!("raw"), None), "raw");
    }
}
