//! Value-to-predicate translation
//!
//! Turns a control's current value into SQL boolean fragments against its
//! related column. The caller joins fragments with AND/OR. Translation
//! fails soft: an absent or malformed value yields no fragments, never an
//! error, so a half-filled filter bar still produces a runnable query.

use serde_json::Value as JsonValue;

use crate::controls::{Control, ControlType, RelatedField};
use crate::utils::json::{event_input_value, scalar_string};
use crate::utils::sql::valid_column_value;
use crate::utils::time::format_date_value;

/// Translate one control's value into SQL predicate fragments for a
/// column-bound related field
pub fn control_to_predicates(
    control: &Control,
    field: &RelatedField,
    value: &JsonValue,
) -> Vec<String> {
    let mut filters = Vec::new();
    if value.is_null() {
        return filters;
    }

    let name = &field.name;
    let sql_type = field.field_type.sql_type_name();
    let op = control.operator.as_str();

    match control.control_type {
        ControlType::InputText => {
            if let Some(text) = input_text_value(value) {
                filters.push(format!(
                    "{name} {op} {}",
                    valid_column_value(&text, sql_type)
                ));
            }
        }
        ControlType::Select if control.multiple => {
            push_in_list(&mut filters, name, op, sql_type, value);
        }
        ControlType::Select => {
            if let Some(v) = scalar_string(value) {
                filters.push(format!("{name} {op} {}", valid_column_value(&v, sql_type)));
            }
        }
        ControlType::NumberRange => {
            if let Some(items) = value.as_array() {
                if let Some(lower) = items.first().and_then(numeric_bound) {
                    filters.push(format!("{name} >= {}", valid_column_value(&lower, sql_type)));
                }
                if let Some(upper) = items.get(1).and_then(numeric_bound) {
                    filters.push(format!("{name} <= {}", valid_column_value(&upper, sql_type)));
                }
            }
        }
        ControlType::TreeSelect => {
            push_in_list(&mut filters, name, op, sql_type, value);
        }
        ControlType::Date if control.multiple => {
            // Multi date pickers submit a comma-joined, pre-formatted string
            if let Some(raw) = value.as_str() {
                let parts: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(|p| valid_column_value(p, sql_type))
                    .collect();
                if !parts.is_empty() {
                    filters.push(format!("{name} {op} ({})", parts.join(",")));
                }
            }
        }
        ControlType::Date => {
            if let Some(formatted) = scalar_string(value)
                .and_then(|raw| format_date_value(&raw, control.date_format_or_default().strftime()))
            {
                filters.push(format!(
                    "{name} {op} {}",
                    valid_column_value(&formatted, sql_type)
                ));
            }
        }
        ControlType::DateRange => {
            if let Some(items) = value.as_array().filter(|items| !items.is_empty()) {
                let strftime = control.date_format_or_default().strftime();
                if let Some(start) = items
                    .first()
                    .and_then(scalar_string)
                    .and_then(|raw| format_date_value(&raw, strftime))
                {
                    filters.push(format!("{name} >= {}", valid_column_value(&start, sql_type)));
                }
                if let Some(end) = items
                    .get(1)
                    .and_then(scalar_string)
                    .and_then(|raw| format_date_value(&raw, strftime))
                {
                    filters.push(format!("{name} <= {}", valid_column_value(&end, sql_type)));
                }
            }
        }
    }

    filters
}

/// Committed text of a text widget, or the trimmed content of a raw input
/// event payload. An event value that trims to empty is dropped.
pub(crate) fn input_text_value(value: &JsonValue) -> Option<String> {
    if value.is_object() {
        return event_input_value(value)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
    }
    scalar_string(value)
}

/// A range bound counts only when it is a number, or a non-empty string
/// that parses as one
pub(crate) fn numeric_bound(item: &JsonValue) -> Option<String> {
    match item {
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::String(s) if !s.trim().is_empty() && s.trim().parse::<f64>().is_ok() => {
            Some(s.clone())
        }
        _ => None,
    }
}

fn push_in_list(filters: &mut Vec<String>, name: &str, op: &str, sql_type: &str, value: &JsonValue) {
    let Some(items) = value.as_array() else {
        return;
    };
    let rendered: Vec<String> = items
        .iter()
        .filter_map(scalar_string)
        .map(|v| valid_column_value(&v, sql_type))
        .collect();
    if !rendered.is_empty() {
        filters.push(format!("{name} {op} ({})", rendered.join(",")));
    }
}
