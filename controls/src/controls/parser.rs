//! Control definition parsing
//!
//! Parses the JSON control list a saved dashboard carries, with validation.
//! Limits bound what a single dashboard may declare; structural problems
//! (duplicate keys, dangling parent references) are rejected here rather
//! than surfacing later as translation oddities.

use super::error::ControlError;
use super::tree::validate_structure;
use super::types::Control;

/// Maximum size of control definitions JSON in bytes (64KB)
const MAX_CONTROLS_JSON_SIZE: usize = 64 * 1024;

/// Maximum number of controls a dashboard may declare
const MAX_CONTROLS: usize = 50;

/// Parse control definitions from a JSON array
///
/// Validates JSON size, deserializes into [`Control`] structs, and checks
/// key structure.
pub fn parse_controls(json_str: &str) -> Result<Vec<Control>, ControlError> {
    if json_str.len() > MAX_CONTROLS_JSON_SIZE {
        return Err(ControlError::DefinitionsTooLarge {
            got: json_str.len(),
            max: MAX_CONTROLS_JSON_SIZE,
        });
    }

    let controls: Vec<Control> = serde_json::from_str(json_str)?;

    if controls.len() > MAX_CONTROLS {
        return Err(ControlError::TooManyControls {
            got: controls.len(),
            max: MAX_CONTROLS,
        });
    }

    validate_structure(&controls)?;

    Ok(controls)
}
