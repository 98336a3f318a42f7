//! Control configuration errors
//!
//! Runtime *values* never error (malformed input yields empty output);
//! these errors cover control *definitions*: the persisted JSON and the
//! parent-reference structure.

use thiserror::Error;

/// Errors raised while parsing or structuring control definitions
#[derive(Error, Debug)]
pub enum ControlError {
    /// Definition JSON exceeds the size cap
    #[error("control definitions JSON exceeds maximum size of {max} bytes (got {got})")]
    DefinitionsTooLarge { got: usize, max: usize },

    /// Definition JSON failed to deserialize
    #[error("invalid control definitions JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// More controls than a dashboard may declare
    #[error("maximum {max} controls allowed (got {got})")]
    TooManyControls { got: usize, max: usize },

    /// Two controls share a key
    #[error("duplicate control key: {key}")]
    DuplicateKey { key: String },

    /// A control references a parent key absent from the batch
    #[error("control '{key}' references unknown parent '{parent}'")]
    UnknownParent { key: String, parent: String },

    /// A parent chain that can never resolve; carries the keys still
    /// pending when a full pass over the worklist made no progress
    #[error("cyclic parent references among controls: {keys:?}")]
    CyclicParent { keys: Vec<String> },
}
