//! Error types for the structured form.
//!
//! Serializing never fails. Deserializing fails when the input does not
//! have a shape this crate recognizes; every variant carries the offending
//! input so the caller can report it.

use chatforge_text::ColorError;
use serde_json::Value;

/// Errors that can occur while reading a component from its structured form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// An object has none of the content keys
    /// (`text`, `translate`, `score`, `selector`, `keybind`).
    #[error("no recognized content key in {0}")]
    UnknownContent(Value),

    /// A recognized key holds a value of the wrong type, e.g.
    /// `"bold": "yes"` or `"extra": {}`.
    #[error("invalid value for {key:?}: {value}")]
    InvalidField { key: &'static str, value: Value },

    /// A `color` string that is neither a color name nor `#rrggbb`.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("unknown click action {0:?}")]
    UnknownClickAction(String),

    #[error("unknown hover action {0:?}")]
    UnknownHoverAction(String),

    /// A value that can't stand for a component at all (`null`).
    #[error("not a component: {0}")]
    NotAComponent(Value),
}

impl FormatError {
    pub(crate) fn invalid(key: &'static str, value: &Value) -> Self {
        Self::InvalidField {
            key,
            value: value.clone(),
        }
    }
}
