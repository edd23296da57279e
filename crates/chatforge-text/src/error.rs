//! Error types for the text model.
//!
//! The component tree itself has no failure modes: building, resolving,
//! and flattening are total. The only fallible entry point is parsing a
//! color from its textual form.

/// Errors that can occur while parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string is neither a known color name nor a `#rrggbb` literal.
    #[error("unknown color {0:?}")]
    Unknown(String),

    /// The string starts with `#` but isn't exactly six hex digits.
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),
}
