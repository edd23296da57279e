//! Unified error type for Chatforge.

use chatforge_structured::FormatError;
use chatforge_text::ColorError;

/// Top-level error that wraps every crate-specific error.
///
/// Hosts using the `chatforge` crate handle this one type instead of
/// importing errors from each sub-crate; `?` converts automatically.
/// Legacy text has no variant because parsing it never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatforgeError {
    /// Structured input that does not describe a component.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A color string that could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorError),
}
