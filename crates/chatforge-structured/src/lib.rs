//! The structured (JSON tree) form of Chatforge components.
//!
//! Every component maps to one object:
//!
//! ```json
//! {
//!   "text": "Hello",
//!   "color": "gold",
//!   "bold": true,
//!   "clickEvent": { "action": "run_command", "value": "/spawn" },
//!   "hoverEvent": { "action": "show_text", "contents": { "text": "Go home" } },
//!   "extra": [{ "text": ", world" }]
//! }
//! ```
//!
//! Exactly one content key (`text`, `translate` + `with`, `score`,
//! `selector`, `keybind`) is written per object. Style keys appear only when
//! the node sets them. Children go in `extra`.
//!
//! - [`StructuredSerializer`] with [`StructuredOptions`]: full-fidelity
//!   output, or palette-downsampled output for older targets.
//! - [`to_structured`] / [`from_structured`]: shorthand for the default
//!   serializer.
//! - [`FormatError`]: why a value could not be read.

mod deserializer;
mod error;
mod keys;
mod serializer;

pub use error::FormatError;
pub use serializer::{StructuredOptions, StructuredSerializer, from_structured, to_structured};
