//! Legacy formatting-code serialization for Chatforge.
//!
//! Legacy text is a single string where styling is written inline as a
//! marker character followed by a one-character code (`§c` for red, `§l`
//! for bold, `§r` for reset, ...). It predates interactive text, so only
//! color and decorations survive the trip.
//!
//! - **Serializer** ([`LegacySerializer`], [`to_legacy_string`]): flattens
//!   a component tree, writing codes only where the style changes.
//! - **Parser** ([`LegacySerializer::deserialize`], [`from_legacy_string`]):
//!   rebuilds a component from a legacy string. Total over all inputs.
//! - **Codes** ([`LegacyCode`]): the code table.
//!
//! ```text
//! Component ─► flatten ─► runs ─► "§c§lBold§rPlain"
//! "§c§lBold§rPlain" ─► scan ─► runs ─► Component
//! ```

mod code;
mod parser;
mod serializer;

pub use code::{AMPERSAND_CHAR, LegacyCode, SECTION_CHAR};
pub use serializer::{LegacyMode, LegacySerializer, from_legacy_string, to_legacy_string};
