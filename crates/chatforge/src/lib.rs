//! # Chatforge
//!
//! Styled chat text for hosts that talk to many kinds of targets.
//!
//! Chatforge keeps one model of styled text, a tree of [`Component`]s, and
//! converts it to whatever a target understands: formatting-code strings
//! for old chat APIs, the structured JSON form for newer ones, and
//! approximations of both for targets that can't render everything.
//!
//! The crates:
//!
//! - `chatforge-text`: the component tree, style resolution, colors, palettes.
//! - `chatforge-legacy`: formatting-code strings (`§c§lHello`).
//! - `chatforge-structured`: the JSON tree form.
//! - `chatforge` (this crate): [`Capabilities`], [`NativeAdapter`],
//!   [`prune`], and the [`LegacyTextCache`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatforge::prelude::*;
//!
//! let old_chat = LegacyTextAdapter::new(Capabilities::plain_chat());
//! let new_chat = StructuredTextAdapter::new(Capabilities::modern());
//!
//! let message = Component::text("Welcome, ")
//!     .color(NamedColor::Gold)
//!     .append(Component::text("Steve").bold(true));
//!
//! assert_eq!(old_chat.to_native(&message), "§6Welcome, §lSteve");
//! assert_eq!(new_chat.to_native(&message)["extra"][0]["bold"], true);
//! ```

mod adapter;
mod cache;
mod capabilities;
mod error;
mod prune;

pub use adapter::{LegacyTextAdapter, NativeAdapter, StructuredTextAdapter};
pub use cache::LegacyTextCache;
pub use capabilities::Capabilities;
pub use error::ChatforgeError;
pub use prune::prune;

pub use chatforge_text::Component;

/// Everything a host needs to build components and send them to targets.
pub mod prelude {
    pub use crate::{
        Capabilities, ChatforgeError, LegacyTextAdapter, LegacyTextCache, NativeAdapter,
        StructuredTextAdapter, prune,
    };
    pub use chatforge_legacy::{
        AMPERSAND_CHAR, LegacyMode, LegacySerializer, SECTION_CHAR, from_legacy_string,
        to_legacy_string,
    };
    pub use chatforge_structured::{
        FormatError, StructuredOptions, StructuredSerializer, from_structured, to_structured,
    };
    pub use chatforge_text::{
        ClickEvent, Component, Content, Decoration, HoverEvent, NamedColor, PaletteKind,
        ResolvedStyle, Rgb, ShowEntity, ShowItem, Style, TextColor, nearest_palette_color,
        resolve_style,
    };
}
