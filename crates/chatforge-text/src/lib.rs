//! Styled text model for Chatforge.
//!
//! This crate is the data model every serializer works on:
//!
//! - **Tree** ([`Component`], [`Content`]): immutable, structurally
//!   shared nodes of styled text.
//! - **Style** ([`Style`], [`ResolvedStyle`]): partial overrides per node
//!   and the fully merged style of a node in context.
//! - **Color** ([`TextColor`], [`NamedColor`], [`Rgb`]): canonical colors
//!   and the sixteen legacy names.
//! - **Palettes** ([`PaletteEntry`], [`nearest_palette_color`]):
//!   downsampling arbitrary RGB onto a fixed set of colors.
//!
//! Everything here is pure: no I/O, no global mutable state. The palettes
//! are the only shared data and they are constants.
//!
//! ```text
//! Component ─► resolve (per node, top-down) ─► flatten ─► StyledRun*
//! ```

mod color;
mod component;
mod error;
mod flatten;
mod palette;
mod resolve;
mod style;

pub use color::{NamedColor, Rgb, TextColor};
pub use component::{Component, Content};
pub use error::ColorError;
pub use flatten::{StyledRun, flatten};
pub use palette::{
    EXTENDED_PALETTE, LEGACY_PALETTE, PaletteEntry, PaletteKind, nearest_index,
    nearest_palette_color,
};
pub use resolve::{ResolvedStyle, resolve_style};
pub use style::{ClickEvent, Decoration, HoverEvent, ShowEntity, ShowItem, Style};
