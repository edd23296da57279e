//! Style resolution: merging inherited style with a node's own overrides.
//!
//! Resolution runs top-down. The root starts from [`ResolvedStyle::default`]
//! (no color, every decoration off, no events) and each child starts from
//! its parent's resolved style. Since every field resolves the same way at
//! every level, the parent's resolved style is all a node needs.

use crate::{ClickEvent, Component, Decoration, HoverEvent, Style, TextColor};

/// The effective style of a node in its tree context.
///
/// Unlike [`Style`], nothing here is "unset": decorations are plain
/// booleans and an absent color means the target's default color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    pub color: Option<TextColor>,
    pub obfuscated: bool,
    pub bold: bool,
    pub strikethrough: bool,
    pub underlined: bool,
    pub italic: bool,
    pub font: Option<String>,
    pub click_event: Option<ClickEvent>,
    pub hover_event: Option<HoverEvent>,
    pub insertion: Option<String>,
}

impl ResolvedStyle {
    pub fn decoration(&self, decoration: Decoration) -> bool {
        match decoration {
            Decoration::Obfuscated => self.obfuscated,
            Decoration::Bold => self.bold,
            Decoration::Strikethrough => self.strikethrough,
            Decoration::Underlined => self.underlined,
            Decoration::Italic => self.italic,
        }
    }

    /// Applies a node's overrides on top of this (parent) style.
    pub fn apply(&self, style: &Style) -> ResolvedStyle {
        resolve_style(style, self)
    }

    /// Converts back into a partial style that sets every decoration that
    /// is on, the color, and every event. Decorations that are off are left
    /// unset, so the result renders the same under a default root.
    pub fn to_style(&self) -> Style {
        let flag = |on: bool| on.then_some(true);
        Style {
            color: self.color,
            obfuscated: flag(self.obfuscated),
            bold: flag(self.bold),
            strikethrough: flag(self.strikethrough),
            underlined: flag(self.underlined),
            italic: flag(self.italic),
            font: self.font.clone(),
            click_event: self.click_event.clone(),
            hover_event: self.hover_event.clone(),
            insertion: self.insertion.clone(),
        }
    }
}

/// Resolves `style` in the context of its parent's resolved style.
///
/// Set fields override; unset fields inherit. This is pure and total.
pub fn resolve_style(style: &Style, parent: &ResolvedStyle) -> ResolvedStyle {
    ResolvedStyle {
        color: style.color.or(parent.color),
        obfuscated: style.obfuscated.unwrap_or(parent.obfuscated),
        bold: style.bold.unwrap_or(parent.bold),
        strikethrough: style.strikethrough.unwrap_or(parent.strikethrough),
        underlined: style.underlined.unwrap_or(parent.underlined),
        italic: style.italic.unwrap_or(parent.italic),
        font: style.font.clone().or_else(|| parent.font.clone()),
        click_event: style
            .click_event
            .clone()
            .or_else(|| parent.click_event.clone()),
        hover_event: style
            .hover_event
            .clone()
            .or_else(|| parent.hover_event.clone()),
        insertion: style.insertion.clone().or_else(|| parent.insertion.clone()),
    }
}

impl Component {
    /// Resolves this node's style given its parent's resolved style.
    pub fn resolve(&self, parent: &ResolvedStyle) -> ResolvedStyle {
        resolve_style(self.style(), parent)
    }
}
