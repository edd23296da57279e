//! Partial styles and interaction events.
//!
//! A [`Style`] only records what a node overrides. Every field is optional
//! and `None` means "inherit from the parent". The merged, fully-specified
//! view lives in [`ResolvedStyle`](crate::ResolvedStyle).

use crate::{Component, TextColor};

// ---------------------------------------------------------------------------
// Decoration
// ---------------------------------------------------------------------------

/// A boolean text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    /// All decorations, in legacy code order (`k`, `l`, `m`, `n`, `o`).
    pub const ALL: [Decoration; 5] = [
        Self::Obfuscated,
        Self::Bold,
        Self::Strikethrough,
        Self::Underlined,
        Self::Italic,
    ];

    /// The structured-text key for this decoration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Obfuscated => "obfuscated",
            Self::Bold => "bold",
            Self::Strikethrough => "strikethrough",
            Self::Underlined => "underlined",
            Self::Italic => "italic",
        }
    }

    /// The legacy formatting code character.
    pub const fn code(self) -> char {
        match self {
            Self::Obfuscated => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underlined => 'n',
            Self::Italic => 'o',
        }
    }

    /// Looks up a decoration by its legacy code. Case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|d| d.code() == code)
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// What happens when the text is clicked. Every action carries a string payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClickEvent {
    OpenUrl(String),
    RunCommand(String),
    SuggestCommand(String),
    /// Book page number, kept as text the way it travels on the wire.
    ChangePage(String),
    CopyToClipboard(String),
}

impl ClickEvent {
    /// The wire name of the action (`"open_url"`, ...).
    pub fn action(&self) -> &'static str {
        match self {
            Self::OpenUrl(_) => "open_url",
            Self::RunCommand(_) => "run_command",
            Self::SuggestCommand(_) => "suggest_command",
            Self::ChangePage(_) => "change_page",
            Self::CopyToClipboard(_) => "copy_to_clipboard",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::OpenUrl(v)
            | Self::RunCommand(v)
            | Self::SuggestCommand(v)
            | Self::ChangePage(v)
            | Self::CopyToClipboard(v) => v,
        }
    }

    /// Builds an event from its wire name, or `None` for an unknown action.
    pub fn from_action(action: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        match action {
            "open_url" => Some(Self::OpenUrl(value)),
            "run_command" => Some(Self::RunCommand(value)),
            "suggest_command" => Some(Self::SuggestCommand(value)),
            "change_page" => Some(Self::ChangePage(value)),
            "copy_to_clipboard" => Some(Self::CopyToClipboard(value)),
            _ => None,
        }
    }
}

/// An item shown in a hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowItem {
    /// Item identifier, e.g. `minecraft:diamond_sword`.
    pub id: String,
    pub count: i32,
    /// Serialized item data, passed through untouched.
    pub tag: Option<String>,
}

/// An entity shown in a hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowEntity {
    /// Entity type identifier, e.g. `minecraft:pig`.
    pub kind: String,
    /// The entity's UUID in its textual form.
    pub id: String,
    pub name: Option<Component>,
}

/// What is displayed when the pointer hovers over the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HoverEvent {
    ShowText(Component),
    ShowItem(ShowItem),
    ShowEntity(ShowEntity),
}

impl HoverEvent {
    pub fn action(&self) -> &'static str {
        match self {
            Self::ShowText(_) => "show_text",
            Self::ShowItem(_) => "show_item",
            Self::ShowEntity(_) => "show_entity",
        }
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// The style overrides of a single component.
///
/// `Style::default()` overrides nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub color: Option<TextColor>,
    pub obfuscated: Option<bool>,
    pub bold: Option<bool>,
    pub strikethrough: Option<bool>,
    pub underlined: Option<bool>,
    pub italic: Option<bool>,
    pub font: Option<String>,
    pub click_event: Option<ClickEvent>,
    pub hover_event: Option<HoverEvent>,
    pub insertion: Option<String>,
}

impl Style {
    /// Returns `true` if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn decoration(&self, decoration: Decoration) -> Option<bool> {
        match decoration {
            Decoration::Obfuscated => self.obfuscated,
            Decoration::Bold => self.bold,
            Decoration::Strikethrough => self.strikethrough,
            Decoration::Underlined => self.underlined,
            Decoration::Italic => self.italic,
        }
    }

    pub fn set_decoration(&mut self, decoration: Decoration, state: Option<bool>) {
        let slot = match decoration {
            Decoration::Obfuscated => &mut self.obfuscated,
            Decoration::Bold => &mut self.bold,
            Decoration::Strikethrough => &mut self.strikethrough,
            Decoration::Underlined => &mut self.underlined,
            Decoration::Italic => &mut self.italic,
        };
        *slot = state;
    }

    /// Returns a copy with `decoration` set.
    pub fn with_decoration(mut self, decoration: Decoration, state: bool) -> Self {
        self.set_decoration(decoration, Some(state));
        self
    }

    pub fn with_color(mut self, color: impl Into<TextColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Layers `other` on top of `self`: fields set in `other` win.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            obfuscated: other.obfuscated.or(self.obfuscated),
            bold: other.bold.or(self.bold),
            strikethrough: other.strikethrough.or(self.strikethrough),
            underlined: other.underlined.or(self.underlined),
            italic: other.italic.or(self.italic),
            font: other.font.clone().or_else(|| self.font.clone()),
            click_event: other.click_event.clone().or_else(|| self.click_event.clone()),
            hover_event: other.hover_event.clone().or_else(|| self.hover_event.clone()),
            insertion: other.insertion.clone().or_else(|| self.insertion.clone()),
        }
    }
}
