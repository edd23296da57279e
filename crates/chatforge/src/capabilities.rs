//! Capability descriptors: what a target can render.
//!
//! A host decides once, at startup, what each of its targets supports and
//! hands the result to the adapters as a plain value. Nothing in this crate
//! probes versions or inspects the host at runtime.

use chatforge_legacy::LegacyMode;
use chatforge_text::PaletteKind;
use serde::{Deserialize, Serialize};

/// What a target can render natively.
///
/// Missing fields in a config file fall back to [`Capabilities::modern`]:
///
/// ```rust
/// use chatforge::Capabilities;
///
/// let caps: Capabilities = serde_json::from_str(r#"{ "hex_colors": false }"#).unwrap();
/// assert!(!caps.hex_colors);
/// assert!(caps.click_events);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Arbitrary RGB colors. Without it, colors are downsampled to `palette`.
    pub hex_colors: bool,
    pub click_events: bool,
    pub hover_events: bool,
    /// Non-default fonts.
    pub fonts: bool,
    /// The palette colors are downsampled against when `hex_colors` is off.
    pub palette: PaletteKind,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::modern()
    }
}

impl Capabilities {
    /// A target that renders the full model.
    pub const fn modern() -> Self {
        Self {
            hex_colors: true,
            click_events: true,
            hover_events: true,
            fonts: true,
            palette: PaletteKind::Legacy,
        }
    }

    /// A pre-RGB target: interactive, but limited to the sixteen colors and
    /// the old hover form.
    pub const fn legacy() -> Self {
        Self {
            hex_colors: false,
            click_events: true,
            hover_events: true,
            fonts: false,
            palette: PaletteKind::Legacy,
        }
    }

    /// A string-only chat target with no interactivity at all.
    pub const fn plain_chat() -> Self {
        Self {
            hex_colors: false,
            click_events: false,
            hover_events: false,
            fonts: false,
            palette: PaletteKind::Legacy,
        }
    }

    pub const fn with_palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }

    /// The legacy mode to serialize with: hex sequences only when the
    /// target reads them.
    pub const fn legacy_mode(&self) -> LegacyMode {
        if self.hex_colors {
            LegacyMode::HexCapable
        } else {
            LegacyMode::Strict
        }
    }

    /// The palette to downsample against, or `None` if colors pass through.
    pub const fn downsample_palette(&self) -> Option<PaletteKind> {
        if self.hex_colors {
            None
        } else {
            Some(self.palette)
        }
    }

    /// Whether components reach this target unchanged.
    pub const fn renders_everything(&self) -> bool {
        self.hex_colors && self.click_events && self.hover_events && self.fonts
    }
}
