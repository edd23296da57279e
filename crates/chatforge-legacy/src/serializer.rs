//! Flattening components into legacy strings.
//!
//! Only color and the five decorations survive. Click, hover, insertion,
//! and font have no legacy representation and are dropped.

use chatforge_text::{Component, Decoration, NamedColor, ResolvedStyle, Rgb, flatten};
use serde::{Deserialize, Serialize};

use crate::code::{AMPERSAND_CHAR, HEX_CODE, LegacyCode, RESET_CODE, SECTION_CHAR};
use crate::parser;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How colors outside the sixteen named colors are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyMode {
    /// Replace the color with the nearest named color.
    #[default]
    Strict,
    /// Write the exact color as `§x` followed by six `§<digit>` pairs.
    HexCapable,
}

/// A legacy serializer: which marker character to use and how to write
/// colors that have no code.
///
/// ```rust
/// use chatforge_legacy::{LegacyMode, LegacySerializer};
/// use chatforge_text::{Component, NamedColor};
///
/// let serializer = LegacySerializer::ampersand();
/// let text = Component::text("Warning").color(NamedColor::Red).bold(true);
///
/// assert_eq!(serializer.serialize(&text), "&c&lWarning");
/// assert_eq!(serializer.deserialize("&c&lWarning").plain_text(), "Warning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegacySerializer {
    /// The character introducing each code.
    pub marker: char,
    #[serde(default)]
    pub mode: LegacyMode,
}

impl Default for LegacySerializer {
    fn default() -> Self {
        Self::section()
    }
}

impl LegacySerializer {
    /// Strict serializer using the section sign.
    pub const fn section() -> Self {
        Self {
            marker: SECTION_CHAR,
            mode: LegacyMode::Strict,
        }
    }

    /// Strict serializer using the ampersand.
    pub const fn ampersand() -> Self {
        Self {
            marker: AMPERSAND_CHAR,
            mode: LegacyMode::Strict,
        }
    }

    pub const fn with_mode(mut self, mode: LegacyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Renders `component` as a legacy string.
    ///
    /// Codes are written only where the effective style changes between
    /// consecutive runs. Adding decorations on top of the current ones
    /// writes just the new codes; anything else (a color change, or a
    /// decoration turning off) starts over from a color code or a reset.
    pub fn serialize(&self, component: &Component) -> String {
        let mut out = String::new();
        let mut current = Format::default();

        for run in flatten(component) {
            let next = Format::from_resolved(&run.style, self.mode);
            self.write_transition(&current, &next, &mut out);
            out.push_str(&run.text);
            current = next;
        }
        out
    }

    /// Parses a legacy string. Never fails: unknown or truncated codes are
    /// kept as literal text.
    pub fn deserialize(&self, input: &str) -> Component {
        parser::parse(input, self.marker)
    }

    fn write_transition(&self, current: &Format, next: &Format, out: &mut String) {
        if current == next {
            return;
        }

        if current.color == next.color && next.includes(current) {
            for decoration in Decoration::ALL {
                if next.has(decoration) && !current.has(decoration) {
                    self.write_code(LegacyCode::Decoration(decoration).as_char(), out);
                }
            }
            return;
        }

        // A color code clears decorations, so it doubles as a reset.
        match next.color {
            Some(EmittedColor::Named(color)) => self.write_code(color.code(), out),
            Some(EmittedColor::Hex(rgb)) => self.write_hex(rgb, out),
            None => self.write_code(RESET_CODE, out),
        }
        for decoration in Decoration::ALL {
            if next.has(decoration) {
                self.write_code(decoration.code(), out);
            }
        }
    }

    fn write_code(&self, code: char, out: &mut String) {
        out.push(self.marker);
        out.push(code);
    }

    fn write_hex(&self, rgb: Rgb, out: &mut String) {
        self.write_code(HEX_CODE, out);
        for digit in format!("{:06x}", rgb.to_u32()).chars() {
            self.write_code(digit, out);
        }
    }
}

/// Serializes with the section sign in the given mode.
pub fn to_legacy_string(component: &Component, mode: LegacyMode) -> String {
    LegacySerializer::section().with_mode(mode).serialize(component)
}

/// Parses a section-sign legacy string.
pub fn from_legacy_string(input: &str) -> Component {
    LegacySerializer::section().deserialize(input)
}

// ---------------------------------------------------------------------------
// Format: the part of a resolved style legacy text can express
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmittedColor {
    Named(NamedColor),
    Hex(Rgb),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Format {
    color: Option<EmittedColor>,
    /// Indexed like `Decoration::ALL`.
    decorations: [bool; 5],
}

impl Format {
    fn from_resolved(style: &ResolvedStyle, mode: LegacyMode) -> Self {
        let color = style.color.map(|color| match (color.named(), mode) {
            (Some(named), _) => EmittedColor::Named(named),
            (None, LegacyMode::Strict) => EmittedColor::Named(NamedColor::nearest(color.rgb())),
            (None, LegacyMode::HexCapable) => EmittedColor::Hex(color.rgb()),
        });
        Self {
            color,
            decorations: Decoration::ALL.map(|d| style.decoration(d)),
        }
    }

    fn has(&self, decoration: Decoration) -> bool {
        self.decorations[decoration as usize]
    }

    /// Every decoration on in `other` is also on in `self`.
    fn includes(&self, other: &Format) -> bool {
        self.decorations
            .iter()
            .zip(other.decorations)
            .all(|(mine, theirs)| *mine || !theirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatforge_text::{ClickEvent, HoverEvent};

    fn amp(component: &Component) -> String {
        LegacySerializer::ampersand().serialize(component)
    }

    #[test]
    fn test_plain_text_has_no_codes() {
        assert_eq!(amp(&Component::text("hello")), "hello");
        assert_eq!(amp(&Component::empty()), "");
    }

    #[test]
    fn test_color_then_decorations() {
        let c = Component::text("x").color(NamedColor::Red).bold(true).italic(true);
        assert_eq!(amp(&c), "&c&l&ox");
    }

    #[test]
    fn test_unchanged_style_writes_no_codes() {
        let c = Component::empty()
            .append(Component::text("a").color(NamedColor::Gold))
            .append(Component::text("b").color(NamedColor::Gold));
        assert_eq!(amp(&c), "&6ab");
    }

    #[test]
    fn test_adding_a_decoration_writes_only_that_code() {
        let c = Component::text("a")
            .color(NamedColor::Gold)
            .append(Component::text("b").bold(true));
        assert_eq!(amp(&c), "&6a&lb");
    }

    #[test]
    fn test_removing_a_decoration_reapplies_color() {
        let c = Component::text("a")
            .color(NamedColor::Gold)
            .bold(true)
            .underlined(true)
            .append(Component::text("b").bold(false));
        assert_eq!(amp(&c), "&6&l&na&6&nb");
    }

    #[test]
    fn test_dropping_color_writes_reset() {
        let c = Component::empty()
            .append(Component::text("red").color(NamedColor::Red))
            .append(Component::text("plain"))
            .append(Component::text("bold").bold(true));
        assert_eq!(amp(&c), "&cred&rplain&lbold");
    }

    #[test]
    fn test_strict_mode_downsamples_rgb() {
        let c = Component::text("x").color(Rgb::from_u32(0xFE0000));
        assert_eq!(amp(&c), "&4x");
    }

    #[test]
    fn test_hex_mode_writes_each_digit() {
        let serializer = LegacySerializer::section().with_mode(LegacyMode::HexCapable);
        let c = Component::text("x").color(Rgb::from_u32(0x12AB9F));
        assert_eq!(serializer.serialize(&c), "§x§1§2§a§b§9§fx");
    }

    #[test]
    fn test_hex_mode_keeps_named_colors_short() {
        let serializer = LegacySerializer::section().with_mode(LegacyMode::HexCapable);
        let c = Component::text("x").color(Rgb::from_u32(0x55FF55));
        assert_eq!(serializer.serialize(&c), "§ax");
    }

    #[test]
    fn test_interactivity_is_dropped() {
        let c = Component::text("click me")
            .click_event(ClickEvent::RunCommand("/spawn".into()))
            .hover_event(HoverEvent::ShowText(Component::text("tip")))
            .insertion("ins")
            .font("minecraft:alt");
        assert_eq!(amp(&c), "click me");
    }

    #[test]
    fn test_free_functions_use_section_sign() {
        let c = Component::text("x").color(NamedColor::Blue);
        assert_eq!(to_legacy_string(&c, LegacyMode::Strict), "§9x");
        assert_eq!(from_legacy_string("§9x"), c);
    }

    #[test]
    fn test_config_serde() {
        let json = serde_json::to_string(&LegacySerializer::ampersand()).unwrap();
        assert_eq!(json, r#"{"marker":"&","mode":"strict"}"#);

        let parsed: LegacySerializer = serde_json::from_str(r#"{"marker":"§"}"#).unwrap();
        assert_eq!(parsed, LegacySerializer::section());
    }
}
