//! Colors: raw RGB triples, the sixteen named legacy colors, and the
//! canonical [`TextColor`] stored on styles.
//!
//! A color can be written by name (`"red"`) or as a hex literal
//! (`"#FF5555"`). Both spellings describe the same value, so [`TextColor`]
//! keeps only the RGB triple. Whether a color "is" a named color is a
//! question asked on demand via [`TextColor::named`].

use std::fmt;
use std::str::FromStr;

use crate::ColorError;

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Packs the color into `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Squared Euclidean distance between two colors in RGB space.
    ///
    /// Squared, because only the ordering matters when searching for the
    /// nearest color and this keeps the computation in integers.
    pub const fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Parses `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::Unknown(input.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::MalformedHex(input.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ColorError::MalformedHex(input.to_string()))
    }

    /// Formats as lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u32())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_u32())
    }
}

// ---------------------------------------------------------------------------
// NamedColor
// ---------------------------------------------------------------------------

/// The sixteen legacy chat colors, in code order (`0`–`9`, `a`–`f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors, indexed by their legacy code value.
    pub const ALL: [NamedColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Position in [`NamedColor::ALL`] and in the legacy palette.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The identifier used in structured text (`"dark_red"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::from_u32(0x000000),
            Self::DarkBlue => Rgb::from_u32(0x0000AA),
            Self::DarkGreen => Rgb::from_u32(0x00AA00),
            Self::DarkAqua => Rgb::from_u32(0x00AAAA),
            Self::DarkRed => Rgb::from_u32(0xAA0000),
            Self::DarkPurple => Rgb::from_u32(0xAA00AA),
            Self::Gold => Rgb::from_u32(0xFFAA00),
            Self::Gray => Rgb::from_u32(0xAAAAAA),
            Self::DarkGray => Rgb::from_u32(0x555555),
            Self::Blue => Rgb::from_u32(0x5555FF),
            Self::Green => Rgb::from_u32(0x55FF55),
            Self::Aqua => Rgb::from_u32(0x55FFFF),
            Self::Red => Rgb::from_u32(0xFF5555),
            Self::LightPurple => Rgb::from_u32(0xFF55FF),
            Self::Yellow => Rgb::from_u32(0xFFFF55),
            Self::White => Rgb::from_u32(0xFFFFFF),
        }
    }

    /// The legacy formatting code character (`'0'`–`'9'`, `'a'`–`'f'`).
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// Looks up a color by its legacy code. Case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        code.to_digit(16).map(|i| Self::ALL[i as usize])
    }

    /// Looks up a color by its structured-text name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Returns the named color with exactly this value, if any.
    pub fn from_rgb(rgb: Rgb) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgb() == rgb)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// TextColor
// ---------------------------------------------------------------------------

/// The color of a piece of text, in canonical form.
///
/// `TextColor::from(NamedColor::Red)` and `TextColor::from(Rgb::from_u32(0xFF5555))`
/// are the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextColor(Rgb);

impl TextColor {
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    /// Returns the named color this value matches exactly, if any.
    pub fn named(self) -> Option<NamedColor> {
        NamedColor::from_rgb(self.0)
    }

    /// Name if the color has one, otherwise `#rrggbb`.
    pub fn to_name_or_hex(self) -> String {
        match self.named() {
            Some(named) => named.name().to_string(),
            None => self.0.to_hex(),
        }
    }
}

impl From<Rgb> for TextColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<NamedColor> for TextColor {
    fn from(named: NamedColor) -> Self {
        Self(named.rgb())
    }
}

impl FromStr for TextColor {
    type Err = ColorError;

    /// Accepts a named color (`"gold"`) or a hex literal (`"#ffaa00"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            return Rgb::from_hex(s).map(Self);
        }
        NamedColor::from_name(s)
            .map(Self::from)
            .ok_or_else(|| ColorError::Unknown(s.to_string()))
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.named() {
            Some(named) => f.write_str(named.name()),
            None => write!(f, "{}", self.0),
        }
    }
}
