//! Fixed color palettes and nearest-color downsampling.
//!
//! Targets that cannot render arbitrary RGB approximate it with the closest
//! entry of a small palette. Both palettes are process-wide constants.

use serde::{Deserialize, Serialize};

use crate::{NamedColor, Rgb};

/// One entry of a palette: a stable name and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub rgb: Rgb,
}

impl PaletteEntry {
    pub const fn new(name: &'static str, rgb: Rgb) -> Self {
        Self { name, rgb }
    }
}

const fn named(color: NamedColor) -> PaletteEntry {
    PaletteEntry::new(color.name(), color.rgb())
}

/// The sixteen legacy colors, in code order. Entry `i` is `NamedColor::ALL[i]`.
pub const LEGACY_PALETTE: [PaletteEntry; 16] = [
    named(NamedColor::Black),
    named(NamedColor::DarkBlue),
    named(NamedColor::DarkGreen),
    named(NamedColor::DarkAqua),
    named(NamedColor::DarkRed),
    named(NamedColor::DarkPurple),
    named(NamedColor::Gold),
    named(NamedColor::Gray),
    named(NamedColor::DarkGray),
    named(NamedColor::Blue),
    named(NamedColor::Green),
    named(NamedColor::Aqua),
    named(NamedColor::Red),
    named(NamedColor::LightPurple),
    named(NamedColor::Yellow),
    named(NamedColor::White),
];

/// The legacy colors followed by four dye colors. The legacy entries come
/// first so ties against them keep resolving to the legacy color.
pub const EXTENDED_PALETTE: [PaletteEntry; 20] = [
    named(NamedColor::Black),
    named(NamedColor::DarkBlue),
    named(NamedColor::DarkGreen),
    named(NamedColor::DarkAqua),
    named(NamedColor::DarkRed),
    named(NamedColor::DarkPurple),
    named(NamedColor::Gold),
    named(NamedColor::Gray),
    named(NamedColor::DarkGray),
    named(NamedColor::Blue),
    named(NamedColor::Green),
    named(NamedColor::Aqua),
    named(NamedColor::Red),
    named(NamedColor::LightPurple),
    named(NamedColor::Yellow),
    named(NamedColor::White),
    PaletteEntry::new("orange", Rgb::from_u32(0xFF681F)),
    PaletteEntry::new("pink", Rgb::from_u32(0xFF69B4)),
    PaletteEntry::new("light_blue", Rgb::from_u32(0x9AC0CD)),
    PaletteEntry::new("brown", Rgb::from_u32(0x8B4513)),
];

/// Which palette a target downsamples against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    /// The sixteen legacy colors.
    #[default]
    Legacy,
    /// The legacy colors plus a few dye colors.
    Extended,
}

impl PaletteKind {
    pub const fn entries(self) -> &'static [PaletteEntry] {
        match self {
            Self::Legacy => &LEGACY_PALETTE,
            Self::Extended => &EXTENDED_PALETTE,
        }
    }
}

/// Returns the position of the palette entry closest to `rgb`.
///
/// Distance is squared Euclidean distance in RGB space. Ties go to the
/// lowest index, so the result is the same on every call and platform.
///
/// # Panics
///
/// Panics if `palette` is empty.
pub fn nearest_index(rgb: Rgb, palette: &[PaletteEntry]) -> usize {
    assert!(!palette.is_empty(), "cannot downsample against an empty palette");

    let mut best = 0;
    let mut best_distance = u32::MAX;
    for (i, entry) in palette.iter().enumerate() {
        let distance = rgb.distance_squared(entry.rgb);
        // Strict `<` keeps the earliest entry on ties.
        if distance < best_distance {
            best = i;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    best
}

/// Returns the palette entry closest to `rgb`. See [`nearest_index`].
///
/// # Panics
///
/// Panics if `palette` is empty.
pub fn nearest_palette_color(rgb: Rgb, palette: &[PaletteEntry]) -> &PaletteEntry {
    &palette[nearest_index(rgb, palette)]
}

impl NamedColor {
    /// The legacy color closest to `rgb`.
    pub fn nearest(rgb: Rgb) -> NamedColor {
        NamedColor::ALL[nearest_index(rgb, &LEGACY_PALETTE)]
    }
}
