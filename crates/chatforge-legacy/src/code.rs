//! The legacy formatting code table.
//!
//! A code is a marker character followed by one code character:
//!
//! | Code | Meaning |
//! |------|---------|
//! | `0`–`9`, `a`–`f` | one of the sixteen named colors |
//! | `k` `l` `m` `n` `o` | obfuscated, bold, strikethrough, underlined, italic |
//! | `r` | reset to the default style |
//! | `x` | start of a six-digit hex color (`§x§r§r§g§g§b§b`) |

use chatforge_text::{Decoration, NamedColor};

/// The section sign, the marker used on the wire.
pub const SECTION_CHAR: char = '§';

/// The ampersand, the marker conventionally used in config files and commands.
pub const AMPERSAND_CHAR: char = '&';

pub(crate) const RESET_CODE: char = 'r';
pub(crate) const HEX_CODE: char = 'x';

/// A single decoded formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyCode {
    Color(NamedColor),
    Decoration(Decoration),
    Reset,
    /// Introduces a hex color; six digit codes follow.
    Hex,
}

impl LegacyCode {
    /// Decodes a code character. Case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(color) = NamedColor::from_code(c) {
            return Some(Self::Color(color));
        }
        if let Some(decoration) = Decoration::from_code(c) {
            return Some(Self::Decoration(decoration));
        }
        match c.to_ascii_lowercase() {
            RESET_CODE => Some(Self::Reset),
            HEX_CODE => Some(Self::Hex),
            _ => None,
        }
    }

    /// The lower-case code character.
    pub fn as_char(self) -> char {
        match self {
            Self::Color(color) => color.code(),
            Self::Decoration(decoration) => decoration.code(),
            Self::Reset => RESET_CODE,
            Self::Hex => HEX_CODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_round_trips() {
        for c in "0123456789abcdefklmnorx".chars() {
            let code = LegacyCode::from_char(c).unwrap();
            assert_eq!(code.as_char(), c);
        }
    }

    #[test]
    fn test_upper_case_codes_are_accepted() {
        assert_eq!(LegacyCode::from_char('C'), Some(LegacyCode::Color(NamedColor::Red)));
        assert_eq!(LegacyCode::from_char('L'), Some(LegacyCode::Decoration(Decoration::Bold)));
        assert_eq!(LegacyCode::from_char('R'), Some(LegacyCode::Reset));
        assert_eq!(LegacyCode::from_char('X'), Some(LegacyCode::Hex));
    }

    #[test]
    fn test_unknown_codes() {
        for c in ['g', 'z', ' ', '§', '&', 'é'] {
            assert_eq!(LegacyCode::from_char(c), None);
        }
    }
}
