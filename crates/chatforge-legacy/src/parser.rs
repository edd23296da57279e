//! Parsing legacy strings back into components.
//!
//! The parser is a single left-to-right scan and accepts every string:
//!
//! - A color code clears all decorations, then sets the color.
//! - A decoration code turns that decoration on, keeping everything else.
//! - `r` resets to the default style.
//! - `x` followed by six marker/hex-digit pairs sets an RGB color.
//! - A marker at the end of input, a marker followed by an unknown code,
//!   or an incomplete hex sequence is kept as literal text.
//!
//! Text accumulates into a run until the style actually changes; the run
//! then becomes one child component carrying the full style it was
//! written in.

use chatforge_text::{Component, Decoration, Rgb, Style, TextColor};

use crate::code::LegacyCode;

/// Number of marker/digit pairs after `x`.
const HEX_DIGITS: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct State {
    color: Option<TextColor>,
    /// Indexed like `Decoration::ALL`.
    decorations: [bool; 5],
}

impl State {
    fn with_color(color: TextColor) -> Self {
        Self {
            color: Some(color),
            decorations: [false; 5],
        }
    }

    fn to_style(self) -> Style {
        let mut style = Style {
            color: self.color,
            ..Style::default()
        };
        for decoration in Decoration::ALL {
            if self.decorations[decoration as usize] {
                style.set_decoration(decoration, Some(true));
            }
        }
        style
    }
}

struct Parser {
    source: Vec<char>,
    at: usize,
    marker: char,
    state: State,
    text: String,
    done: Vec<Component>,
}

impl Parser {
    fn new(source: &str, marker: char) -> Self {
        Self {
            source: source.chars().collect(),
            at: 0,
            marker,
            state: State::default(),
            text: String::new(),
            done: Vec::new(),
        }
    }

    fn run(mut self) -> Component {
        while let Some(&c) = self.source.get(self.at) {
            if c == self.marker {
                if let Some((next, consumed)) = self.read_code() {
                    self.transition(next);
                    self.at += consumed;
                    continue;
                }
            }
            self.text.push(c);
            self.at += 1;
        }
        self.finish()
    }

    /// Reads the code at `self.at` (which holds a marker). Returns the
    /// state it switches to and how many characters it spans, or `None`
    /// if the marker should be taken literally.
    fn read_code(&self) -> Option<(State, usize)> {
        let code = LegacyCode::from_char(*self.source.get(self.at + 1)?)?;
        let next = match code {
            LegacyCode::Color(color) => State::with_color(color.into()),
            LegacyCode::Decoration(decoration) => {
                let mut next = self.state;
                next.decorations[decoration as usize] = true;
                next
            }
            LegacyCode::Reset => State::default(),
            LegacyCode::Hex => {
                let rgb = self.read_hex_digits(self.at + 2)?;
                return Some((State::with_color(rgb.into()), 2 + 2 * HEX_DIGITS));
            }
        };
        Some((next, 2))
    }

    fn read_hex_digits(&self, start: usize) -> Option<Rgb> {
        let mut value = 0u32;
        for i in 0..HEX_DIGITS {
            let marker = *self.source.get(start + 2 * i)?;
            let digit = self.source.get(start + 2 * i + 1)?.to_digit(16)?;
            if marker != self.marker {
                return None;
            }
            value = (value << 4) | digit;
        }
        Some(Rgb::from_u32(value))
    }

    fn transition(&mut self, next: State) {
        if next != self.state {
            self.flush();
            self.state = next;
        }
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.done
                .push(Component::text(text).with_style(self.state.to_style()));
        }
    }

    fn finish(mut self) -> Component {
        self.flush();
        match self.done.len() {
            0 => Component::empty(),
            1 => self.done.remove(0),
            _ => Component::empty().with_children(self.done),
        }
    }
}

/// Parses `input`, using `marker` as the code marker.
pub(crate) fn parse(input: &str, marker: char) -> Component {
    Parser::new(input, marker).run()
}
