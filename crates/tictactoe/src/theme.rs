//! Colour themes for the board.
//!
//! The table is static and immutable: selecting a theme only changes how
//! cells are painted, never the game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`. Case-insensitive; anything else is `None`.
    pub const fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return None;
        }
        let mut channels = [0u8; 3];
        let mut i = 0;
        while i < 3 {
            let (Some(hi), Some(lo)) = (hex_digit(bytes[1 + 2 * i]), hex_digit(bytes[2 + 2 * i]))
            else {
                return None;
            };
            channels[i] = hi * 16 + lo;
            i += 1;
        }
        Some(Self::new(channels[0], channels[1], channels[2]))
    }
}

const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Background and foreground colour of the board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Cell background.
    pub background: Rgb,
    /// Mark colour.
    pub foreground: Rgb,
}

/// Builds a palette from hex literals; a bad literal fails the build.
const fn palette(background: &str, foreground: &str) -> Palette {
    match (Rgb::from_hex(background), Rgb::from_hex(foreground)) {
        (Some(background), Some(foreground)) => Palette {
            background,
            foreground,
        },
        _ => panic!("invalid palette literal"),
    }
}

const CLASSIC: Palette = palette("#d3d3d3", "#333333");
const FUTURISTIC: Palette = palette("#1a1a2e", "#16c79a");
const NATURE: Palette = palette("#d4e157", "#3e2723");

/// A named colour theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light grey board, charcoal marks.
    #[default]
    Classic,
    /// Midnight board, teal marks.
    Futuristic,
    /// Lime board, dark brown marks.
    Nature,
}

impl Theme {
    /// Lowercase key used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Futuristic => "futuristic",
            Theme::Nature => "nature",
        }
    }

    /// Capitalized name for menus and status labels.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Futuristic => "Futuristic",
            Theme::Nature => "Nature",
        }
    }

    /// Cell colours for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Classic => CLASSIC,
            Theme::Futuristic => FUTURISTIC,
            Theme::Nature => NATURE,
        }
    }

    /// Looks a theme up by name, ignoring case.
    #[instrument]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::iter().find(|theme| theme.name().eq_ignore_ascii_case(name))
    }

    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Theme> = Self::iter().collect();
        let index = all.iter().position(|&t| t == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// The theme bound to the `n`th function key (1-based).
    pub fn from_shortcut(n: u8) -> Option<Self> {
        Self::iter().nth(usize::from(n).checked_sub(1)?)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A theme name that is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown theme '{}' (expected one of: classic, futuristic, nature)", name)]
pub struct UnknownTheme {
    /// The name that was asked for.
    pub name: String,
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTheme {
            name: s.to_string(),
        })
    }
}
