//! Styling values an element instance can carry.
//!
//! `Color` and `Attribute` are plain value types: the element model stores
//! them, nothing in the core interprets them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the 16 standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::LightGray,
        Self::DarkGray,
        Self::LightRed,
        Self::LightGreen,
        Self::LightYellow,
        Self::LightBlue,
        Self::LightMagenta,
        Self::LightCyan,
        Self::White,
    ];

    /// Stable key, also accepted by [`Color::from_str`].
    pub fn key(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::LightGray => "light-gray",
            Self::DarkGray => "dark-gray",
            Self::LightRed => "light-red",
            Self::LightGreen => "light-green",
            Self::LightYellow => "light-yellow",
            Self::LightBlue => "light-blue",
            Self::LightMagenta => "light-magenta",
            Self::LightCyan => "light-cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts keys with `-`, `_` or no separator, any case, `grey` spelling.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized: String = input
            .trim()
            .to_ascii_lowercase()
            .replace("grey", "gray")
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_' && *ch != ' ')
            .collect();
        if normalized.is_empty() {
            return Err("color value cannot be empty".to_string());
        }
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.key().replace('-', "") == normalized)
            .ok_or_else(|| format!("unsupported color value `{input}`"))
    }
}

/// Text attribute toggled per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Overline,
}

impl Attribute {
    pub const ALL: [Attribute; 7] = [
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Reverse,
        Self::Overline,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
            Self::Overline => "overline",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        Attribute::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.key() == normalized)
            .ok_or_else(|| format!("unknown attribute `{input}`"))
    }
}

/// On/off state for each [`Attribute`]; everything starts off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
    pub overline: bool,
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Dim => self.dim,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Blink => self.blink,
            Attribute::Reverse => self.reverse,
            Attribute::Overline => self.overline,
        }
    }

    pub fn set(&mut self, attribute: Attribute, on: bool) {
        let slot = match attribute {
            Attribute::Bold => &mut self.bold,
            Attribute::Dim => &mut self.dim,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Blink => &mut self.blink,
            Attribute::Reverse => &mut self.reverse,
            Attribute::Overline => &mut self.overline,
        };
        *slot = on;
    }

    /// Flip one attribute and return its new state.
    pub fn toggle(&mut self, attribute: Attribute) -> bool {
        let on = !self.get(attribute);
        self.set(attribute, on);
        on
    }

    /// Attributes currently switched on, in [`Attribute::ALL`] order.
    pub fn enabled(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter().filter(move |a| self.get(*a))
    }

    pub fn is_plain(&self) -> bool {
        self.enabled().next().is_none()
    }
}
