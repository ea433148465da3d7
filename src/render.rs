//! Terminal output for the `promptgen` CLI.
//!
//! Every method writes one line to the supplied sink; `color` switches
//! between styled and plain output.

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

const INDENT: &str = "  ";
const LABEL_ERROR: &str = "error:";
const LABEL_WARNING: &str = "warning:";
const GLYPH_SECTION_BULLET: &str = "•";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Section header.
    pub fn section(&self, out: &mut dyn Write, title: &str) -> io::Result<()> {
        if self.color {
            writeln!(
                out,
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            )
        } else {
            writeln!(out, "{title}:")
        }
    }

    /// Indented `key: value` row.
    pub fn field(&self, out: &mut dyn Write, key: &str, value: &str) -> io::Result<()> {
        if self.color {
            writeln!(
                out,
                "{INDENT}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White)
            )
        } else {
            writeln!(out, "{INDENT}{key}: {value}")
        }
    }

    /// Indented free text.
    pub fn detail(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{INDENT}{INDENT}{}", text.with(Color::Grey))
        } else {
            writeln!(out, "{INDENT}{INDENT}{text}")
        }
    }

    /// Horizontal rule between palette groups.
    pub fn separator(&self, out: &mut dyn Write) -> io::Result<()> {
        let rule = "─".repeat(32);
        if self.color {
            writeln!(out, "{}", rule.with(Color::DarkGrey))
        } else {
            writeln!(out, "{rule}")
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}

/// Make control characters visible (`\n`, `\u{8}`, ...) for listings.
pub fn visible(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}
