//! ANSI SGR sequence builders.
//!
//! Only direct encodings are provided: named colors map to the 8 base
//! foreground/background codes, palette indices to `38;5;n`, RGB triplets to
//! true-color `38;2;r;g;b`. No color-space conversion happens here.

use console::Color;

/// Resets every attribute.
pub const RESET: &str = "\x1b[0m";

/// Text attributes addressable through a single SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
}

impl Attribute {
    /// The SGR parameter for this attribute.
    pub fn code(self) -> u8 {
        match self {
            Attribute::Reset => 0,
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
        }
    }

    /// Parses an attribute keyword (`bold`, `dim`, `italic`, `underline`, `reset`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reset" => Some(Attribute::Reset),
            "bold" | "bright" => Some(Attribute::Bold),
            "dim" => Some(Attribute::Dim),
            "italic" => Some(Attribute::Italic),
            "underline" | "underlined" => Some(Attribute::Underline),
            _ => None,
        }
    }
}

/// Builds an SGR sequence from a raw parameter list, e.g. `sgr("1;31")`.
pub fn sgr(params: &str) -> String {
    format!("\x1b[{}m", params)
}

/// SGR sequence for a single attribute.
pub fn attribute(attr: Attribute) -> String {
    sgr(&attr.code().to_string())
}

/// True-color foreground sequence.
///
/// ```rust
/// assert_eq!(limelight_tags::ansi::fg_rgb(255, 107, 53), "\x1b[38;2;255;107;53m");
/// ```
pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// True-color background sequence.
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// 256-color palette foreground sequence.
pub fn fg_256(index: u8) -> String {
    format!("\x1b[38;5;{}m", index)
}

/// 256-color palette background sequence.
pub fn bg_256(index: u8) -> String {
    format!("\x1b[48;5;{}m", index)
}

/// Foreground sequence for a console color.
pub fn fg(color: Color) -> String {
    match base_offset(color) {
        Some(offset) => sgr(&(30 + offset).to_string()),
        None => match color {
            Color::Color256(n) => fg_256(n),
            _ => sgr("39"),
        },
    }
}

/// Background sequence for a console color.
pub fn bg(color: Color) -> String {
    match base_offset(color) {
        Some(offset) => sgr(&(40 + offset).to_string()),
        None => match color {
            Color::Color256(n) => bg_256(n),
            _ => sgr("49"),
        },
    }
}

fn base_offset(color: Color) -> Option<u8> {
    match color {
        Color::Black => Some(0),
        Color::Red => Some(1),
        Color::Green => Some(2),
        Color::Yellow => Some(3),
        Color::Blue => Some(4),
        Color::Magenta => Some(5),
        Color::Cyan => Some(6),
        Color::White => Some(7),
        _ => None,
    }
}
