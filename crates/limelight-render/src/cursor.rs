//! ANSI cursor movement and erase sequences.
//!
//! Each function returns the escape sequence; nothing is written. Print the
//! result through a [`Terminal`](crate::Terminal) or push it into a
//! [`Builder`](crate::Builder).

pub const SAVE: &str = "\x1b[s";
pub const RESTORE: &str = "\x1b[u";
pub const SHOW: &str = "\x1b[?25h";
pub const HIDE: &str = "\x1b[?25l";
pub const ERASE_SCREEN: &str = "\x1b[2J";
pub const HOME: &str = "\x1b[H";

/// Which part of the current line [`erase_line`] clears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EraseLine {
    /// From the cursor to the end of the line.
    ToEnd,
    /// From the start of the line to the cursor.
    ToStart,
    #[default]
    All,
}

impl EraseLine {
    fn code(self) -> u8 {
        match self {
            EraseLine::ToEnd => 0,
            EraseLine::ToStart => 1,
            EraseLine::All => 2,
        }
    }
}

/// Moves to a 1-based `row`/`col`.
pub fn to(row: u16, col: u16) -> String {
    format!("\x1b[{};{}H", row, col)
}

pub fn up(n: u16) -> String {
    format!("\x1b[{}A", n)
}

pub fn down(n: u16) -> String {
    format!("\x1b[{}B", n)
}

pub fn forward(n: u16) -> String {
    format!("\x1b[{}C", n)
}

pub fn backward(n: u16) -> String {
    format!("\x1b[{}D", n)
}

/// Start of the line `n` lines down.
pub fn next_line(n: u16) -> String {
    format!("\x1b[{}E", n)
}

/// Start of the line `n` lines up.
pub fn prev_line(n: u16) -> String {
    format!("\x1b[{}F", n)
}

pub fn erase_line(mode: EraseLine) -> String {
    format!("\x1b[{}K", mode.code())
}
