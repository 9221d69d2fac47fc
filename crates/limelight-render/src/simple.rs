//! Minimal terminal I/O with no environments, tags or registry.
//!
//! These helpers talk to stdout directly and share no state with any
//! [`Terminal`](crate::Terminal).

use std::fmt::Display;
use std::io::{self, Write};

use console::Term;
use limelight_input::{ConsoleInput, InputError, InputSource};

/// Writes `values` joined by `sep`, followed by `end`.
pub fn write_values<W, I>(out: &mut W, values: I, sep: &str, end: &str) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.write_all(sep.as_bytes())?;
        }
        write!(out, "{}", value)?;
    }
    out.write_all(end.as_bytes())
}

/// Prints `values` to stdout the way `println!` would, space separated.
pub fn print<I>(values: I, flush: bool) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut stdout = io::stdout().lock();
    write_values(&mut stdout, values, " ", "\n")?;
    if flush {
        stdout.flush()?;
    }
    Ok(())
}

pub fn space() -> io::Result<()> {
    io::stdout().lock().write_all(b"\n")
}

/// Shows `prompt` and reads one line.
pub fn input(prompt: &str) -> Result<String, InputError> {
    ConsoleInput::new().read_line(prompt)
}

/// Clears the screen through the console.
pub fn clear() -> io::Result<()> {
    Term::stdout().clear_screen()
}
