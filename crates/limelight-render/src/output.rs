//! Output targets, color choice and screen clearing.

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::rc::Rc;
use std::str::FromStr;

use console::Term;
use serde::{Deserialize, Serialize};

/// ANSI clear-screen followed by cursor-home.
pub const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Whether tag substitution emits escape sequences.
///
/// `Auto` asks the console whether stdout supports colors. Captured output
/// never does, so tags are stripped there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Always,
    Never,
    Auto,
}

impl ColorChoice {
    /// Resolves the choice against a concrete target.
    pub fn resolve(self, target: &OutputTarget) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => target.colors_supported(),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            "auto" => Ok(ColorChoice::Auto),
            _ => Err(format!(
                "Invalid color choice: '{}'. Expected 'always', 'never' or 'auto'.",
                s
            )),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
            ColorChoice::Auto => write!(f, "auto"),
        }
    }
}

/// How to clear the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScreen {
    /// Write the ANSI clear-and-home sequence, optionally flushing after.
    Ansi { flush: bool },
    /// Let the console clear the screen the platform way.
    System,
}

impl ClearScreen {
    /// ANSI clearing with a flush.
    pub const ANSI: ClearScreen = ClearScreen::Ansi { flush: true };
}

/// Shared in-memory sink, cloned handles see the same bytes.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }

    fn push(&self, text: &str) {
        self.bytes.borrow_mut().extend_from_slice(text.as_bytes());
    }
}

/// Where printed text goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// The process's standard output.
    Stdout(Term),
    /// An in-memory buffer, for tests and for capturing output.
    Buffer(OutputBuffer),
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::stdout()
    }
}

impl OutputTarget {
    pub fn stdout() -> Self {
        OutputTarget::Stdout(Term::stdout())
    }

    /// A fresh buffer target. Get a handle to its contents with [`captured`](Self::captured).
    pub fn buffer() -> Self {
        OutputTarget::Buffer(OutputBuffer::new())
    }

    /// The buffer handle, if this target captures output.
    pub fn captured(&self) -> Option<OutputBuffer> {
        match self {
            OutputTarget::Buffer(buffer) => Some(buffer.clone()),
            OutputTarget::Stdout(_) => None,
        }
    }

    pub fn is_term(&self) -> bool {
        match self {
            OutputTarget::Stdout(term) => term.is_term(),
            OutputTarget::Buffer(_) => false,
        }
    }

    pub fn colors_supported(&self) -> bool {
        match self {
            OutputTarget::Stdout(term) => term.features().colors_supported(),
            OutputTarget::Buffer(_) => false,
        }
    }

    pub fn write_str(&self, text: &str) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(term) => term.write_str(text),
            OutputTarget::Buffer(buffer) => {
                buffer.push(text);
                Ok(())
            }
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(term) => term.flush(),
            OutputTarget::Buffer(_) => Ok(()),
        }
    }

    /// Clears the screen. Buffers record the ANSI sequence for either mode.
    pub fn clear_screen(&self, mode: ClearScreen) -> io::Result<()> {
        match (self, mode) {
            (OutputTarget::Stdout(term), ClearScreen::System) => term.clear_screen(),
            (_, ClearScreen::Ansi { flush }) => {
                self.write_str(CLEAR_SEQUENCE)?;
                if flush {
                    self.flush()?;
                }
                Ok(())
            }
            (OutputTarget::Buffer(buffer), ClearScreen::System) => {
                buffer.push(CLEAR_SEQUENCE);
                Ok(())
            }
        }
    }
}
