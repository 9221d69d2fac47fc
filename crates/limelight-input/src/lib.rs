//! Blocking input for terminal applications.
//!
//! `limelight-input` abstracts the two ways Limelight reads from the user:
//! a full line (optionally preceded by some inline text), or exactly `n`
//! characters read without waiting for Enter.
//!
//! # Architecture
//!
//! Everything goes through the [`InputSource`] trait:
//!
//! ```text
//! InputSource
//! ├── ConsoleInput  → console::Term when stdin is a TTY, std::io::stdin otherwise
//! └── MockInput     → scripted lines/characters for tests
//! ```
//!
//! # Testing
//!
//! ```
//! use limelight_input::{InputSource, MockInput};
//!
//! let mut input = MockInput::new().line("hello").chars("yn");
//! assert_eq!(input.read_line("> ").unwrap(), "hello");
//! assert_eq!(input.read_chars(1).unwrap(), "y");
//! ```

mod error;
mod mock;
mod source;

pub use error::InputError;
pub use mock::MockInput;
pub use source::{ConsoleInput, InputSource};
