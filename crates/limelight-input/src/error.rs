//! Error types for input reading.

use std::io;

/// Errors that can occur while reading user input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The underlying stream failed.
    #[error("Failed to read input: {0}")]
    ReadFailed(#[source] io::Error),

    /// The stream ended (EOF, Ctrl+D) before anything could be read.
    #[error("Input closed before a value was read.")]
    Closed,
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::Closed
        } else {
            Self::ReadFailed(err)
        }
    }
}
