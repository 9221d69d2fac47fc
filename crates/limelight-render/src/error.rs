//! Error types for the print pipeline.

use std::io;

use limelight_input::InputError;
use limelight_tags::TagError;

/// Errors returned by [`Terminal`](crate::Terminal) and the buffers that print through it.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Writing to or flushing the output target failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A cursor move would leave the builder at a negative index.
    #[error("invalid builder index: {0}")]
    InvalidIndex(isize),

    /// Reading user input failed.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A color registry operation was misused.
    #[error(transparent)]
    Tag(#[from] TagError),
}
