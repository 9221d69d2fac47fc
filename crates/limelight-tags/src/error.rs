//! Error types for color registration and palette loading.

use std::io;
use std::path::PathBuf;

/// Errors raised while configuring a [`ColorRegistry`](crate::ColorRegistry).
///
/// Lookup misses are not errors: they come back as `None` and unknown tags
/// pass through substitution untouched.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    /// Neither the call nor the color itself provided a tag.
    #[error("A tag must be provided either explicitly or by the color itself.")]
    MissingTag,

    /// A palette entry could not be turned into an escape sequence.
    #[error("Invalid color for tag '{tag}': {message}")]
    Palette { tag: String, message: String },

    /// The palette document is not valid YAML or not a mapping.
    #[error("Failed to parse palette: {0}")]
    Parse(String),

    /// The palette file could not be read.
    #[error("Failed to read palette {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TagError {
    /// Create a palette entry error.
    pub fn palette(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Palette {
            tag: tag.into(),
            message: message.into(),
        }
    }
}
