//! Inline color tags for terminal output.
//!
//! This crate owns the tag vocabulary used across Limelight: a [`Color`] is an
//! ANSI escape sequence with an optional short tag, a [`ColorRegistry`] maps
//! tags to colors, and [`substitute`] replaces inline tags in already composed
//! text with the registered sequences.
//!
//! # Example
//!
//! ```rust
//! use limelight_tags::{ColorRegistry, TagTransform};
//!
//! let mut colors = ColorRegistry::new();
//! colors.init();
//!
//! // Apply ANSI codes
//! let output = colors.substitute("$redalert$res", TagTransform::Apply);
//! assert_eq!(output, "\x1b[31malert\x1b[0m");
//!
//! // Strip known tags (plain text)
//! let output = colors.substitute("$redalert$res", TagTransform::Remove);
//! assert_eq!(output, "alert");
//!
//! // Unknown tags always pass through
//! let output = colors.substitute("$zzzalert", TagTransform::Apply);
//! assert_eq!(output, "$zzzalert");
//! ```
//!
//! # Tag Syntax
//!
//! A tag is a `$` followed by exactly three ASCII lowercase letters. Matching
//! is purely lexical: `$redder` contains the tag `$red` followed by `der`.
//!
//! Pattern: `\$[a-z]{3}`

pub mod ansi;
mod color;
mod error;
mod palette;
mod registry;
mod substitute;

pub use color::{Color, CompareBy};
pub use error::TagError;
pub use palette::{parse_color_value, ColorDef, PALETTE_EXTENSIONS};
pub use registry::{ColorRegistry, DEFAULT_PALETTE};
pub use substitute::{is_valid_tag, substitute, unknown_tags, TagTransform, TAG_NAME_LEN, TAG_SIGIL};
