//! The [`Color`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::ansi;

/// Which parts of two colors [`Color::compare`] looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareBy {
    /// Escape sequences only (same as `==`).
    #[default]
    Ansi,
    /// Tags only.
    Tag,
    /// Both sequence and tag.
    Both,
}

/// An ANSI escape sequence with an optional short tag.
///
/// Equality and hashing look at the escape sequence only, so the same
/// sequence registered under two tags compares equal.
///
/// ```rust
/// use limelight_tags::Color;
///
/// let green = Color::tagged("\x1b[32m", "$gre");
/// assert_eq!(green, Color::new("\x1b[32m"));
/// assert_eq!(green.paint("ok"), "\x1b[32mok");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Color {
    ansi: String,
    tag: Option<String>,
}

impl Color {
    /// Creates an untagged color from an escape sequence.
    pub fn new(ansi: impl Into<String>) -> Self {
        Self {
            ansi: ansi.into(),
            tag: None,
        }
    }

    /// Creates a color carrying its own tag.
    pub fn tagged(ansi: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            ansi: ansi.into(),
            tag: Some(tag.into()),
        }
    }

    /// Concatenates several sequences (or colors) into one untagged color.
    pub fn combine<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ansi = parts.into_iter().fold(String::new(), |mut acc, part| {
            acc.push_str(part.as_ref());
            acc
        });
        Self::new(ansi)
    }

    /// True-color foreground.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(ansi::fg_rgb(r, g, b))
    }

    /// True-color background.
    pub fn bg_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(ansi::bg_rgb(r, g, b))
    }

    /// Replaces the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn ansi(&self) -> &str {
        &self.ansi
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Prepends the sequence to `text`.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{}", self.ansi, text)
    }

    /// Appends the sequence to `text`.
    pub fn reset(&self, text: &str) -> String {
        format!("{}{}", text, self.ansi)
    }

    /// Compares against another color using the chosen fields.
    pub fn compare(&self, other: &Color, by: CompareBy) -> bool {
        match by {
            CompareBy::Ansi => self.ansi == other.ansi,
            CompareBy::Tag => self.tag == other.tag,
            CompareBy::Both => self.ansi == other.ansi && self.tag == other.tag,
        }
    }

    /// Compares against a bare string, read as a sequence or as a tag.
    ///
    /// `CompareBy::Both` has nothing to compare a plain string against and
    /// always returns `false`.
    pub fn compare_str(&self, other: &str, by: CompareBy) -> bool {
        match by {
            CompareBy::Ansi => self.ansi == other,
            CompareBy::Tag => self.tag.as_deref() == Some(other),
            CompareBy::Both => false,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ansi)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.ansi
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.ansi == other.ansi
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ansi.hash(state);
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.ansi == other
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.ansi == *other
    }
}

impl Add<&Color> for Color {
    type Output = Color;

    fn add(self, rhs: &Color) -> Color {
        Color::combine([self.ansi.as_str(), rhs.ansi.as_str()])
    }
}

impl Add<&str> for Color {
    type Output = Color;

    fn add(self, rhs: &str) -> Color {
        Color::combine([self.ansi.as_str(), rhs])
    }
}
