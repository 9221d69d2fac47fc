//! Palette files: YAML mappings from tags to color definitions.
//!
//! Supports multiple color formats:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - Attributes: `bold`, `dim`, `italic`, `underline`, `reset`
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit)
//! - RGB tuple: `[255, 107, 53]`
//! - Raw escape sequences: any string containing `ESC`
//! - Mappings combining the above: `{ fg: red, bg: "#202020", bold: true }`
//!
//! # Example
//!
//! ```rust
//! use limelight_tags::ColorRegistry;
//!
//! let colors = ColorRegistry::from_yaml(r##"
//! $acc: "#ff6b35"
//! $hdr: { fg: cyan, bold: true }
//! wrn: bright_yellow
//! "##).unwrap();
//!
//! assert_eq!(colors.get("$acc").unwrap().ansi(), "\x1b[38;2;255;107;53m");
//! assert_eq!(colors.get("$hdr").unwrap().ansi(), "\x1b[36m\x1b[1m");
//! assert!(colors.get("$wrn").is_some());
//! ```

use std::path::Path;

use console::Color as ConsoleColor;

use crate::ansi::{self, Attribute};
use crate::color::Color;
use crate::error::TagError;
use crate::registry::ColorRegistry;
use crate::substitute::TAG_SIGIL;

/// Recognized palette file extensions.
pub const PALETTE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Parsed color definition from a palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(ConsoleColor),
    /// 256-color palette index.
    Color256(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
    /// Text attribute (bold, dim, ...).
    Attr(Attribute),
    /// Escape sequence used verbatim.
    Raw(String),
}

impl ColorDef {
    /// Parses a color from a string value.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if s.contains('\x1b') {
            return Ok(ColorDef::Raw(s.to_string()));
        }

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let name = s.to_lowercase();
        if let Some(attr) = Attribute::from_name(&name) {
            return Ok(ColorDef::Attr(attr));
        }

        Self::parse_named(&name)
    }

    /// Parses a color from a YAML scalar or sequence.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| format!("Invalid color palette index: {}", n))?;
                if index > 255 {
                    return Err(format!(
                        "Color palette index {} out of range (0-255)",
                        index
                    ));
                }
                Ok(ColorDef::Color256(index as u8))
            }
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            _ => Err(format!("Invalid color value: {:?}", value)),
        }
    }

    /// Escape sequence when used as a foreground.
    pub fn to_fg(&self) -> String {
        match self {
            ColorDef::Named(c) => ansi::fg(*c),
            ColorDef::Color256(n) => ansi::fg_256(*n),
            ColorDef::Rgb(r, g, b) => ansi::fg_rgb(*r, *g, *b),
            ColorDef::Attr(attr) => ansi::attribute(*attr),
            ColorDef::Raw(s) => s.clone(),
        }
    }

    /// Escape sequence when used as a background.
    pub fn to_bg(&self) -> String {
        match self {
            ColorDef::Named(c) => ansi::bg(*c),
            ColorDef::Color256(n) => ansi::bg_256(*n),
            ColorDef::Rgb(r, g, b) => ansi::bg_rgb(*r, *g, *b),
            ColorDef::Attr(attr) => ansi::attribute(*attr),
            ColorDef::Raw(s) => s.clone(),
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let digit = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| format!("Invalid hex: {}", hex))
        };
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                digit(0..1)? * 17,
                digit(1..2)? * 17,
                digit(2..3)? * 17,
            )),
            6 => Ok(ColorDef::Rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        if let Some(base) = name.strip_prefix("bright_") {
            // Bright variants live at palette indices 8-15
            let index = match base {
                "black" => 8,
                "red" => 9,
                "green" => 10,
                "yellow" => 11,
                "blue" => 12,
                "magenta" => 13,
                "cyan" => 14,
                "white" => 15,
                _ => return Err(format!("Unknown bright color: bright_{}", base)),
            };
            return Ok(ColorDef::Color256(index));
        }

        let color = match name {
            "black" => ConsoleColor::Black,
            "red" => ConsoleColor::Red,
            "green" => ConsoleColor::Green,
            "yellow" => ConsoleColor::Yellow,
            "blue" => ConsoleColor::Blue,
            "magenta" => ConsoleColor::Magenta,
            "cyan" => ConsoleColor::Cyan,
            "white" | "gray" | "grey" => ConsoleColor::White,
            _ => return Err(format!("Unknown color name: {}", name)),
        };
        Ok(ColorDef::Named(color))
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, String> {
        if seq.len() != 3 {
            return Err(format!(
                "RGB tuple must have exactly 3 values, got {}",
                seq.len()
            ));
        }

        let mut components = [0u8; 3];
        for (i, val) in seq.iter().enumerate() {
            let n = val
                .as_u64()
                .ok_or_else(|| format!("RGB component {} is not a number", i))?;
            components[i] =
                u8::try_from(n).map_err(|_| format!("RGB component {} out of range (0-255): {}", i, n))?;
        }

        Ok(ColorDef::Rgb(components[0], components[1], components[2]))
    }
}

/// Turns one palette entry into an escape sequence.
///
/// Scalars and sequences are read as a foreground color. Mappings accept
/// `fg`, `bg`, `ansi`, and boolean `bold`/`dim`/`italic`/`underline` keys,
/// emitted in that order.
pub fn parse_color_value(value: &serde_yaml::Value) -> Result<String, String> {
    let serde_yaml::Value::Mapping(map) = value else {
        return ColorDef::parse_value(value).map(|def| def.to_fg());
    };

    let mut sequence = String::new();
    for (key, val) in map {
        let key = key
            .as_str()
            .ok_or_else(|| format!("Invalid attribute key: {:?}", key))?;
        match key {
            "fg" => sequence.push_str(&ColorDef::parse_value(val)?.to_fg()),
            "bg" => sequence.push_str(&ColorDef::parse_value(val)?.to_bg()),
            "ansi" => sequence.push_str(
                val.as_str()
                    .ok_or_else(|| "'ansi' must be a string".to_string())?,
            ),
            _ => {
                let attr = Attribute::from_name(key)
                    .ok_or_else(|| format!("Unknown attribute '{}'", key))?;
                let enabled = val
                    .as_bool()
                    .ok_or_else(|| format!("'{}' must be true or false", key))?;
                if enabled {
                    sequence.push_str(&ansi::attribute(attr));
                }
            }
        }
    }
    Ok(sequence)
}

/// Normalizes a palette key into a tag: `acc` and `$acc` both become `$acc`.
fn normalize_tag(key: &str) -> String {
    if key.starts_with(TAG_SIGIL) {
        key.to_string()
    } else {
        format!("{}{}", TAG_SIGIL, key)
    }
}

impl ColorRegistry {
    /// Creates an initialized registry with the palette entries merged in.
    pub fn from_yaml(yaml: &str) -> Result<Self, TagError> {
        let mut registry = Self::with_defaults();
        registry.merge_yaml(yaml)?;
        Ok(registry)
    }

    /// Merges palette entries from YAML, overriding existing tags.
    ///
    /// The whole document is validated before anything is registered, so a
    /// bad entry leaves the registry unchanged.
    pub fn merge_yaml(&mut self, yaml: &str) -> Result<(), TagError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| TagError::Parse(e.to_string()))?;
        self.merge_value(root)
    }

    /// Merges an already parsed palette document. Same rules as [`merge_yaml`](Self::merge_yaml).
    pub fn merge_value(&mut self, root: serde_yaml::Value) -> Result<(), TagError> {
        let entries = match root {
            serde_yaml::Value::Null => return Ok(()),
            serde_yaml::Value::Mapping(map) => map,
            other => {
                return Err(TagError::Parse(format!(
                    "expected a mapping of tags, found {:?}",
                    other
                )))
            }
        };

        let mut parsed = Vec::with_capacity(entries.len());
        for (key, value) in &entries {
            let key = key
                .as_str()
                .ok_or_else(|| TagError::Parse(format!("tag must be a string: {:?}", key)))?;
            let tag = normalize_tag(key);
            let sequence = parse_color_value(value).map_err(|msg| TagError::palette(&tag, msg))?;
            parsed.push(Color::tagged(sequence, tag));
        }

        for color in parsed {
            self.add(color, None)?;
        }
        Ok(())
    }

    /// Merges a palette file into the registry.
    pub fn load_palette<P: AsRef<Path>>(&mut self, path: P) -> Result<(), TagError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TagError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading palette");
        self.merge_yaml(&content)
    }
}
