//! Tag → color table.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::TagError;
use crate::substitute::{self, is_valid_tag, TagTransform};

/// Tags installed by [`ColorRegistry::init`].
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("$bla", "\x1b[30m"),
    ("$blu", "\x1b[34m"),
    ("$cya", "\x1b[36m"),
    ("$gre", "\x1b[32m"),
    ("$mag", "\x1b[35m"),
    ("$red", "\x1b[31m"),
    ("$whi", "\x1b[37m"),
    ("$yel", "\x1b[33m"),
    ("$bri", "\x1b[1m"),
    ("$dim", "\x1b[2m"),
    ("$res", "\x1b[0m"),
];

/// A table mapping inline tags to colors.
///
/// The registry starts uninitialized and empty. [`init`](Self::init)
/// installs [`DEFAULT_PALETTE`]; it is idempotent, and [`lookup`](Self::lookup),
/// [`add`](Self::add) and [`remove`](Self::remove) initialize lazily so that
/// mutations always land on an initialized table.
///
/// ```rust
/// use limelight_tags::{Color, ColorRegistry};
///
/// let mut colors = ColorRegistry::new();
/// assert_eq!(colors.lookup("$gre").map(Color::ansi), Some("\x1b[32m"));
///
/// colors.add(Color::rgb(255, 107, 53), Some("$acc")).unwrap();
/// assert!(colors.lookup("$acc").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    colors: HashMap<String, Color>,
    initialized: bool,
}

impl ColorRegistry {
    /// Creates an empty, uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the default palette installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.init();
        registry
    }

    /// Installs the default palette. Calling it again is a no-op.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        for (tag, ansi) in DEFAULT_PALETTE {
            self.colors
                .insert((*tag).to_string(), Color::tagged(*ansi, *tag));
        }
        self.initialized = true;
        tracing::debug!(colors = self.colors.len(), "color registry initialized");
    }

    /// Drops every registered color and returns to the uninitialized state.
    pub fn deinit(&mut self) {
        self.colors.clear();
        self.initialized = false;
        tracing::debug!("color registry cleared");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Looks up a tag, initializing the registry first if needed.
    pub fn lookup(&mut self, tag: &str) -> Option<&Color> {
        self.init();
        self.colors.get(tag)
    }

    /// Looks up a tag without initializing.
    pub fn get(&self, tag: &str) -> Option<&Color> {
        self.colors.get(tag)
    }

    /// Registers a color under `tag`, or under the color's own tag.
    ///
    /// # Errors
    ///
    /// [`TagError::MissingTag`] if neither is present.
    pub fn add(&mut self, color: Color, tag: Option<&str>) -> Result<(), TagError> {
        let tag = tag
            .or(color.tag())
            .map(str::to_string)
            .ok_or(TagError::MissingTag)?;
        self.init();
        if !is_valid_tag(&tag) {
            tracing::warn!(%tag, "registered tag does not match $xxx and will never be substituted");
        }
        tracing::debug!(%tag, "color registered");
        self.colors.insert(tag, color);
        Ok(())
    }

    /// Removes `tag`, returning the removed color or `default` when absent.
    pub fn remove(&mut self, tag: &str, default: Option<Color>) -> Option<Color> {
        self.init();
        match self.colors.remove(tag) {
            Some(color) => {
                tracing::debug!(%tag, "color removed");
                Some(color)
            }
            None => default,
        }
    }

    /// Iterates over registered tags in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Substitutes registered tags in `text`. See [`substitute`](crate::substitute).
    pub fn substitute(&self, text: &str, transform: TagTransform) -> String {
        substitute::substitute(text, self, transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let registry = ColorRegistry::new();
        assert!(!registry.is_initialized());
        assert!(registry.is_empty());
        assert!(registry.get("$red").is_none());
    }

    #[test]
    fn init_is_idempotent() {
        let mut registry = ColorRegistry::new();
        registry.init();
        registry.add(Color::new("x"), Some("$xxx")).unwrap();
        registry.init();
        assert_eq!(registry.len(), DEFAULT_PALETTE.len() + 1);
    }

    #[test]
    fn lookup_initializes_lazily() {
        let mut registry = ColorRegistry::new();
        let green = registry.lookup("$gre").cloned();
        assert!(registry.is_initialized());
        assert_eq!(green, Some(Color::new("\x1b[32m")));
        assert_eq!(green.and_then(|c| c.tag().map(String::from)), Some("$gre".into()));
    }

    #[test]
    fn lookup_miss_is_none() {
        let mut registry = ColorRegistry::new();
        assert!(registry.lookup("$nop").is_none());
    }

    #[test]
    fn add_uses_explicit_tag_over_color_tag() {
        let mut registry = ColorRegistry::with_defaults();
        registry
            .add(Color::tagged("\x1b[4m", "$und"), Some("$ul_"))
            .unwrap();
        assert!(registry.get("$ul_").is_some());
        assert!(registry.get("$und").is_none());
    }

    #[test]
    fn add_falls_back_to_color_tag() {
        let mut registry = ColorRegistry::with_defaults();
        registry.add(Color::tagged("\x1b[4m", "$und"), None).unwrap();
        assert_eq!(registry.get("$und"), Some(&Color::new("\x1b[4m")));
    }

    #[test]
    fn add_without_any_tag_fails() {
        let mut registry = ColorRegistry::with_defaults();
        let err = registry.add(Color::new("\x1b[4m"), None).unwrap_err();
        assert!(matches!(err, TagError::MissingTag));
        assert_eq!(registry.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn add_overwrites_existing() {
        let mut registry = ColorRegistry::with_defaults();
        registry.add(Color::new("<red>"), Some("$red")).unwrap();
        assert_eq!(registry.get("$red"), Some(&Color::new("<red>")));
    }

    #[test]
    fn remove_returns_color_or_default() {
        let mut registry = ColorRegistry::with_defaults();
        assert_eq!(registry.remove("$red", None), Some(Color::new("\x1b[31m")));
        assert!(registry.get("$red").is_none());
        assert_eq!(registry.remove("$red", None), None);
        assert_eq!(
            registry.remove("$red", Some(Color::new("fallback"))),
            Some(Color::new("fallback"))
        );
    }

    #[test]
    fn deinit_clears_everything() {
        let mut registry = ColorRegistry::with_defaults();
        registry.add(Color::new("x"), Some("$xxx")).unwrap();
        registry.deinit();
        assert!(!registry.is_initialized());
        assert!(registry.is_empty());
        // Reinitializing brings back only the defaults
        registry.init();
        assert_eq!(registry.len(), DEFAULT_PALETTE.len());
        assert!(registry.get("$xxx").is_none());
    }

    #[test]
    fn add_after_deinit_reinitializes() {
        let mut registry = ColorRegistry::with_defaults();
        registry.deinit();
        registry.add(Color::new("x"), Some("$xxx")).unwrap();
        assert!(registry.is_initialized());
        assert!(registry.get("$red").is_some());
    }

    #[test]
    fn default_palette_tags_are_valid() {
        for (tag, _) in DEFAULT_PALETTE {
            assert!(is_valid_tag(tag), "{} should be a valid tag", tag);
        }
    }
}
