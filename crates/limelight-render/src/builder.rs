//! Multi-page text accumulator.

use std::fmt;

use crate::error::RenderError;
use crate::options::PrintOptions;
use crate::terminal::Terminal;

/// Buffers formatted output across several calls before a single write.
///
/// A builder holds ordered pages of text and a cursor selecting the active
/// one. Moving the cursor past the end adds empty pages; no page is ever
/// discarded by a cursor move.
///
/// ```
/// use limelight_render::Builder;
///
/// let mut builder = Builder::new();
/// builder.set_index(2);
/// builder.push_str("x");
/// builder.set_index(0);
/// assert_eq!(builder.value(), "");
/// builder.set_index(2);
/// assert_eq!(builder.value(), "x");
/// assert_eq!(builder.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder {
    pages: Vec<String>,
    cursor: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::with_value("")
    }

    /// A single page holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            pages: vec![value.into()],
            cursor: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Selects page `index`, creating empty pages up to it.
    pub fn set_index(&mut self, index: usize) {
        if index >= self.pages.len() {
            self.pages.resize_with(index + 1, String::new);
        }
        self.cursor = index;
    }

    /// Moves the cursor by `delta` pages.
    ///
    /// Fails with [`RenderError::InvalidIndex`] if the cursor would go negative.
    pub fn seek(&mut self, delta: isize) -> Result<usize, RenderError> {
        let target = self.cursor as isize + delta;
        if target < 0 {
            return Err(RenderError::InvalidIndex(target));
        }
        self.set_index(target as usize);
        Ok(self.cursor)
    }

    /// Text of the active page.
    pub fn value(&self) -> &str {
        &self.pages[self.cursor]
    }

    /// Replaces the active page's text.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.pages[self.cursor] = value.into();
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if every page is empty.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(String::is_empty)
    }

    /// Empties the active page.
    pub fn clear(&mut self) {
        self.pages[self.cursor].clear();
    }

    /// Empties every page and moves the cursor back to 0.
    pub fn clear_all(&mut self) {
        for page in &mut self.pages {
            page.clear();
        }
        self.cursor = 0;
    }

    pub fn space(&mut self) {
        self.pages[self.cursor].push('\n');
    }

    /// Appends raw text, bypassing the pipeline.
    pub fn push_str(&mut self, text: &str) {
        self.pages[self.cursor].push_str(text);
    }

    /// Formats `values` through `term` and appends them to the active page.
    ///
    /// Nothing is written to the output. If `opts.clear_screen` is set, the
    /// active page is cleared first instead of the screen.
    pub fn print<I>(&mut self, term: &mut Terminal, values: I, opts: &PrintOptions)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if opts.clear_screen.is_some() {
            self.clear();
        }
        let text = term.format(values, opts);
        self.push_str(&text);
    }

    /// Prints the active page through the full pipeline once.
    pub fn render(&self, term: &mut Terminal, opts: &PrintOptions) -> Result<(), RenderError> {
        term.print([self.value()], opts)
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
