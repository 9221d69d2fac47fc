//! Precomputed frame sets: cyclic animations and progress bars.
//!
//! A [`ProgressBar`] renders every possible state of its bar once, up front,
//! so advancing it is an index change rather than a reformat.
//!
//! ```
//! use limelight_render::ProgressBar;
//!
//! let mut bar = ProgressBar::new("[[has]>[need]] [prog]%", "=", 4);
//! assert_eq!(bar.len(), 5);
//!
//! bar.set_progress(1, 2);
//! assert_eq!(bar.current(), "[==>==] 50%");
//! ```

use std::fmt;

use crate::error::RenderError;
use crate::options::{InputOptions, PrintOptions};
use crate::terminal::Terminal;

/// Placeholder replaced by the filled part of a bar.
pub const HAS: &str = "[has]";
/// Placeholder replaced by the empty part of a bar.
pub const NEED: &str = "[need]";
/// Placeholder replaced by the integer percentage.
pub const PROG: &str = "[prog]";

/// A cyclic set of frames with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimatedString {
    frames: Vec<String>,
    index: usize,
}

impl AnimatedString {
    pub fn new<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    /// Starts at `index`, wrapped into range.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.set_index(index);
        self
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves to `index` modulo the frame count.
    pub fn set_index(&mut self, index: usize) {
        if !self.frames.is_empty() {
            self.index = index % self.frames.len();
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The current frame, empty for an empty set.
    pub fn current(&self) -> &str {
        self.frames.get(self.index).map_or("", String::as_str)
    }

    pub fn get_frame(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(String::as_str)
    }

    pub fn next(&mut self) {
        if !self.frames.is_empty() {
            self.index = (self.index + 1) % self.frames.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.frames.is_empty() {
            self.index = (self.index + self.frames.len() - 1) % self.frames.len();
        }
    }

    /// Replaces the current frame.
    pub fn set_current(&mut self, frame: impl Into<String>) {
        if let Some(slot) = self.frames.get_mut(self.index) {
            *slot = frame.into();
        }
    }

    /// Reads user input into the current frame.
    pub fn input<I>(
        &mut self,
        term: &mut Terminal,
        prompt: I,
        opts: &InputOptions,
    ) -> Result<(), RenderError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let value = term.input(prompt, opts)?;
        self.set_current(value);
        Ok(())
    }

    /// Prints the current frame.
    pub fn print(&self, term: &mut Terminal, opts: &PrintOptions) -> Result<(), RenderError> {
        term.print([self.current()], opts)
    }
}

impl fmt::Display for AnimatedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}

/// A progress bar layout: template, fill token and bar length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarTemplate {
    template: String,
    token: String,
    length: usize,
}

impl Default for BarTemplate {
    fn default() -> Self {
        Self::new("[has]|[need]|[prog]%", "-", 10)
    }
}

impl BarTemplate {
    pub fn new(template: impl Into<String>, token: impl Into<String>, length: usize) -> Self {
        Self {
            template: template.into(),
            token: token.into(),
            length,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Filled token count for `has` out of `need`, clamped to `[0, length]`.
    ///
    /// `need == 0` yields 0.
    pub fn index_for(&self, has: u64, need: u64) -> usize {
        if need == 0 {
            return 0;
        }
        let filled = u128::from(has) * self.length as u128 / u128::from(need);
        filled.min(self.length as u128) as usize
    }

    /// Integer percentage for `has` out of `need`, clamped to `[0, 100]`.
    pub fn percent(has: u64, need: u64) -> u64 {
        if need == 0 {
            return 0;
        }
        (u128::from(has) * 100 / u128::from(need)).min(100) as u64
    }

    /// Replaces the placeholders in `text` for `filled` tokens.
    pub fn fill(&self, text: &str, filled: usize, percent: u64) -> String {
        let filled = filled.min(self.length);
        text.replace(HAS, &self.token.repeat(filled))
            .replace(NEED, &self.token.repeat(self.length - filled))
            .replace(PROG, &percent.to_string())
    }

    /// Frame `i` of the bar: `i` tokens filled, percentage `floor(i * 100 / length)`.
    pub fn frame(&self, i: usize) -> String {
        let i = i.min(self.length);
        let percent = if self.length == 0 {
            0
        } else {
            (i * 100 / self.length) as u64
        };
        self.fill(&self.template, i, percent)
    }

    /// All `length + 1` frames.
    pub fn frames(&self) -> Vec<String> {
        (0..=self.length).map(|i| self.frame(i)).collect()
    }
}

/// A bar whose `length + 1` states are precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    template: BarTemplate,
    frames: AnimatedString,
}

impl ProgressBar {
    pub fn new(template: impl Into<String>, token: impl Into<String>, length: usize) -> Self {
        Self::from_template(BarTemplate::new(template, token, length))
    }

    pub fn from_template(template: BarTemplate) -> Self {
        let frames = AnimatedString::new(template.frames());
        Self { template, frames }
    }

    pub fn template(&self) -> &BarTemplate {
        &self.template
    }

    /// Rebuilds every frame from the template, resetting to the first.
    pub fn generate(&mut self) {
        self.frames = AnimatedString::new(self.template.frames());
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn index(&self) -> usize {
        self.frames.index()
    }

    pub fn index_for(&self, has: u64, need: u64) -> usize {
        self.template.index_for(has, need)
    }

    /// Jumps to the frame for `has` out of `need`.
    pub fn set_progress(&mut self, has: u64, need: u64) {
        let index = self.index_for(has, need);
        self.set_index(index);
    }

    /// Moves to `index`, clamped to the last frame.
    pub fn set_index(&mut self, index: usize) {
        self.frames.set_index(index.min(self.template.length()));
    }

    pub fn current(&self) -> &str {
        self.frames.current()
    }

    pub fn get_frame(&self, index: usize) -> Option<&str> {
        self.frames.get_frame(index)
    }

    pub fn frames(&self) -> &[String] {
        self.frames.frames()
    }

    /// Advances one frame, wrapping from full back to empty.
    pub fn next(&mut self) {
        self.frames.next();
    }

    pub fn prev(&mut self) {
        self.frames.prev();
    }

    /// Prints the current frame.
    pub fn print(&self, term: &mut Terminal, opts: &PrintOptions) -> Result<(), RenderError> {
        self.frames.print(term, opts)
    }

    /// Prints frame `index` without moving the cursor. Out-of-range indexes print nothing.
    pub fn print_frame(
        &self,
        term: &mut Terminal,
        index: usize,
        opts: &PrintOptions,
    ) -> Result<(), RenderError> {
        match self.get_frame(index) {
            Some(frame) => term.print([frame], opts),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}
