//! A string that fills itself from input and prints itself.

use std::fmt;

use crate::error::RenderError;
use crate::options::{InputOptions, PrintOptions};
use crate::terminal::Terminal;

/// Owned text bound to the terminal's input and print pipeline.
///
/// Typical use is a command line: read into it, inspect it, echo it back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IoString {
    value: String,
}

impl IoString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn into_inner(self) -> String {
        self.value
    }

    /// Replaces the value with user input.
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
        self.value = term.input(prompt, opts)?;
        Ok(())
    }

    /// Prints the value between `before` and `after`.
    pub fn print(
        &self,
        term: &mut Terminal,
        before: &str,
        after: &str,
        opts: &PrintOptions,
    ) -> Result<(), RenderError> {
        let opts = opts.clone().prefix(before).suffix(after);
        term.print([&self.value], &opts)
    }
}

impl fmt::Display for IoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<String> for IoString {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for IoString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for IoString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
