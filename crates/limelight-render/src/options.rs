//! Options for the print and input pipelines.

use crate::output::ClearScreen;

/// How values are joined, decorated and written.
///
/// `PrintOptions::default()` matches printing: newline terminated, no tag
/// substitution. [`PrintOptions::format`] matches formatting: no terminator,
/// tags substituted.
///
/// ```
/// use limelight_render::PrintOptions;
///
/// let opts = PrintOptions::default().color(true).sep(", ").end("");
/// assert!(opts.color);
/// assert_eq!(opts.sep, ", ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Joins the values.
    pub sep: String,
    /// Appended after the suffix.
    pub end: String,
    pub flush: bool,
    /// Substitute `$xxx` tags. When false, tags stay literal.
    pub color: bool,
    /// Clear the screen before writing.
    pub clear_screen: Option<ClearScreen>,
    /// Prepended after environment wrapping and substitution.
    pub prefix: String,
    /// Appended after environment wrapping and substitution.
    pub suffix: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
            flush: false,
            color: false,
            clear_screen: None,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl PrintOptions {
    /// Defaults for [`Terminal::format`](crate::Terminal::format).
    pub fn format() -> Self {
        Self {
            end: String::new(),
            color: true,
            ..Self::default()
        }
    }

    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn clear_screen(mut self, mode: ClearScreen) -> Self {
        self.clear_screen = Some(mode);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// Options for [`Terminal::input`](crate::Terminal::input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// How the prompt is printed. The prompt has no terminator by default.
    pub prompt: PrintOptions,
    /// Text shown inline right before a line read.
    pub input_text: String,
    /// Read exactly this many characters instead of a line.
    pub count: Option<usize>,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            prompt: PrintOptions::default().end(""),
            input_text: String::new(),
            count: None,
        }
    }
}

impl InputOptions {
    pub fn color(mut self, color: bool) -> Self {
        self.prompt.color = color;
        self
    }

    pub fn sep(mut self, sep: impl Into<String>) -> Self {
        self.prompt.sep = sep.into();
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.prompt.end = end.into();
        self
    }

    pub fn clear_screen(mut self, mode: ClearScreen) -> Self {
        self.prompt.clear_screen = Some(mode);
        self
    }

    pub fn input_text(mut self, text: impl Into<String>) -> Self {
        self.input_text = text.into();
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}
