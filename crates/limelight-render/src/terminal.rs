//! The [`Terminal`] context and its print pipeline.
//!
//! A `Terminal` owns everything the pipeline touches: the color registry,
//! the environment stack, the output target and the input source. Text flows
//! through it in a fixed order:
//!
//! ```text
//! values ──join(sep)──► EnvManager::format ──► tag substitution ──► prefix + text + suffix + end ──► output
//! ```
//!
//! Environment wrapping happens before substitution. Substitution is a single
//! pass, so the escape sequences it inserts are never rescanned.

use std::fmt::{self, Display, Write as _};
use std::ops::{Deref, DerefMut};

use limelight_input::{ConsoleInput, InputSource, MockInput};
use limelight_tags::{Color, ColorRegistry, TagError, TagTransform};

use crate::env::{EnvId, EnvManager, EnvMode, Environment};
use crate::error::RenderError;
use crate::frames::BarTemplate;
use crate::options::{InputOptions, PrintOptions};
use crate::output::{ClearScreen, ColorChoice, OutputBuffer, OutputTarget};

/// Severity label for [`Terminal::log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Color tag used for the label, if any.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            LogLevel::Debug => None,
            LogLevel::Info => Some("$blu"),
            LogLevel::Warn => Some("$yel"),
            LogLevel::Error => Some("$red"),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Terminal I/O context.
///
/// # Example
///
/// ```
/// use limelight_render::{PrintOptions, Terminal};
/// use limelight_tags::Color;
///
/// let (mut term, out) = Terminal::buffered();
/// let quote = term.new_env(Some(Color::new("> ")), None);
/// {
///     let mut scoped = term.scope(quote);
///     scoped.print(["$redhello$res"], &PrintOptions::default().color(true)).unwrap();
/// }
/// term.print(["bye"], &PrintOptions::default()).unwrap();
///
/// assert_eq!(out.contents(), "> \x1b[31mhello\x1b[0m\nbye\n");
/// ```
pub struct Terminal {
    colors: ColorRegistry,
    envs: EnvManager,
    output: OutputTarget,
    input: Box<dyn InputSource>,
    color_choice: ColorChoice,
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("colors", &self.colors)
            .field("envs", &self.envs)
            .field("output", &self.output)
            .field("color_choice", &self.color_choice)
            .finish_non_exhaustive()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    /// Stdout output, console input, colors always on.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TerminalBuilder {
        TerminalBuilder::default()
    }

    /// A terminal writing into a buffer, with no scripted input.
    pub fn buffered() -> (Self, OutputBuffer) {
        let buffer = OutputBuffer::new();
        let term = Self::builder()
            .output(OutputTarget::Buffer(buffer.clone()))
            .input(MockInput::new())
            .build();
        (term, buffer)
    }

    // --- colors ---

    pub fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorRegistry {
        &mut self.colors
    }

    /// Installs the default palette. Idempotent.
    pub fn init(&mut self) {
        self.colors.init();
    }

    /// Clears every registered color.
    pub fn deinit(&mut self) {
        self.colors.deinit();
    }

    pub fn lookup(&mut self, tag: &str) -> Option<&Color> {
        self.colors.lookup(tag)
    }

    pub fn add_color(&mut self, color: Color, tag: Option<&str>) -> Result<(), TagError> {
        self.colors.add(color, tag)
    }

    pub fn remove_color(&mut self, tag: &str, default: Option<Color>) -> Option<Color> {
        self.colors.remove(tag, default)
    }

    pub fn color_choice(&self) -> ColorChoice {
        self.color_choice
    }

    pub fn set_color_choice(&mut self, choice: ColorChoice) {
        self.color_choice = choice;
    }

    /// Whether substitution currently emits escape sequences.
    pub fn colors_enabled(&self) -> bool {
        self.color_choice.resolve(&self.output)
    }

    // --- environments ---

    pub fn envs(&self) -> &EnvManager {
        &self.envs
    }

    pub fn envs_mut(&mut self) -> &mut EnvManager {
        &mut self.envs
    }

    pub fn new_env(&mut self, prefix: Option<Color>, suffix: Option<Color>) -> EnvId {
        self.envs.new_env(prefix, suffix)
    }

    pub fn env(&self, id: EnvId) -> Option<&Environment> {
        self.envs.get(id)
    }

    pub fn set_env_mode(&mut self, mode: EnvMode) {
        self.envs.set_mode(mode);
    }

    pub fn enable(&mut self, id: EnvId) -> bool {
        self.envs.enable(id)
    }

    pub fn disable(&mut self, id: EnvId) {
        self.envs.disable(id);
    }

    pub fn disable_all(&mut self) {
        self.envs.disable_all();
    }

    /// Enables `id` until the returned guard drops.
    ///
    /// The guard derefs to the terminal, so printing goes through it.
    pub fn scope(&mut self, id: EnvId) -> EnvScope<'_> {
        self.envs.enable(id);
        EnvScope { term: self, id }
    }

    // --- output ---

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    /// Joins `values` and runs them through the pipeline without writing.
    ///
    /// Tags carried by environment prefixes and suffixes are expanded too,
    /// since wrapping happens before substitution. `opts.prefix`/`suffix`/`end`
    /// are appended afterwards and stay literal.
    pub fn format<I>(&mut self, values: I, opts: &PrintOptions) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let text = join(values, &opts.sep);
        self.format_text(&text, opts)
    }

    fn format_text(&mut self, text: &str, opts: &PrintOptions) -> String {
        let wrapped = self.envs.format(text);
        let body = if opts.color {
            self.colors.init();
            let transform = if self.colors_enabled() {
                TagTransform::Apply
            } else {
                TagTransform::Remove
            };
            self.colors.substitute(&wrapped, transform)
        } else {
            wrapped
        };

        let mut out = String::with_capacity(
            opts.prefix.len() + body.len() + opts.suffix.len() + opts.end.len(),
        );
        out.push_str(&opts.prefix);
        out.push_str(&body);
        out.push_str(&opts.suffix);
        out.push_str(&opts.end);
        out
    }

    pub fn print<I>(&mut self, values: I, opts: &PrintOptions) -> Result<(), RenderError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        if let Some(mode) = opts.clear_screen {
            self.clear(mode)?;
        }
        let text = self.format(values, opts);
        self.output.write_str(&text)?;
        if opts.flush {
            self.output.flush()?;
        }
        Ok(())
    }

    /// Prints `prompt` (if any values are given), then reads a line or a fixed
    /// number of characters.
    pub fn input<I>(&mut self, prompt: I, opts: &InputOptions) -> Result<String, RenderError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let prompt: Vec<String> = prompt.into_iter().map(|v| v.to_string()).collect();
        if !prompt.is_empty() {
            self.print(&prompt, &opts.prompt)?;
        }
        self.output.flush()?;

        let value = match opts.count {
            Some(count) => self.input.read_chars(count)?,
            None => self.input.read_line(&opts.input_text)?,
        };
        tracing::trace!(chars = value.chars().count(), "input read");
        Ok(value)
    }

    pub fn clear(&mut self, mode: ClearScreen) -> Result<(), RenderError> {
        self.output.clear_screen(mode)?;
        Ok(())
    }

    /// Prints `[LEVEL] msg...`, coloring the label when `color` is set.
    pub fn log<I>(&mut self, level: LogLevel, msg: I, color: bool) -> Result<(), RenderError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let label = match level.tag() {
            Some(tag) if color => format!("{}[{}]$res", tag, level),
            _ => format!("[{}]", level),
        };
        let values = std::iter::once(label).chain(msg.into_iter().map(|v| v.to_string()));
        self.print(values, &PrintOptions::default().color(color))
    }

    /// Writes the color's sequence immediately, with no newline.
    pub fn set_color(&mut self, color: &Color) -> Result<(), RenderError> {
        self.output.write_str(color.ansi())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes a bare newline.
    pub fn space(&mut self) -> Result<(), RenderError> {
        self.output.write_str("\n")?;
        Ok(())
    }

    /// Formats `bar`'s template, then fills it for `has` out of `need`.
    pub fn progress_bar(
        &mut self,
        bar: &BarTemplate,
        has: u64,
        need: u64,
        end: &str,
        color: bool,
    ) -> String {
        let opts = PrintOptions::format().end(end).color(color);
        let text = self.format_text(bar.template(), &opts);
        bar.fill(&text, bar.index_for(has, need), BarTemplate::percent(has, need))
    }
}

fn join<I>(values: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{}", value);
    }
    out
}

/// Builder for [`Terminal`].
#[derive(Default)]
pub struct TerminalBuilder {
    colors: Option<ColorRegistry>,
    env_mode: EnvMode,
    output: Option<OutputTarget>,
    input: Option<Box<dyn InputSource>>,
    color_choice: ColorChoice,
}

impl TerminalBuilder {
    /// Starts from this registry instead of an empty, lazily initialized one.
    pub fn colors(mut self, colors: ColorRegistry) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn env_mode(mut self, mode: EnvMode) -> Self {
        self.env_mode = mode;
        self
    }

    pub fn output(mut self, output: OutputTarget) -> Self {
        self.output = Some(output);
        self
    }

    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    pub fn color_choice(mut self, choice: ColorChoice) -> Self {
        self.color_choice = choice;
        self
    }

    pub fn build(self) -> Terminal {
        Terminal {
            colors: self.colors.unwrap_or_default(),
            envs: EnvManager::with_mode(self.env_mode),
            output: self.output.unwrap_or_default(),
            input: self
                .input
                .unwrap_or_else(|| Box::new(ConsoleInput::new())),
            color_choice: self.color_choice,
        }
    }
}

/// Guard returned by [`Terminal::scope`]. Disables its environment on drop.
pub struct EnvScope<'t> {
    term: &'t mut Terminal,
    id: EnvId,
}

impl EnvScope<'_> {
    pub fn id(&self) -> EnvId {
        self.id
    }
}

impl Deref for EnvScope<'_> {
    type Target = Terminal;

    fn deref(&self) -> &Terminal {
        &*self.term
    }
}

impl DerefMut for EnvScope<'_> {
    fn deref_mut(&mut self) -> &mut Terminal {
        &mut *self.term
    }
}

impl Drop for EnvScope<'_> {
    fn drop(&mut self) {
        self.term.envs.disable(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::CLEAR_SEQUENCE;

    fn green_env(term: &mut Terminal) -> EnvId {
        term.new_env(Some(Color::new("\x1b[32m")), Some(Color::new("\x1b[0m")))
    }

    #[test]
    fn format_with_environment() {
        let (mut term, _) = Terminal::buffered();
        let id = green_env(&mut term);
        term.enable(id);
        assert_eq!(
            term.format(["hi"], &PrintOptions::format()),
            "\x1b[32mhi\x1b[0m"
        );
    }

    #[test]
    fn format_joins_with_sep() {
        let (mut term, _) = Terminal::buffered();
        let opts = PrintOptions::format().sep("-");
        assert_eq!(term.format([1, 2, 3], &opts), "1-2-3");
    }

    #[test]
    fn prefix_and_suffix_are_not_substituted() {
        let (mut term, _) = Terminal::buffered();
        let opts = PrintOptions::format().prefix("$red").suffix("$res");
        assert_eq!(term.format(["$gre"], &opts), "$red\x1b[32m$res");
    }

    #[test]
    fn color_false_keeps_tags() {
        let (mut term, _) = Terminal::buffered();
        let opts = PrintOptions::format().color(false);
        assert_eq!(term.format(["$redx"], &opts), "$redx");
    }

    #[test]
    fn color_never_strips_tags() {
        let (mut term, _) = Terminal::buffered();
        term.set_color_choice(ColorChoice::Never);
        assert_eq!(term.format(["$redx$res"], &PrintOptions::format()), "x");
    }

    #[test]
    fn environment_wraps_before_substitution() {
        let (mut term, _) = Terminal::buffered();
        let id = term.new_env(Some(Color::new("$red")), None);
        term.enable(id);
        // Tags carried by an environment are substituted along with the text.
        assert_eq!(
            term.format(["x"], &PrintOptions::format()),
            "\x1b[31mx"
        );
    }

    #[test]
    fn scope_disables_on_drop() {
        let (mut term, _) = Terminal::buffered();
        let id = green_env(&mut term);
        {
            let mut scoped = term.scope(id);
            assert!(scoped.env(id).unwrap().is_active());
            assert_eq!(
                scoped.format(["a"], &PrintOptions::format()),
                "\x1b[32ma\x1b[0m"
            );
        }
        assert!(!term.env(id).unwrap().is_active());
        assert!(term.envs().stack().is_empty());
    }

    #[test]
    fn print_writes_and_clears() {
        let (mut term, out) = Terminal::buffered();
        term.print(["a", "b"], &PrintOptions::default().clear_screen(ClearScreen::ANSI))
            .unwrap();
        assert_eq!(out.contents(), format!("{}a b\n", CLEAR_SEQUENCE));
    }

    #[test]
    fn input_reads_line_after_prompt() {
        let script = MockInput::new().line("Ada");
        let out = OutputBuffer::new();
        let mut term = Terminal::builder()
            .output(OutputTarget::Buffer(out.clone()))
            .input(script.clone())
            .build();

        let name = term
            .input(["name?"], &InputOptions::default().input_text("> "))
            .unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(out.contents(), "name?");
        assert_eq!(script.shown(), vec!["> "]);
    }

    #[test]
    fn input_reads_fixed_count() {
        let mut term = Terminal::builder()
            .output(OutputTarget::buffer())
            .input(MockInput::new().chars("yes"))
            .build();
        let answer = term
            .input(Vec::<String>::new(), &InputOptions::default().count(1))
            .unwrap();
        assert_eq!(answer, "y");
    }

    #[test]
    fn input_closed_propagates() {
        let (mut term, _) = Terminal::buffered();
        let err = term.input(["?"], &InputOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Input(limelight_input::InputError::Closed)
        ));
    }

    #[test]
    fn log_labels() {
        let (mut term, out) = Terminal::buffered();
        term.log(LogLevel::Warn, ["disk", "low"], true).unwrap();
        term.log(LogLevel::Info, ["plain"], false).unwrap();
        assert_eq!(
            out.contents(),
            "\x1b[33m[WARN]\x1b[0m disk low\n[INFO] plain\n"
        );
    }

    #[test]
    fn set_color_and_space() {
        let (mut term, out) = Terminal::buffered();
        term.set_color(&Color::rgb(1, 2, 3)).unwrap();
        term.space().unwrap();
        assert_eq!(out.contents(), "\x1b[38;2;1;2;3m\n");
    }

    #[test]
    fn progress_bar_one_shot() {
        let (mut term, _) = Terminal::buffered();
        let bar = BarTemplate::new("[has]|[need]|[prog]%", "-", 10);
        assert_eq!(term.progress_bar(&bar, 3, 10, "", false), "---|-------|30%");
    }

    #[test]
    fn progress_bar_zero_need() {
        let (mut term, _) = Terminal::buffered();
        let bar = BarTemplate::new("[[has][need]] [prog]%", "#", 4);
        assert_eq!(term.progress_bar(&bar, 5, 0, "\n", true), "[####] 0%\n");
    }

    #[test]
    fn registry_mutations_through_terminal() {
        let (mut term, _) = Terminal::buffered();
        term.add_color(Color::rgb(255, 107, 53), Some("$org")).unwrap();
        assert_eq!(
            term.format(["$orgfire"], &PrintOptions::format()),
            "\x1b[38;2;255;107;53mfire"
        );
        assert!(term.remove_color("$org", None).is_some());
        assert!(term.lookup("$org").is_none());
        assert!(term.lookup("$red").is_some());
    }
}
