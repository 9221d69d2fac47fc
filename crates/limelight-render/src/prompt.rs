//! Menu and confirmation prompts.

use crate::builder::Builder;
use crate::error::RenderError;
use crate::options::{InputOptions, PrintOptions};
use crate::terminal::Terminal;

/// Answers [`confirm`] accepts as yes by default.
pub const DEFAULT_YES: &[&str] = &["y", "yes"];
/// Answers [`confirm`] accepts as no by default.
pub const DEFAULT_NO: &[&str] = &["n", "no"];

/// Shows `title` and one line per option, then reads the answer after `prompt`.
///
/// The answer is returned as typed; matching it to an option is up to the caller.
pub fn select_menu<S: AsRef<str>>(
    term: &mut Terminal,
    options: &[S],
    title: &str,
    prompt: &str,
    color: bool,
) -> Result<String, RenderError> {
    let mut builder = Builder::new();
    builder.print(term, [title], &PrintOptions::default().color(color));
    let lines: Vec<&str> = options.iter().map(AsRef::as_ref).collect();
    builder.push_str(&lines.join("\n"));
    builder.render(term, &PrintOptions::default().color(color))?;
    term.input([prompt], &InputOptions::default().color(color))
}

/// Asks a yes/no question.
///
/// Answers are compared case-insensitively. Anything outside both
/// vocabularies yields `None`.
pub fn confirm(
    term: &mut Terminal,
    prompt: &str,
    yes: &[&str],
    no: &[&str],
    color: bool,
) -> Result<Option<bool>, RenderError> {
    let answer = term
        .input([prompt], &InputOptions::default().color(color))?
        .trim()
        .to_lowercase();
    if yes.iter().any(|y| y.eq_ignore_ascii_case(&answer)) {
        Ok(Some(true))
    } else if no.iter().any(|n| n.eq_ignore_ascii_case(&answer)) {
        Ok(Some(false))
    } else {
        Ok(None)
    }
}
