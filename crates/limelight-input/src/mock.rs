//! Scripted input for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::{InputError, InputSource};

#[derive(Debug, Default)]
struct Script {
    lines: VecDeque<String>,
    chars: VecDeque<char>,
    shown: Vec<String>,
}

/// Mock input source that replays scripted answers.
///
/// Lines and characters are queued separately: [`read_line`](InputSource::read_line)
/// consumes whole lines, [`read_chars`](InputSource::read_chars) consumes
/// characters. Clones share the same script, so a test can keep a handle
/// after handing the source to a terminal.
///
/// An exhausted queue behaves like a closed stream.
#[derive(Debug, Clone, Default)]
pub struct MockInput {
    script: Rc<RefCell<Script>>,
}

impl MockInput {
    /// Create a mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock answering with each line in turn.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines.into_iter().fold(Self::new(), |mock, l| mock.line(l))
    }

    /// Queue one more line.
    pub fn line(self, line: impl Into<String>) -> Self {
        self.script.borrow_mut().lines.push_back(line.into());
        self
    }

    /// Queue characters for fixed-count reads.
    pub fn chars(self, chars: &str) -> Self {
        self.script.borrow_mut().chars.extend(chars.chars());
        self
    }

    /// Initial texts shown by `read_line`, in call order.
    pub fn shown(&self) -> Vec<String> {
        self.script.borrow().shown.clone()
    }

    /// Number of lines not yet consumed.
    pub fn remaining_lines(&self) -> usize {
        self.script.borrow().lines.len()
    }
}

impl InputSource for MockInput {
    fn is_terminal(&self) -> bool {
        true
    }

    fn read_line(&mut self, initial_text: &str) -> Result<String, InputError> {
        let mut script = self.script.borrow_mut();
        script.shown.push(initial_text.to_string());
        script.lines.pop_front().ok_or(InputError::Closed)
    }

    fn read_chars(&mut self, count: usize) -> Result<String, InputError> {
        let mut script = self.script.borrow_mut();
        if count > 0 && script.chars.is_empty() {
            return Err(InputError::Closed);
        }
        let take = count.min(script.chars.len());
        Ok(script.chars.drain(..take).collect())
    }
}
