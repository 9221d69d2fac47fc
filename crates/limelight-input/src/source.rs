//! The [`InputSource`] trait and its console-backed implementation.

use std::io::{self, BufRead, Read};

use console::Term;

use crate::InputError;

/// Abstraction over blocking user input.
pub trait InputSource {
    /// Check if input comes from an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Shows `initial_text` inline, then reads one line without its
    /// trailing newline.
    ///
    /// Returns [`InputError::Closed`] if the stream is already at EOF.
    fn read_line(&mut self, initial_text: &str) -> Result<String, InputError>;

    /// Reads exactly `count` characters without line buffering.
    ///
    /// Fewer characters are returned only if the stream ends first.
    fn read_chars(&mut self, count: usize) -> Result<String, InputError>;
}

/// Real input from the process's terminal.
///
/// Interactive sessions read through [`console::Term`] so single characters
/// arrive without Enter; piped stdin falls back to plain buffered reads.
#[derive(Debug, Clone)]
pub struct ConsoleInput {
    term: Term,
}

impl ConsoleInput {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for ConsoleInput {
    fn is_terminal(&self) -> bool {
        self.term.is_term()
    }

    fn read_line(&mut self, initial_text: &str) -> Result<String, InputError> {
        if !initial_text.is_empty() {
            self.term.write_str(initial_text)?;
            self.term.flush()?;
        }

        if self.is_terminal() {
            return Ok(self.term.read_line()?);
        }

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(InputError::Closed);
        }
        Ok(line
            .trim_end_matches('\n')
            .trim_end_matches('\r')
            .to_string())
    }

    fn read_chars(&mut self, count: usize) -> Result<String, InputError> {
        let mut result = String::with_capacity(count);

        if self.is_terminal() {
            for _ in 0..count {
                result.push(self.term.read_char()?);
            }
            return Ok(result);
        }

        read_utf8_chars(&mut io::stdin().lock(), count, &mut result)?;
        tracing::trace!(requested = count, read = result.chars().count(), "read characters from stdin");
        Ok(result)
    }
}

/// Decodes up to `count` UTF-8 characters from `reader`, one byte at a time.
fn read_utf8_chars<R: Read>(reader: &mut R, count: usize, out: &mut String) -> io::Result<()> {
    let mut pending: Vec<u8> = Vec::with_capacity(4);
    let mut decoded = 0;
    let mut byte = [0u8; 1];

    while decoded < count {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        pending.push(byte[0]);
        match std::str::from_utf8(&pending) {
            Ok(s) => {
                out.push_str(s);
                pending.clear();
                decoded += 1;
            }
            Err(e) if e.error_len().is_some() => {
                return Err(io::Error::new(io::ErrorKind::InvalidData, e));
            }
            // Incomplete sequence, keep reading
            Err(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_exact_ascii_count() {
        let mut reader: &[u8] = b"abcdef";
        let mut out = String::new();
        read_utf8_chars(&mut reader, 3, &mut out).unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn reads_multibyte_chars() {
        let mut reader: &[u8] = "héllo".as_bytes();
        let mut out = String::new();
        read_utf8_chars(&mut reader, 2, &mut out).unwrap();
        assert_eq!(out, "hé");
    }

    #[test]
    fn stops_at_eof() {
        let mut reader: &[u8] = b"ab";
        let mut out = String::new();
        read_utf8_chars(&mut reader, 5, &mut out).unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn zero_count_reads_nothing() {
        let mut reader: &[u8] = b"ab";
        let mut out = String::new();
        read_utf8_chars(&mut reader, 0, &mut out).unwrap();
        assert_eq!(out, "");
        assert_eq!(reader, b"ab");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut reader: &[u8] = &[0xff, b'a'];
        let mut out = String::new();
        let err = read_utf8_chars(&mut reader, 2, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
