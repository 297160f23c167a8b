//! Line sources: where the engine reads its input from.
//!
//! The dispatch loop is source-agnostic. Interactive terminals, script
//! files and in-memory test fixtures all feed it through [`LineSource`].

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A blocking, line-oriented input source.
///
/// `read_line` returns `Ok(None)` at end of input. The `prompt` is a
/// hint for interactive sources; non-interactive sources ignore it.
pub trait LineSource {
    /// Reads the next line, without its trailing newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether prompts and field hints should be shown to a human.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Line source backed by a buffered reader, used for script files.
pub struct ScriptSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    /// Wraps a reader as a non-interactive line source.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Fixed sequence of lines, for tests.
///
/// # Example
///
/// ```
/// use roster_engine::{LineSource, MemorySource};
///
/// let mut source = MemorySource::new(["first", "second"]);
/// assert_eq!(source.read_line("> ").unwrap(), Some("first".into()));
/// assert_eq!(source.read_line("> ").unwrap(), Some("second".into()));
/// assert_eq!(source.read_line("> ").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    lines: VecDeque<String>,
}

impl MemorySource {
    /// Creates a source yielding the given lines in order.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_source_strips_line_endings() {
        let mut source = ScriptSource::new(Cursor::new("one\r\ntwo\nthree"));
        assert_eq!(source.read_line("").unwrap(), Some("one".into()));
        assert_eq!(source.read_line("").unwrap(), Some("two".into()));
        assert_eq!(source.read_line("").unwrap(), Some("three".into()));
        assert_eq!(source.read_line("").unwrap(), None);
        assert!(!source.is_interactive());
    }

    #[test]
    fn memory_source_yields_in_order_then_eof() {
        let mut source = MemorySource::new(vec!["a".to_string()]);
        assert_eq!(source.read_line("").unwrap(), Some("a".into()));
        assert_eq!(source.read_line("").unwrap(), None);
        assert_eq!(source.read_line("").unwrap(), None);
    }
}
