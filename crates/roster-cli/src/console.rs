//! Interactive console source backed by rustyline.

use roster_engine::LineSource;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;

/// Terminal line source with history and line editing.
///
/// Ctrl-D and Ctrl-C both end the input stream, which the engine treats
/// the same as end of a script.
pub struct ConsoleSource {
    editor: DefaultEditor,
}

impl ConsoleSource {
    /// Creates the editor.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for ConsoleSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(&line);
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(io::Error::other(err)),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
