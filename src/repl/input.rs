//! Line sources for the interactive loop
//!
//! The loop only ever pulls whole lines. [`LineSource`] wraps any
//! [`BufRead`] (piped stdin, files, in-memory cursors in tests) and
//! [`EditorSource`] wraps a rustyline editor for terminals.

use std::io::{self, BufRead};

/// Something the loop can pull lines of text from.
pub trait InputSource {
    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

/// Line source over any buffered reader
pub struct LineSource<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// Unwrap the reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD so the line is rejected as malformed input
        let text = String::from_utf8_lossy(&self.buffer);
        Ok(Some(text.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(feature = "cli")]
pub use editor::EditorSource;

#[cfg(feature = "cli")]
mod editor {
    use super::InputSource;
    use crate::repl::ReplConfig;
    use anyhow::Result;
    use rustyline::error::ReadlineError;
    use rustyline::{Config, DefaultEditor};
    use std::io;
    use std::path::PathBuf;

    /// Line source backed by a rustyline editor with history.
    ///
    /// Ctrl+C and Ctrl+D both close the source, which the loop reports as
    /// exhausted input.
    pub struct EditorSource {
        editor: DefaultEditor,
        prompt: String,
        history_file: Option<PathBuf>,
    }

    impl EditorSource {
        /// Build an editor from the REPL configuration, loading history if present
        pub fn new(config: &ReplConfig) -> Result<Self> {
            let rustyline_config = Config::builder()
                .auto_add_history(true)
                .history_ignore_dups(true)?
                .history_ignore_space(true)
                .max_history_size(config.max_history)?
                .build();

            let mut editor = DefaultEditor::with_config(rustyline_config)?;

            if let Some(path) = &config.history_file {
                if path.exists() {
                    if let Err(e) = editor.load_history(path) {
                        log::warn!("Could not load history from {}: {}", path.display(), e);
                    }
                }
            }

            Ok(Self {
                editor,
                prompt: config.prompt.clone(),
                history_file: config.history_file.clone(),
            })
        }

        /// Write history back to the configured file, if any
        pub fn save_history(&mut self) -> Result<()> {
            if let Some(path) = &self.history_file {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                self.editor.save_history(path)?;
                log::debug!("Saved history to {}", path.display());
            }
            Ok(())
        }
    }

    impl InputSource for EditorSource {
        fn next_line(&mut self) -> io::Result<Option<String>> {
            match self.editor.readline(&self.prompt) {
                Ok(line) => Ok(Some(line)),
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
                Err(ReadlineError::Io(e)) => Err(e),
                Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
            }
        }
    }
}
