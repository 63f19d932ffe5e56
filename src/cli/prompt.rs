//! Readline seam used by the interactive session.
//!
//! The session talks to a [`Prompter`] trait so tests can script input;
//! the production implementation wraps a rustyline editor. The editor is
//! the only shared interactive resource in the program and is owned by the
//! session runner, so dropping the runner releases it on every exit path.

use phab_cadence::ReportError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Source of interactive line input.
pub trait Prompter {
    /// Reads one line of input, displaying the given prompt string.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] when the input stream is closed or the
    /// read fails.
    fn ask(&mut self, prompt: &str) -> Result<String, ReportError>;
}

/// Rustyline-backed prompter.
pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    /// Creates a prompter over a fresh rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] when the terminal cannot be initialised.
    pub fn new() -> Result<Self, ReportError> {
        let editor = DefaultEditor::new().map_err(|error| ReportError::Io {
            message: error.to_string(),
        })?;
        Ok(Self { editor })
    }
}

impl Prompter for ReadlinePrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, ReportError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(ReportError::Io {
                message: "input stream closed".to_owned(),
            }),
            Err(error) => Err(ReportError::Io {
                message: error.to_string(),
            }),
        }
    }
}
