//! Console I/O and the retry-until-valid read primitives
//!
//! Every read keeps asking until it gets a well-formed answer. Malformed
//! answers produce a diagnostic on the output and another read from the same
//! input; the only way out besides a valid answer is the input closing, which
//! fails with [`ReplError::InputExhausted`].

use super::error::{ReplError, Result};
use super::input::InputSource;
use colored::Colorize;
use std::collections::VecDeque;
use std::io::Write;

/// Diagnostic for a token that is not an integer
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";

/// Diagnostic for a yes/no answer that is neither
pub const INVALID_YES_NO: &str = "Invalid choice. Please enter 'yes' or 'no'.";

/// Input/output pair owned by the loop.
///
/// Integer reads are token based: a bad token is reported and skipped, the
/// next token on the same line is tried, and once an integer is accepted the
/// rest of its line is discarded. Text reads are line based and trimmed.
pub struct Console<I, W> {
    input: I,
    output: W,
    color: bool,
    /// Unread tokens of the current line (integer reads only)
    tokens: VecDeque<String>,
}

impl<I: InputSource, W: Write> Console<I, W> {
    /// Create a console without colour
    pub fn new(input: I, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
            tokens: VecDeque::new(),
        }
    }

    /// Enable or disable coloured diagnostics
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Borrow the output sink
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Split back into input and output
    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    /// Write a message followed by a newline
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Write a diagnostic about malformed input
    pub fn warn(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.yellow())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    /// Write a confirmation of a completed action
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.green())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn next_line(&mut self) -> Result<String> {
        self.tokens.clear();
        self.output.flush()?;
        match self.input.next_line()? {
            Some(line) => Ok(line),
            None => Err(ReplError::InputExhausted),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }
            let line = self.next_line()?;
            self.tokens.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prompt for a line and parse it, re-prompting until `parse` accepts.
    ///
    /// The line is trimmed before parsing. On rejection the error message is
    /// written as a diagnostic and the prompt is shown again.
    pub fn read_validated<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        loop {
            self.say(prompt)?;
            let line = self.next_line()?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(message) => self.warn(&message)?,
            }
        }
    }

    /// Read an integer, skipping non-integer tokens.
    ///
    /// Each rejected token produces one [`INVALID_NUMBER`] diagnostic. Blank
    /// lines are skipped silently.
    pub fn read_integer(&mut self) -> Result<i32> {
        loop {
            let token = self.next_token()?;
            match token.parse::<i32>() {
                Ok(value) => {
                    self.tokens.clear();
                    return Ok(value);
                }
                Err(_) => {
                    log::debug!("Rejected integer token {:?}", token);
                    self.warn(INVALID_NUMBER)?;
                }
            }
        }
    }

    /// Show `prompt`, then [`read_integer`](Self::read_integer)
    pub fn prompt_integer(&mut self, prompt: &str) -> Result<i32> {
        self.say(prompt)?;
        self.read_integer()
    }

    /// Ask a yes/no question; matching is case-insensitive and exact otherwise
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.read_validated(prompt, |answer| match answer.to_lowercase().as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            _ => Err(INVALID_YES_NO.to_string()),
        })
    }

    /// Read a numeric menu code and map it onto a choice type.
    ///
    /// `prompt` (the menu) is shown before every attempt. Non-integer input is
    /// handled by [`read_integer`](Self::read_integer); a code the choice type
    /// rejects writes `invalid` and shows the menu again.
    pub fn read_choice<C>(&mut self, prompt: &str, invalid: &str) -> Result<C>
    where
        C: TryFrom<i32>,
    {
        loop {
            let code = self.prompt_integer(prompt)?;
            match C::try_from(code) {
                Ok(choice) => return Ok(choice),
                Err(_) => {
                    log::debug!("Rejected menu code {}", code);
                    self.warn(invalid)?;
                }
            }
        }
    }
}
