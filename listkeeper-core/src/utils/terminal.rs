//! # Terminal Input Helper
//!
//! This module provides utilities for interacting with the terminal to
//! request user input. Every prompt repeats until the input satisfies its
//! constraint, so callers only ever receive conforming values.
//!
//! The line-based prompts rely on [`Sanitize`] for validation. Numeric prompts
//! read whitespace-delimited tokens instead of whole lines: a malformed token
//! is discarded on its own, and once a token parses the rest of its line is
//! dropped so the next line-based read starts clean.
//!
//! ## Features
//! - Continuously prompts the user until valid input is received.
//! - Reader and writer are plain [`BufRead`] / [`Write`] values, so scripted
//!   streams can stand in for the console.
//! - Errors only describe the stream itself (closed, unreadable), never the
//!   content typed by the user.
//!
//! ## Usage
//!
//! ### Example 1: Ranged integer
//! ```rust,no_run
//! use listkeeper_core::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let threads = terminal.read_ranged_int("Enter scan threads", 1, 16).unwrap();
//!
//! println!("The input: {}", threads);
//! ```
//!
//! ### Example 2: Confirmation
//! ```rust,no_run
//! use listkeeper_core::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! if terminal.read_yes_no("Do you like Rust?").unwrap() {
//!     println!("Good answer");
//! }
//! ```

use crate::utils::header::pretty_header;
use crate::utils::sanitize::{Bounds, DesiredType, FilterError, Pattern, Sanitize, YesNo};
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures that end a prompt without an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input stream closed before a valid answer was given")]
    EndOfInput,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("no value can satisfy the range {0}")]
    EmptyRange(Bounds),
}

/// A bidirectional text stream that hands out validated answers.
///
/// `pending` holds what is left of the current line after a token read.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    pending: Option<String>,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Locks stdin for the lifetime of the returned terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: None,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line of plain output.
    pub fn print_line(&mut self, line: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes a boxed banner, see [`pretty_header`].
    pub fn header(&mut self, msg: &str) -> Result<(), PromptError> {
        pretty_header(&mut self.output, msg)?;
        Ok(())
    }

    /// Prints a question and loops until the trimmed answer passes every filter.
    /// Returns the trimmed answer.
    pub fn ask(&mut self, question: &str, filters: &[Sanitize]) -> Result<String, PromptError> {
        self.retry_line(question, |line| Sanitize::execute(line, filters))
    }

    /// Reads a single line with no validation; an empty line is returned as is.
    pub fn read_line(&mut self, question: &str) -> Result<String, PromptError> {
        self.prompt(question)?;
        self.next_line()
    }

    pub fn read_non_empty_line(&mut self, question: &str) -> Result<String, PromptError> {
        self.ask(question, &[Sanitize::NonEmpty])
    }

    pub fn read_int(&mut self, question: &str) -> Result<i64, PromptError> {
        self.retry_token(question, DesiredType::Int, &[])
    }

    pub fn read_double(&mut self, question: &str) -> Result<f64, PromptError> {
        self.retry_token(question, DesiredType::Double, &[])
    }

    /// Loops until an integer within `[min, max]` is entered.
    ///
    /// The range is shown once in the prompt and again in every out-of-range
    /// message.
    pub fn read_ranged_int(
        &mut self,
        question: &str,
        min: i64,
        max: i64,
    ) -> Result<i64, PromptError> {
        self.retry_ranged(question, Bounds::Int(min, max))
    }

    pub fn read_ranged_double(
        &mut self,
        question: &str,
        min: f64,
        max: f64,
    ) -> Result<f64, PromptError> {
        self.retry_ranged(question, Bounds::Double(min, max))
    }

    /// Accepts `Y` or `N` in any case, surrounded by any whitespace.
    pub fn read_yes_no(&mut self, question: &str) -> Result<bool, PromptError> {
        let question = format!("{} [Y/N]", question);
        let answer = self.retry_line(&question, |line| line.parse::<YesNo>())?;
        Ok(answer.into())
    }

    /// Loops until the trimmed line matches `pattern` from start to end.
    pub fn read_matching(&mut self, question: &str, pattern: &str) -> Result<String, PromptError> {
        let pattern = Pattern::new(pattern)?;
        self.ask(question, &[Sanitize::Matches(pattern)])
    }

    fn retry_ranged<T: FromStr>(
        &mut self,
        question: &str,
        bounds: Bounds,
    ) -> Result<T, PromptError> {
        if bounds.is_empty() {
            return Err(PromptError::EmptyRange(bounds));
        }
        let question = format!("{} {}", question, bounds);
        self.retry_token(&question, bounds.kind(), &[Sanitize::IsBetween(bounds)])
    }

    fn retry_line<T>(
        &mut self,
        question: &str,
        mut accept: impl FnMut(&str) -> Result<T, FilterError>,
    ) -> Result<T, PromptError> {
        self.prompt(question)?;
        loop {
            let line = self.next_line()?;
            match accept(&line) {
                Ok(answer) => break Ok(answer),
                Err(e) => {
                    debug!(input = %line, reason = %e, "rejected line");
                    self.prompt(&e.to_string())?;
                }
            }
        }
    }

    fn retry_token<T: FromStr>(
        &mut self,
        question: &str,
        kind: DesiredType,
        filters: &[Sanitize],
    ) -> Result<T, PromptError> {
        self.prompt(question)?;
        loop {
            let token = self.next_token()?;
            let Ok(value) = token.parse::<T>() else {
                let e = FilterError::Number(kind);
                debug!(input = %token, reason = %e, "discarded token");
                self.prompt(&e.to_string())?;
                continue;
            };

            self.pending = None;
            match Sanitize::execute(&token, filters) {
                Ok(_) => break Ok(value),
                Err(e) => {
                    debug!(input = %token, reason = %e, "rejected value");
                    self.prompt(&e.to_string())?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), PromptError> {
        write!(self.output, "{}: ", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns the rest of the current line if a token read left one,
    /// otherwise reads a fresh line without its terminator.
    fn next_line(&mut self) -> Result<String, PromptError> {
        if let Some(rest) = self.pending.take() {
            return Ok(rest);
        }

        // Undecodable bytes become U+FFFD so the filters reject them like any other typo.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            warn!("input stream closed while waiting for an answer");
            return Err(PromptError::EndOfInput);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Skips whitespace, across lines if needed, and returns the next token.
    fn next_token(&mut self) -> Result<String, PromptError> {
        loop {
            let line = self.next_line()?;
            let rest = line.trim_start();
            if rest.is_empty() {
                continue;
            }

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let (token, remainder) = rest.split_at(end);
            self.pending = Some(remainder.to_string());
            break Ok(token.to_string());
        }
    }
}
