//! Line-based console I/O
//!
//! Wraps any `BufRead`/`Write` pair so the game can run against stdin/stdout
//! or against in-memory buffers in tests. Invalid input is never an error
//! here: the prompt simply repeats until the player complies.

use crate::core::Guess;
use crate::output::formatters::{NAME_PROMPT, NOT_UNDERSTOOD, guess_prompt};
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Read the first `y` or `n` in a line as a yes/no answer
///
/// # Examples
/// ```
/// use codebreaker::interactive::parse_answer;
///
/// assert_eq!(parse_answer("y"), Some(true));
/// assert_eq!(parse_answer("nope, yes"), Some(false));
/// assert_eq!(parse_answer("maybe"), Some(true));
/// assert_eq!(parse_answer("b"), None);
/// ```
#[must_use]
pub fn parse_answer(line: &str) -> Option<bool> {
    line.chars().find_map(|ch| match ch {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    })
}

/// Prompting console over an input and an output stream
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Write one line and flush
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing or flushing fails.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }

    /// Read one line without its line terminator
    ///
    /// Invalid UTF-8 is replaced with U+FFFD, which no prompt accepts, so a
    /// garbled line is rejected and asked again rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if the input is exhausted, or any underlying
    /// read error.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
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

    /// Prompt until a line holds a valid guess
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console fails or the input ends.
    pub fn read_guess(&mut self, hint_available: bool) -> io::Result<Guess> {
        loop {
            self.say(guess_prompt(hint_available))?;
            let line = self.read_line()?;

            match Guess::parse(&line) {
                Ok(guess) => return Ok(guess),
                Err(e) => {
                    debug!("Rejected guess line: {e}");
                    self.say(NOT_UNDERSTOOD)?;
                }
            }
        }
    }

    /// Ask a yes/no question until the answer contains `y` or `n`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console fails or the input ends.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            self.say(question)?;
            if let Some(answer) = parse_answer(&self.read_line()?) {
                return Ok(answer);
            }
        }
    }

    /// Ask for the player's name
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console fails or the input ends.
    pub fn read_name(&mut self) -> io::Result<String> {
        self.say(NAME_PROMPT)?;
        self.read_line()
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }
}
