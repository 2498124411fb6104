//! Line-based prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};

use crate::error::{Error, Result};

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap a reader and a writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and return the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] if the input ends before a line is read.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(Error::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Consume the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
