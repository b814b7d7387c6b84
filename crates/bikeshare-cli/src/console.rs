//! Line-oriented console over any reader and writer.

use crate::error::CliResult;
use bikeshare_common::BikeshareError;
use std::io::{BufRead, Write};

/// Prompts on a writer and reads answers line by line from a reader.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a newline and returns the answer with its line
    /// terminator removed. End of input is [`BikeshareError::InputClosed`].
    pub fn ask(&mut self, prompt: &str) -> CliResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed.into());
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Prints a line.
    pub fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writer for report output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
