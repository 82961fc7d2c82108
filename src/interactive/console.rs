//! Line-based console prompts
//!
//! Validation lives in `Code::parse`; this layer only prompts, reports
//! the error and asks again.

use crate::core::Code;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prompt/response console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for reports between prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a guess until a valid code is entered
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the console fails.
    pub fn read_guess(&mut self) -> io::Result<Option<Code>> {
        loop {
            write!(
                self.output,
                "Please enter a unique 4 digit guess for the code: "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match Code::parse(&line) {
                Ok(code) => return Ok(Some(code)),
                Err(e) => writeln!(self.output, "{} {e}", "ERROR:".red().bold())?,
            }
        }
    }

    /// Ask whether to play again until the answer is Y or N
    ///
    /// Exhausted input counts as "no".
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing the console fails.
    pub fn read_yes_no(&mut self) -> io::Result<bool> {
        loop {
            writeln!(self.output, "Wanna play again? Y/N")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            match line.trim() {
                "Y" | "y" => return Ok(true),
                "N" | "n" => return Ok(false),
                "" => writeln!(
                    self.output,
                    "{} Please enter a valid character.",
                    "ERROR:".red().bold()
                )?,
                _ => writeln!(
                    self.output,
                    "{} Character is not 'Y' or 'N'",
                    "ERROR:".red().bold()
                )?,
            }
        }
    }

    /// Read one line, `None` at end of input
    ///
    /// Bytes that aren't UTF-8 are replaced, so the line just fails validation.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
