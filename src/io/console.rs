use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use crate::common::{error::AppError, event::MenuChoice};

const BANNER: &str = "BANKING SYSTEM\n===================================";

/// Line-oriented prompts over any reader/writer pair: stdin/stdout in the
/// binary, in-memory buffers in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `label`, then reads one line without its terminator.
    /// `None` means the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`Console::prompt`], but a closed input is an error.
    pub fn require(&mut self, label: &str) -> Result<String, AppError> {
        self.prompt(label)?.ok_or(AppError::InputClosed)
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n{BANNER}\n")?;
        writeln!(self.output, "Please select an option:\n")?;
        writeln!(self.output, "Options:\n")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
