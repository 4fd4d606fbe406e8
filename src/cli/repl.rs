//! Interactive calculator loop.

use std::io::{BufRead, Write};

use log::debug;

use crate::domain::{CalculationEntry, Operation};
use crate::error::{ErrorCategory, Result, TpkitError};
use crate::service::CalculatorService;
use crate::storage::RecordStore;

pub const BANNER: &str = "Calculator CLI - type 'help' for commands";
pub const PROMPT: &str = "calc> ";
pub const HELP: &str = "Commands: add/sub/mul/div a b | history | save | quit";

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read-eval-print loop over a calculator service
pub struct Repl<'a, S: RecordStore<CalculationEntry>, R: BufRead, W: Write> {
    service: &'a mut CalculatorService<S>,
    date_format: String,
    save_target: String,
    input: R,
    out: W,
}

impl<'a, S: RecordStore<CalculationEntry>, R: BufRead, W: Write> Repl<'a, S, R, W> {
    pub fn new(
        service: &'a mut CalculatorService<S>,
        date_format: impl Into<String>,
        save_target: impl Into<String>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            service,
            date_format: date_format.into(),
            save_target: save_target.into(),
            input,
            out,
        }
    }

    /// Run until `quit`/`exit` or end of input
    ///
    /// Command failures are printed and the loop carries on; only failures
    /// to read input or write output end it with an error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if self.execute(line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle one non-empty input line
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Ok(Flow::Continue);
        };
        let command = first.to_ascii_lowercase();
        debug!("REPL command: {}", command);

        match command.as_str() {
            "quit" | "exit" => {
                writeln!(self.out, "Bye")?;
                return Ok(Flow::Quit);
            }
            "help" => writeln!(self.out, "{}", HELP)?,
            "history" => match self.service.history() {
                Ok(entries) if entries.is_empty() => writeln!(self.out, "No history yet.")?,
                Ok(entries) => {
                    for entry in entries {
                        writeln!(self.out, "{}", entry.describe(&self.date_format))?;
                    }
                }
                Err(e) => self.report(&e)?,
            },
            "save" => match self.service.save() {
                Ok(()) => writeln!(self.out, "Saved history to {}", self.save_target)?,
                Err(e) => self.report(&e)?,
            },
            "add" | "sub" | "mul" | "div" => {
                if parts.len() < 3 {
                    writeln!(self.out, "Usage: {} a b", command)?;
                } else {
                    match self.calculate(&command, parts[1], parts[2]) {
                        Ok(result) => writeln!(self.out, "= {}", result)?,
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            _ => writeln!(self.out, "Unknown command. Type help.")?,
        }
        Ok(Flow::Continue)
    }

    fn calculate(&mut self, command: &str, a: &str, b: &str) -> Result<f64> {
        let operation: Operation = command.parse()?;
        let a = parse_number(a)?;
        let b = parse_number(b)?;
        self.service.perform(operation, a, b)
    }

    fn report(&mut self, err: &TpkitError) -> Result<()> {
        match err.category() {
            ErrorCategory::Validation => writeln!(self.out, "{}", err)?,
            ErrorCategory::Domain => writeln!(self.out, "Error: {}", err)?,
            ErrorCategory::Io | ErrorCategory::Corrupt => writeln!(self.out, "I/O error: {}", err)?,
        }
        Ok(())
    }
}

/// Parse a finite operand, keeping the original text in the error
pub fn parse_number(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(TpkitError::InvalidNumber(raw.to_string())),
    }
}
