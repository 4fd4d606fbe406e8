//! Calculator command definitions and handlers.
//!
//! `calc <op> <a> <b>` computes one result; `calc` with no operands starts
//! the interactive loop.

use clap::Parser;
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::repl::{Repl, parse_number};
use crate::config::Config;
use crate::domain::Operation;
use crate::error::{ErrorCategory, Result, TpkitError};
use crate::service::CalculatorService;

pub const USAGE: &str = "Usage: <op> <a> <b>\nops: add sub mul div";

/// Calculator with persisted history
#[derive(Parser, Debug)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
pub struct CalcCli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// History file to use instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Operation and operands; omit to start the interactive loop
    #[arg(value_name = "OP A B", allow_negative_numbers = true)]
    pub args: Vec<String>,
}

impl CalcCli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_interactive(&self) -> bool {
        self.args.is_empty()
    }
}

/// Exit code for a failed one-shot calculation
pub fn exit_code(err: &TpkitError) -> i32 {
    match err.category() {
        ErrorCategory::Validation => 2,
        ErrorCategory::Domain => 3,
        ErrorCategory::Io | ErrorCategory::Corrupt => 4,
    }
}

/// Validate one-shot arguments into an operation and two operands
pub fn parse_one_shot(args: &[String]) -> Result<(Operation, f64, f64)> {
    let [op, a, b] = args else {
        return Err(TpkitError::Usage(USAGE.to_string()));
    };
    let operation: Operation = op.parse()?;
    Ok((operation, parse_number(a)?, parse_number(b)?))
}

/// Dispatch a parsed command line
pub fn run<R: BufRead, W: Write>(cli: &CalcCli, config: &Config, input: R, out: &mut W) -> Result<()> {
    if cli.is_interactive() {
        info!("Starting interactive calculator");
        let mut service = CalculatorService::open(config)?;
        let target = service.path().display().to_string();
        return Repl::new(&mut service, config.display.date_format.as_str(), target, input, out).run();
    }

    let (operation, a, b) = parse_one_shot(&cli.args)?;
    let mut service = CalculatorService::open(config)?;
    let result = service.perform(operation, a, b)?;
    writeln!(out, "{}", result)?;
    Ok(())
}
