//! CLI module for tpkit - command-line surfaces for both tools.
//!
//! `taskman` maps subcommands onto the task service; `calc` runs one
//! calculation or an interactive loop over the calculator service.

pub mod calc;
pub mod repl;
pub mod taskman;

pub use calc::CalcCli;
pub use taskman::TaskCli;
