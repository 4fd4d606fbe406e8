//! Task manager command definitions and handlers.
//!
//! Defines the `taskman` CLI structure and subcommands:
//! - add: create a task
//! - list: show every task
//! - show: show a single task
//! - toggle: flip a task's completion flag
//! - delete: remove a task

use clap::{CommandFactory, Parser, Subcommand};
use colored::*;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::service::TaskService;

/// Simple task manager backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "taskman")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  taskman add \"Buy groceries\"\n  taskman list\n  taskman toggle 1\n  taskman delete 1")]
pub struct TaskCli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Task file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<TaskCommands>,
}

impl TaskCli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Task subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TaskCommands {
    /// Add a new task
    Add {
        /// Task title
        title: String,
    },

    /// List all tasks
    List,

    /// Show a single task
    Show {
        /// Task ID
        id: u64,
    },

    /// Toggle task completion status
    Toggle {
        /// Task ID
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
}

/// Exit code for any failed task command; clap keeps 2 for argument errors
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Dispatch a parsed command line, writing user output to `out`
pub fn run<W: Write>(cli: &TaskCli, config: &Config, out: &mut W) -> Result<()> {
    let Some(command) = &cli.command else {
        write!(out, "{}", TaskCli::command().render_help())?;
        return Ok(());
    };

    info!("Handling task command: {:?}", command);
    let mut service = TaskService::open(config)?;

    match command {
        TaskCommands::Add { title } => {
            let task = service.add(title)?;
            writeln!(out, "{} Task added: {}", "✓".green(), task)?;
        }
        TaskCommands::List => {
            let tasks = service.list()?;
            if tasks.is_empty() {
                writeln!(out, "No tasks found.")?;
                return Ok(());
            }
            let width = config.display.list_width;
            let rule = "=".repeat(width);
            writeln!(out, "\n{}", rule)?;
            writeln!(out, "{:^width$}", "TASKS")?;
            writeln!(out, "{}", rule)?;
            for task in tasks {
                writeln!(out, "{}", task)?;
            }
            writeln!(out, "{}\n", rule)?;
        }
        TaskCommands::Show { id } => {
            let task = service.get(*id)?;
            writeln!(out, "{}", task)?;
        }
        TaskCommands::Toggle { id } => {
            let task = service.toggle(*id)?;
            writeln!(out, "{} Task {} toggled: {}", "✓".green(), id, task)?;
        }
        TaskCommands::Delete { id } => {
            service.delete(*id)?;
            writeln!(out, "{} Task {} deleted.", "✓".green(), id)?;
        }
    }

    Ok(())
}
