use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};
use std::io;

use tpkit::cli::TaskCli;
use tpkit::cli::taskman::{FAILURE_EXIT_CODE, run};
use tpkit::config::Config;
use tpkit::logging::setup_logging;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = TaskCli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_tasks_file(cli.file.as_ref());

    let log_file = setup_logging("taskman", config.log_level.as_deref()).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    config.ensure_default_dir(&config.storage.tasks_file)?;

    if cli.is_verbose() {
        eprintln!("{} {}", "Tasks file:".yellow(), config.storage.tasks_file.display());
        eprintln!("{} {}", "Log file:".yellow(), log_file.display());
    }

    let stdout = io::stdout();
    if let Err(err) = run(&cli, &config, &mut stdout.lock()) {
        error!("Task command failed: {}", err);
        eprintln!("{} {}", "✗".red(), err);
        std::process::exit(FAILURE_EXIT_CODE);
    }

    Ok(())
}
