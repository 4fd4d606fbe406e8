use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};
use std::io;

use tpkit::cli::CalcCli;
use tpkit::cli::calc::{exit_code, run};
use tpkit::config::Config;
use tpkit::logging::setup_logging;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = CalcCli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_history_file(cli.history.as_ref());

    let log_file = setup_logging("calc", config.log_level.as_deref()).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    config.ensure_default_dir(&config.storage.history_file)?;

    if cli.is_verbose() {
        eprintln!("{} {}", "History file:".yellow(), config.storage.history_file.display());
        eprintln!("{} {}", "Log file:".yellow(), log_file.display());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&cli, &config, stdin.lock(), &mut stdout.lock()) {
        error!("Calculation failed: {}", err);
        eprintln!("{} {}", "✗".red(), err);
        std::process::exit(exit_code(&err));
    }

    Ok(())
}
