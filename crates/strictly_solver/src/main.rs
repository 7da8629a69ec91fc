//! Strictly Solver - Unified CLI
//!
//! Inspect boards, ask for the optimal move, or play positions out.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_solver::{Cli, SolverConfig, execute};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };
    let config = config.with_format(cli.format);

    initialize_tracing(cli.log.as_deref(), config.log_filter());
    debug!(?config, "Configuration resolved");

    run(&cli, &config)
}

/// Installs the stderr subscriber.
///
/// Precedence: `--log`, then `RUST_LOG`, then the config file.
fn initialize_tracing(cli_filter: Option<&str>, config_filter: &str) {
    let filter = match cli_filter {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config_filter)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: &Cli, config: &SolverConfig) -> Result<()> {
    let output = execute(&cli.command, *config.format())?;
    println!("{}", output);
    Ok(())
}
