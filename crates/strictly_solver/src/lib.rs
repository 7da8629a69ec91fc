//! Strictly Solver - command-line match runner for `strictly_tictactoe`.
//!
//! # Architecture
//!
//! - **Cli**: clap argument parsing (`inspect`, `best-move`, `play`)
//! - **Config**: optional TOML file with output format and log filter
//! - **Report**: runs a command against the solver and renders text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

pub use cli::{Cli, Command};
pub use config::{ConfigError, OutputFormat, SolverConfig};
pub use report::{BestMove, Inspection, Report, execute};
