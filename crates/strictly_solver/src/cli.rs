//! Command-line interface for strictly_solver.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use strictly_tictactoe::Board;

/// Strictly Solver - optimal tic-tac-toe moves from the command line
///
/// Boards are nine squares in row-major order: X, O, or `.` for empty.
/// Row separators (`/`) and spaces are ignored, e.g. `XX./O../...`.
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Exhaustive alpha-beta tic-tac-toe solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Tracing filter (overrides RUST_LOG and the config file)
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show whose turn it is, the legal moves, and whether the game is over
    Inspect {
        /// Board to inspect
        board: Board,
    },

    /// Search for the optimal move
    BestMove {
        /// Board to search from
        board: Board,
    },

    /// Play a position out with optimal moves for both sides
    Play {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<Board>,
    },
}
