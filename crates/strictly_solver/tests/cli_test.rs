//! Tests for the solver command line.

use clap::Parser;
use std::io::Write;
use strictly_solver::{Cli, Command, OutputFormat, SolverConfig, execute};
use strictly_tictactoe::{Action, Board};

#[test]
fn test_parse_best_move_command() {
    let cli = Cli::try_parse_from(["strictly_solver", "best-move", "XX./O../..."]).unwrap();
    let expected: Board = "XX./O../...".parse().unwrap();
    assert!(matches!(cli.command, Command::BestMove { board } if board == expected));
    assert_eq!(cli.format, None);
}

#[test]
fn test_parse_rejects_bad_board() {
    assert!(Cli::try_parse_from(["strictly_solver", "inspect", "XXX/XXX/XXX"]).is_err());
    assert!(Cli::try_parse_from(["strictly_solver", "inspect", "XZ."]).is_err());
}

#[test]
fn test_global_format_flag() {
    let cli = Cli::try_parse_from(["strictly_solver", "play", "--format", "json"]).unwrap();
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert!(matches!(cli.command, Command::Play { from: None }));
}

#[test]
fn test_best_move_text_output() {
    let board: Board = "XX./O../...".parse().unwrap();
    let output = execute(&Command::BestMove { board }, OutputFormat::Text).unwrap();
    assert!(output.starts_with("best move for O: (0, 2)"), "{output}");
    assert!(output.contains("expected outcome: X wins"), "{output}");
}

#[test]
fn test_best_move_json_output() {
    let board: Board = "..O/.X./...".parse().unwrap();
    let output = execute(&Command::BestMove { board }, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let action: Action = serde_json::from_value(value["analysis"]["action"].clone()).unwrap();
    assert_eq!(Some(action), strictly_tictactoe::minimax(&board));
    assert_eq!(value["to_move"], "X");
}

#[test]
fn test_best_move_on_finished_game() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let output = execute(&Command::BestMove { board }, OutputFormat::Text).unwrap();
    assert_eq!(output, "game over: X wins");
}

#[test]
fn test_inspect_text_output() {
    let board: Board = "X../.O./...".parse().unwrap();
    let output = execute(&Command::Inspect { board }, OutputFormat::Text).unwrap();
    assert!(output.contains("to move: X"), "{output}");
    assert!(output.contains("actions: (0, 1) (0, 2) (1, 0)"), "{output}");
    assert!(output.contains("terminal: false"), "{output}");
    assert!(!output.contains("utility"), "{output}");
}

#[test]
fn test_play_json_ends_in_draw() {
    let output = execute(&Command::Play { from: None }, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["outcome"], "Draw");
    assert_eq!(value["plies"].as_array().map(Vec::len), Some(9));
}

#[test]
fn test_play_text_output() {
    let from: Board = "XX./OO./...".parse().unwrap();
    let output = execute(&Command::Play { from: Some(from) }, OutputFormat::Text).unwrap();
    assert!(output.contains("1. X plays (0, 2)"), "{output}");
    assert!(output.ends_with("result: X wins"), "{output}");
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"").unwrap();
    writeln!(file, "log_filter = \"strictly_tictactoe=debug\"").unwrap();

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.format(), OutputFormat::Json);
    assert_eq!(config.log_filter(), "strictly_tictactoe=debug");
}

#[test]
fn test_config_file_errors() {
    assert!(SolverConfig::from_file("/nonexistent/solver.toml").is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"yaml\"").unwrap();
    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
