//! Pure tic-tac-toe rules and an exhaustive alpha-beta solver.
//!
//! The crate exposes free functions over an immutable [`Board`] value:
//!
//! - **State model**: [`initial_state`], [`player`], [`actions`], [`result`],
//!   [`winner`], [`is_filled`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] picks the optimal move, [`analyze`] also reports
//!   its value and search counters
//! - **Driver**: [`Game`] and [`play_out`] for callers that alternate turns
//!
//! Nothing holds global state, so every function is safe to call from
//! independent game sessions at once.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, player, result, Player};
//!
//! let board = initial_state();
//! assert_eq!(player(&board), Player::X);
//!
//! let action = minimax(&board).expect("empty board has moves");
//! let board = result(&board, action)?;
//! assert_eq!(player(&board), Player::O);
//! # Ok::<(), strictly_tictactoe::InvalidAction>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod notation;
mod rules;
mod search;
mod types;

pub mod contracts;
pub mod invariants;

pub use action::Action;
pub use error::{BoardParseError, BoardParseErrorKind, InvalidAction, InvalidActionKind};
pub use game::{Game, GameStatus, MoveError, PlayOut, Ply, play_out};
pub use rules::{
    LINES, actions, initial_state, is_filled, line_owners, player, result, terminal, utility,
    winner,
};
pub use search::{Analysis, SearchStats, analyze, minimax};
pub use types::{Board, Outcome, Player, Square};
