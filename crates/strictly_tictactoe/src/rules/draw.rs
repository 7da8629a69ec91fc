//! Full-board detection for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (no empty squares).
///
/// A full board with no winner is a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_filled(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
