//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines as `(row, col)` triples, in scan order.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of the first complete line, scanning rows, then
/// columns, then diagonals.
///
/// Returns `None` if no line is complete.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    LINES
        .iter()
        .find_map(|line| line_owner(board, line))
}

/// Returns every player owning at least one complete line.
///
/// A reachable board has at most one; this is used to detect boards that
/// are not.
pub fn line_owners(board: &Board) -> Vec<Player> {
    let mut owners = Vec::new();
    for line in &LINES {
        if let Some(player) = line_owner(board, line)
            && !owners.contains(&player)
        {
            owners.push(player);
        }
    }
    owners
}

fn line_owner(board: &Board, line: &[(usize, usize); 3]) -> Option<Player> {
    let [a, b, c] = line.map(|(row, col)| board.get(row, col));
    match (a, b, c) {
        (Some(Square::Occupied(p1)), Some(Square::Occupied(p2)), Some(Square::Occupied(p3)))
            if p1 == p2 && p2 == p3 =>
        {
            Some(p1)
        }
        _ => None,
    }
}
