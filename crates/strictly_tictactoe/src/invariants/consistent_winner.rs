//! Consistent winner invariant: a completed line belongs to the last mover.

use super::Invariant;
use crate::rules::line_owners;
use crate::{Board, Player};
use tracing::warn;

/// Invariant: at most one player owns a line, and that player moved last.
///
/// Play stops at the first completed line, so X can only own a line when X
/// is one mark ahead and O only when the counts are equal.
pub struct ConsistentWinner;

impl Invariant<Board> for ConsistentWinner {
    fn holds(board: &Board) -> bool {
        let owners = line_owners(board);
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = match owners.as_slice() {
            [] => true,
            [Player::X] => x_count == o_count + 1,
            [Player::O] => x_count == o_count,
            _ => false,
        };
        if !valid {
            warn!(?owners, x_count, o_count, "Winner consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player has a line, and that player moved last"
    }
}
