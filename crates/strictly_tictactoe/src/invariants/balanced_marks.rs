//! Balanced marks invariant: X leads O by zero or one mark.

use super::Invariant;
use crate::{Board, Player};
use tracing::warn;

/// Invariant: X has placed as many marks as O, or exactly one more.
///
/// X always moves first and players alternate, so no other count is
/// reachable.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
