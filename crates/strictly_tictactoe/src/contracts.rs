//! Contract-based validation for board transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::invariants::InvariantViolation;
use crate::rules::player;
use crate::{Action, Board, InvalidAction, InvalidActionKind, Square};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Error reported when a precondition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    ///
    /// A failure here is a bug in the transition, not in the caller's input.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Contract for [`crate::result`].
///
/// Preconditions:
/// - Both coordinates lie in `[0, 2]`
/// - The target square is empty
///
/// Postconditions:
/// - Exactly one square changed
/// - That square went from empty to the mover's mark
pub struct ResultContract;

impl Contract<Board, Action> for ResultContract {
    type Error = InvalidAction;

    #[track_caller]
    fn pre(board: &Board, action: &Action) -> Result<(), InvalidAction> {
        match board.get(action.row, action.col) {
            None => Err(InvalidAction::new(InvalidActionKind::OutOfBounds {
                row: action.row,
                col: action.col,
            })),
            Some(Square::Occupied(by)) => Err(InvalidAction::new(InvalidActionKind::Occupied {
                row: action.row,
                col: action.col,
                by,
            })),
            Some(Square::Empty) => Ok(()),
        }
    }

    fn post(before: &Board, after: &Board) -> Result<(), InvariantViolation> {
        let changed: Vec<usize> = before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(idx, _)| idx)
            .collect();

        let expected = Square::Occupied(player(before));
        match changed.as_slice() {
            [idx]
                if before.squares()[*idx] == Square::Empty
                    && after.squares()[*idx] == expected =>
            {
                Ok(())
            }
            _ => {
                warn!(?changed, "Result postcondition violated");
                Err(InvariantViolation::new(format!(
                    "expected one {} placed on an empty square, squares changed: {:?}",
                    player(before),
                    changed
                )))
            }
        }
    }
}

/// Returns true if `after` is `before` with exactly one more mark, placed by
/// the side to move.
#[instrument(level = "trace", skip(before, after))]
pub fn is_single_placement(before: &Board, after: &Board) -> bool {
    ResultContract::post(before, after).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        assert!(ResultContract::pre(&Board::new(), &Action::new(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let err = ResultContract::pre(&Board::new(), &Action::new(0, 3)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::OutOfBounds { row: 0, col: 3 });
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board = crate::result(&Board::new(), Action::new(1, 1)).unwrap();
        assert!(matches!(
            ResultContract::pre(&board, &Action::new(1, 1)),
            Err(InvalidAction {
                kind: InvalidActionKind::Occupied { by: Player::X, .. },
                ..
            })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_result() {
        let before = Board::new();
        let after = crate::result(&before, Action::new(2, 0)).unwrap();
        assert!(is_single_placement(&before, &after));
    }

    #[test]
    fn test_postcondition_detects_wrong_mark() {
        let before = Board::new();
        let after = before.with_square(0, 0, Square::Occupied(Player::O));
        assert!(!is_single_placement(&before, &after));
    }

    #[test]
    fn test_postcondition_detects_two_changes() {
        let before = Board::new();
        let after = before
            .with_square(0, 0, Square::Occupied(Player::X))
            .with_square(0, 1, Square::Occupied(Player::X));
        assert!(!is_single_placement(&before, &after));
    }

    #[test]
    fn test_postcondition_detects_no_change() {
        let before = Board::new();
        assert!(!is_single_placement(&before, &before));
    }
}
