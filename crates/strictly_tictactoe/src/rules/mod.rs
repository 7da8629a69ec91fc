//! Game rules: pure queries over a [`Board`].
//!
//! Nothing here keeps state between calls. Every function takes the board
//! by reference and either answers a question about it or builds a new one.

mod draw;
mod win;

pub use draw::is_filled;
pub use win::{LINES, line_owners, winner};

use crate::contracts::{Contract, ResultContract};
use crate::{Action, Board, InvalidAction, Outcome, Player, Square};
use std::collections::HashSet;
use tracing::instrument;

/// Returns the starting position: an all-empty board.
#[instrument(level = "trace")]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is.
///
/// X moves whenever both players have placed the same number of marks,
/// otherwise O moves. Only meaningful on reachable boards.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty square as an action.
///
/// The result is a set; its iteration order is unspecified.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> HashSet<Action> {
    let mut moves = HashSet::with_capacity(9);
    for row in 0..Board::SIZE {
        for col in 0..Board::SIZE {
            if board.get(row, col) == Some(Square::Empty) {
                moves.insert(Action::new(row, col));
            }
        }
    }
    moves
}

/// Returns the board that results from the side to move playing `action`.
///
/// # Errors
///
/// Returns [`InvalidAction`] if the coordinates fall outside the board or
/// the square is already occupied. The input board is never modified.
#[track_caller]
#[instrument(level = "trace", skip(board), fields(action = %action))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    ResultContract::pre(board, &action)?;
    let next = place(board, action);
    debug_assert!(
        ResultContract::post(board, &next).is_ok(),
        "result changed more than the target square"
    );
    Ok(next)
}

/// Places the mover's mark without validation.
///
/// Only called with actions produced by [`actions`].
pub(crate) fn place(board: &Board, action: Action) -> Board {
    board.with_square(action.row, action.col, Square::Occupied(player(board)))
}

/// Returns true if the game is over (a completed line or a full board).
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    is_filled(board) || winner(board).is_some()
}

/// Scores a finished game: +1 if X won, -1 if O won, 0 otherwise.
///
/// Only meaningful when [`terminal`] holds; a non-terminal board scores as
/// a draw.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None => Outcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidActionKind;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(player(&board), Player::X);
        assert_eq!(actions(&board).len(), 9);
    }

    #[test]
    fn test_player_alternates() {
        let board = initial_state();
        let board = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(player(&board), Player::O);
        let board = result(&board, Action::new(0, 0)).unwrap();
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_actions_lists_empty_squares() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let moves = actions(&board);
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&Action::new(0, 0)));
        assert!(!moves.contains(&Action::new(1, 1)));
        assert!(moves.contains(&Action::new(0, 2)));
    }

    #[test]
    fn test_result_does_not_mutate_input() {
        let board = initial_state();
        let next = result(&board, Action::new(0, 2)).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(0, 2), Some(X));
    }

    #[test]
    fn test_result_rejects_out_of_bounds() {
        let err = result(&initial_state(), Action::new(3, 0)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::OutOfBounds { row: 3, col: 0 });
    }

    #[test]
    fn test_result_rejects_occupied() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let err = result(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err.kind,
            InvalidActionKind::Occupied {
                row: 0,
                col: 0,
                by: Player::X
            }
        );
        assert!(err.to_string().contains("already occupied"));
    }

    #[test]
    fn test_terminal_and_utility() {
        let x_wins = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert!(terminal(&x_wins));
        assert_eq!(utility(&x_wins), Outcome::XWins);

        let o_wins = Board::from_rows([[X, X, O], [X, O, E], [O, E, E]]);
        assert!(terminal(&o_wins));
        assert_eq!(utility(&o_wins).score(), -1);

        let draw = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(terminal(&draw));
        assert_eq!(utility(&draw).score(), 0);

        assert!(!terminal(&initial_state()));
    }
}
