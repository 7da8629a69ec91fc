//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every position produced by legal
//! play satisfies. Boards built by hand or parsed from text are checked
//! against them before the rules are trusted to answer sensibly.

pub mod balanced_marks;
pub mod consistent_winner;

pub use balanced_marks::BalancedMarks;
pub use consistent_winner::ConsistentWinner;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariants of every board reachable from the initial state.
pub type ReachableBoard = (BalancedMarks, ConsistentWinner);

impl crate::Board {
    /// Returns true if legal alternating play can produce this board.
    pub fn is_reachable(&self) -> bool {
        ReachableBoard::check_all(self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Square};

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_is_reachable() {
        assert!(ReachableBoard::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_detects_every_violation() {
        // Three O marks with an O line and no X marks.
        let board = Board::from_rows([[O, O, O], [E, E, E], [E, E, E]]);
        let violations = ReachableBoard::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(!board.is_reachable());
    }

    #[test]
    fn test_mid_game_board_is_reachable() {
        let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]);
        assert!(board.is_reachable());
    }
}
