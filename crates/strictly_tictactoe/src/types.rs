//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square (cell) on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Immutable 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition builds a new board and the
/// previous one stays valid, so sibling branches of a search never share
/// state. Whose turn it is is not stored; see [`crate::player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// No reachability check is made; use [`Board::is_reachable`] for boards
    /// coming from outside.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Builds a board from three rows.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * Self::SIZE..(row + 1) * Self::SIZE].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if row >= Self::SIZE || col >= Self::SIZE {
            return None;
        }
        self.squares.get(row * Self::SIZE + col).copied()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with `(row, col)` set to `square`.
    ///
    /// Callers guarantee the coordinates are in range.
    pub(crate) fn with_square(mut self, row: usize, col: usize, square: Square) -> Self {
        self.squares[row * Self::SIZE + col] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Scored result of a finished game.
///
/// `Draw` doubles as the score of a board that is not finished, which only
/// happens when [`crate::utility`] is called outside its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// X completed a line (+1).
    #[strum(to_string = "X wins")]
    XWins,
    /// O completed a line (-1).
    #[strum(to_string = "O wins")]
    OWins,
    /// No line was completed (0).
    #[strum(to_string = "draw")]
    Draw,
}

impl Outcome {
    /// Numeric utility: +1 for X, -1 for O, 0 otherwise.
    pub fn score(self) -> i8 {
        match self {
            Outcome::XWins => 1,
            Outcome::OWins => -1,
            Outcome::Draw => 0,
        }
    }

    /// Converts a search value back into an outcome.
    pub(crate) fn from_score(score: i8) -> Self {
        match score {
            s if s > 0 => Outcome::XWins,
            s if s < 0 => Outcome::OWins,
            _ => Outcome::Draw,
        }
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_rows([[x, e, e], [e, o, e], [e, e, x]]);
        assert_eq!(board.squares()[0], x);
        assert_eq!(board.squares()[4], o);
        assert_eq!(board.squares()[8], x);
        assert_eq!(board.get(1, 1), Some(o));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_with_square_leaves_original() {
        let board = Board::new();
        let next = board.with_square(2, 1, Square::Occupied(Player::O));
        assert_eq!(board.get(2, 1), Some(Square::Empty));
        assert_eq!(next.get(2, 1), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(Outcome::XWins.score(), 1);
        assert_eq!(Outcome::OWins.score(), -1);
        assert_eq!(Outcome::Draw.score(), 0);
        assert_eq!(Outcome::from_score(-1), Outcome::OWins);
        assert_eq!(Outcome::XWins.winner(), Some(Player::X));
    }
}
