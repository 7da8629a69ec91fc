//! Compact text notation for boards.
//!
//! A board is written as its nine squares in row-major order: `X` and `O`
//! for marks, `.` for empty. Rows are separated by `/` when printed, e.g.
//! `XX./O../...`. When parsing, marks are case-insensitive, `-` and `_` are
//! also accepted as empty, and whitespace, `/` and `|` are ignored.

use crate::invariants::{InvariantSet, ReachableBoard};
use crate::{Board, BoardParseError, BoardParseErrorKind, Player, Square};
use std::str::FromStr;
use tracing::instrument;

fn square_char(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares().iter().enumerate() {
            if idx > 0 && idx % Board::SIZE == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", square_char(*square))?;
        }
        Ok(())
    }
}

impl Board {
    /// Formats the board as a three-line grid.
    pub fn display_grid(&self) -> String {
        let mut out = String::new();
        for row in 0..Board::SIZE {
            for col in 0..Board::SIZE {
                let square = self.get(row, col).unwrap_or(Square::Empty);
                out.push(square_char(square));
                if col < Board::SIZE - 1 {
                    out.push('|');
                }
            }
            if row < Board::SIZE - 1 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses board notation, rejecting positions legal play cannot reach.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for (position, character) in s.chars().enumerate() {
            let square = match character {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                character => {
                    return Err(BoardParseError::new(
                        BoardParseErrorKind::InvalidCharacter {
                            character,
                            position,
                        },
                    ));
                }
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares.try_into().map_err(|squares: Vec<Square>| {
            BoardParseError::new(BoardParseErrorKind::WrongLength { got: squares.len() })
        })?;
        let board = Board::from_squares(squares);

        ReachableBoard::check_all(&board).map_err(|violations| {
            BoardParseError::new(BoardParseErrorKind::Unreachable {
                violations: violations.into_iter().map(|v| v.description).collect(),
            })
        })?;

        Ok(board)
    }
}
