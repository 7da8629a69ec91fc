//! Error types for tic-tac-toe.

use crate::Player;
use derive_more::{Display, Error};

/// Why an action could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionKind {
    /// Coordinates outside `[0, 2]`.
    #[display("({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The target square already holds a mark.
    #[display("({row}, {col}) is already occupied by {by}")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Player whose mark is on the square.
        by: Player,
    },
}

/// Action rejected by [`crate::result`], with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid action: {} at {}:{}", kind, file, line)]
pub struct InvalidAction {
    /// What was wrong with the action.
    pub kind: InvalidActionKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidAction {
    /// Creates a new invalid-action error with caller location tracking.
    #[track_caller]
    pub fn new(kind: InvalidActionKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Why a board string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseErrorKind {
    /// The string did not hold exactly nine squares.
    #[display("expected 9 squares, got {got}")]
    WrongLength {
        /// Number of squares found.
        got: usize,
    },
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("invalid character '{character}' at offset {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character offset in the input.
        position: usize,
    },
    /// The squares form a position that legal play cannot produce.
    #[display("unreachable position: {}", violations.join("; "))]
    Unreachable {
        /// Descriptions of the violated invariants.
        violations: Vec<String>,
    },
}

/// Board notation parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", kind, file, line)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub kind: BoardParseErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardParseErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
