//! Move coordinates for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A move target: zero-based `(row, col)` coordinates.
///
/// Constructing an action does not validate it. Out-of-range or occupied
/// targets are rejected when the action is applied with [`crate::result`].
///
/// Actions order by row, then column. The search relies on this ordering to
/// make its tie-break reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Action {
    /// Row index (0 = top).
    pub row: usize,
    /// Column index (0 = left).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
