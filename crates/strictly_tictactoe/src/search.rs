//! Adversarial search: minimax with alpha-beta pruning.
//!
//! The search walks the whole remaining game tree on every call. The tree
//! is at most nine plies deep, so there is no depth limit, no evaluation
//! heuristic and no transposition table. X maximizes the utility and O
//! minimizes it.
//!
//! Legal actions are sorted ascending by `(row, col)` before they are
//! scanned, and a move only replaces the current best on a strict
//! improvement. Among equally good moves the search therefore always picks
//! the first one in that order, which makes the chosen move reproducible.

use crate::rules::{actions, place, player, terminal, utility};
use crate::{Action, Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Half-width of the initial `[alpha, beta]` window.
///
/// Utilities lie in `[-1, 1]`, so a window of `[-2, 2]` can never cut off a
/// real value at the root.
const WINDOW: i8 = 2;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Sibling scans abandoned by an alpha or beta cutoff.
    pub cutoffs: u64,
    /// Deepest ply reached below the root.
    pub max_depth: usize,
}

/// Result of searching a non-terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The optimal action for the side to move.
    pub action: Action,
    /// Outcome of the game if both sides play optimally from here.
    pub value: Outcome,
    /// Search counters.
    pub stats: SearchStats,
}

/// Returns the optimal action for the side to move, or `None` if the game
/// is over.
pub fn minimax(board: &Board) -> Option<Action> {
    analyze(board).map(|analysis| analysis.action)
}

/// Searches `board` and reports the optimal action, its value and the
/// search counters.
///
/// Returns `None` if the board is terminal. Picks the same action as
/// [`minimax`].
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Option<Analysis> {
    if terminal(board) {
        debug!("Position is terminal, no move to search");
        return None;
    }

    let side = player(board);
    let mut stats = SearchStats::default();
    let (value, action) = alpha_beta(board, -WINDOW, WINDOW, side, 0, &mut stats);
    let action = action?;

    debug!(
        ?side,
        %action,
        value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    Some(Analysis {
        action,
        value: Outcome::from_score(value),
        stats,
    })
}

/// Alpha-beta recursion. Returns the value of `board` and, for non-terminal
/// boards, the first action achieving it.
fn alpha_beta(
    board: &Board,
    mut alpha: i8,
    mut beta: i8,
    side: Player,
    depth: usize,
    stats: &mut SearchStats,
) -> (i8, Option<Action>) {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if terminal(board) {
        return (utility(board).score(), None);
    }

    let mut moves: Vec<Action> = actions(board).into_iter().collect();
    moves.sort_unstable();
    let children: Vec<(Action, Board)> = moves
        .into_iter()
        .map(|action| (action, place(board, action)))
        .collect();

    let mut best_move = None;
    match side {
        Player::X => {
            let mut best = -WINDOW;
            for (action, child) in &children {
                let (value, _) = alpha_beta(child, alpha, beta, Player::O, depth + 1, stats);
                if value > best {
                    best = value;
                    best_move = Some(*action);
                }
                if best > beta {
                    stats.cutoffs += 1;
                    trace!(depth, best, beta, "Beta cutoff");
                    break;
                }
                alpha = alpha.max(best);
            }
            (best, best_move)
        }
        Player::O => {
            let mut best = WINDOW;
            for (action, child) in &children {
                let (value, _) = alpha_beta(child, alpha, beta, Player::X, depth + 1, stats);
                if value < best {
                    best = value;
                    best_move = Some(*action);
                }
                if best < alpha {
                    stats.cutoffs += 1;
                    trace!(depth, best, alpha, "Alpha cutoff");
                    break;
                }
                beta = beta.min(best);
            }
            (best, best_move)
        }
    }
}
