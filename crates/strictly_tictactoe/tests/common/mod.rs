//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use strictly_tictactoe::{Action, Board, Player, actions, player, result, terminal, utility};

/// Every board reachable from the initial state, terminal boards included.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        if terminal(&board) {
            continue;
        }
        for action in actions(&board) {
            stack.push(result(&board, action).unwrap());
        }
    }
    let mut boards: Vec<Board> = seen.into_iter().collect();
    boards.sort_by_key(|b| b.to_string());
    boards
}

/// Legal actions in ascending `(row, col)` order.
pub fn sorted_actions(board: &Board) -> Vec<Action> {
    let mut moves: Vec<Action> = actions(board).into_iter().collect();
    moves.sort();
    moves
}

/// Plain minimax value without pruning, memoised by board.
pub fn exact_value(board: &Board, memo: &mut HashMap<Board, i8>) -> i8 {
    if let Some(value) = memo.get(board) {
        return *value;
    }
    let value = if terminal(board) {
        utility(board).score()
    } else {
        let children = actions(board)
            .into_iter()
            .map(|action| exact_value(&result(board, action).unwrap(), memo));
        match player(board) {
            Player::X => children.max().unwrap(),
            Player::O => children.min().unwrap(),
        }
    };
    memo.insert(*board, value);
    value
}
