//! Turn-by-turn game driver built on the pure rules.

use crate::rules::{player, result, terminal, utility, winner};
use crate::search::minimax;
use crate::{Action, Board, InvalidAction, Outcome, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Derives the status of a board.
    pub fn of(board: &Board) -> Self {
        if let Some(player) = winner(board) {
            GameStatus::Won(player)
        } else if terminal(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

/// Error that can occur when applying a move to a [`Game`].
#[derive(Debug, Clone, Display, Error)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The rules rejected the action.
    #[display("{_0}")]
    InvalidAction(InvalidAction),
}

impl From<InvalidAction> for MoveError {
    fn from(err: InvalidAction) -> Self {
        MoveError::InvalidAction(err)
    }
}

/// A game in progress: the current board plus the actions that led to it.
///
/// The history lives only as long as the value does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Action>,
}

impl Game {
    /// Creates a new game from the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Resumes a game from an arbitrary board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        player(&self.board)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Returns the actions played since this game value was created.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Plays `action` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended, or
    /// [`MoveError::InvalidAction`] if the rules reject the action.
    #[instrument(skip(self), fields(action = %action, player = %self.to_move()))]
    pub fn play(&mut self, action: Action) -> Result<GameStatus, MoveError> {
        if terminal(&self.board) {
            return Err(MoveError::GameOver);
        }

        self.board = result(&self.board, action)?;
        self.history.push(action);

        let status = self.status();
        debug!(?status, board = %self.board, "Move applied");
        Ok(status)
    }

    /// Plays the optimal move for the side to move.
    ///
    /// Returns the action played, or `None` if the game was already over.
    pub fn play_optimal(&mut self) -> Result<Option<Action>, MoveError> {
        match minimax(&self.board) {
            Some(action) => {
                self.play(action)?;
                Ok(Some(action))
            }
            None => Ok(None),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// One move of a played-out game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    /// Player who moved.
    pub player: Player,
    /// Square played.
    pub action: Action,
    /// Board after the move.
    pub board: Board,
}

/// A game played to the end with optimal moves on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOut {
    /// Starting board.
    pub start: Board,
    /// Moves in order.
    pub plies: Vec<Ply>,
    /// Final outcome.
    pub outcome: Outcome,
}

/// Drives both sides with [`minimax`] from `board` until the game ends.
#[instrument(skip(board), fields(board = %board))]
pub fn play_out(board: &Board) -> Result<PlayOut, MoveError> {
    let mut game = Game::from_board(*board);
    let mut plies = Vec::new();

    loop {
        let mover = game.to_move();
        match game.play_optimal()? {
            Some(action) => plies.push(Ply {
                player: mover,
                action,
                board: *game.board(),
            }),
            None => break,
        }
    }

    let outcome = utility(game.board());
    info!(%outcome, plies = plies.len(), "Play-out finished");

    Ok(PlayOut {
        start: *board,
        plies,
        outcome,
    })
}
