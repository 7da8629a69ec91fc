//! Command execution and output rendering.

use crate::cli::Command;
use crate::config::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use strictly_tictactoe::{
    Action, Analysis, Board, Outcome, PlayOut, Player, actions, analyze, play_out, player,
    terminal, utility, winner,
};
use tracing::{info, instrument};

/// A command result that can be printed as text or JSON.
pub trait Report: Serialize {
    /// Renders the human-readable form.
    fn to_text(&self) -> String;

    /// Renders in the requested format.
    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Static facts about a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// The board in compact notation.
    pub board: String,
    /// Side to move, if the game is not over.
    pub to_move: Option<Player>,
    /// Legal actions in row-major order.
    pub actions: Vec<Action>,
    /// Owner of a completed line.
    pub winner: Option<Player>,
    /// Whether the game is over.
    pub terminal: bool,
    /// Final score, if the game is over.
    pub utility: Option<i8>,
}

impl Inspection {
    /// Inspects a board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        let is_terminal = terminal(board);
        let mut moves: Vec<Action> = actions(board).into_iter().collect();
        moves.sort();
        Self {
            board: board.to_string(),
            to_move: (!is_terminal).then(|| player(board)),
            actions: moves,
            winner: winner(board),
            terminal: is_terminal,
            utility: is_terminal.then(|| utility(board).score()),
        }
    }
}

impl Report for Inspection {
    fn to_text(&self) -> String {
        let moves = if self.actions.is_empty() {
            "none".to_string()
        } else {
            self.actions
                .iter()
                .map(Action::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        let mut out = format!("board: {}\n", self.board);
        match self.to_move {
            Some(side) => out.push_str(&format!("to move: {}\n", side)),
            None => out.push_str("to move: none\n"),
        }
        out.push_str(&format!("actions: {}\n", moves));
        match self.winner {
            Some(side) => out.push_str(&format!("winner: {}\n", side)),
            None => out.push_str("winner: none\n"),
        }
        out.push_str(&format!("terminal: {}", self.terminal));
        if let Some(score) = self.utility {
            out.push_str(&format!("\nutility: {}", score));
        }
        out
    }
}

/// The optimal move for a board, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMove {
    /// The board in compact notation.
    pub board: String,
    /// Side to move, if the game is not over.
    pub to_move: Option<Player>,
    /// Search result; absent when the game is over.
    pub analysis: Option<Analysis>,
    /// Final outcome when the game is already over.
    pub outcome: Option<Outcome>,
}

impl BestMove {
    /// Searches a board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn of(board: &Board) -> Self {
        let analysis = analyze(board);
        Self {
            board: board.to_string(),
            to_move: analysis.map(|_| player(board)),
            analysis,
            outcome: analysis.is_none().then(|| utility(board)),
        }
    }
}

impl Report for BestMove {
    fn to_text(&self) -> String {
        match (&self.analysis, self.to_move, self.outcome) {
            (Some(analysis), Some(side), _) => format!(
                "best move for {}: {}\nexpected outcome: {}\nsearched {} positions ({} cutoffs, depth {})",
                side,
                analysis.action,
                analysis.value,
                analysis.stats.nodes,
                analysis.stats.cutoffs,
                analysis.stats.max_depth
            ),
            (_, _, Some(outcome)) => format!("game over: {}", outcome),
            _ => "game over".to_string(),
        }
    }
}

impl Report for PlayOut {
    fn to_text(&self) -> String {
        let mut out = format!("start:\n{}\n", self.start.display_grid());
        for (idx, ply) in self.plies.iter().enumerate() {
            out.push_str(&format!(
                "\n{}. {} plays {}\n{}\n",
                idx + 1,
                ply.player,
                ply.action,
                ply.board.display_grid()
            ));
        }
        out.push_str(&format!("\nresult: {}", self.outcome));
        out
    }
}

/// Runs a command and renders its result.
#[instrument(skip(command), fields(format = %format))]
pub fn execute(command: &Command, format: OutputFormat) -> Result<String> {
    let output = match command {
        Command::Inspect { board } => Inspection::of(board).render(format)?,
        Command::BestMove { board } => BestMove::of(board).render(format)?,
        Command::Play { from } => {
            let start = from.unwrap_or_default();
            let record = play_out(&start)?;
            info!(outcome = %record.outcome, "Game finished");
            record.render(format)?
        }
    };
    Ok(output)
}
