//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the engine so
//! front ends and tests can evaluate any board without a game in progress.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinningLine, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no line completed.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// The win check runs first: the last move can complete a line and fill
/// the board at the same time.
#[instrument(skip(board))]
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some((player, line)) = check_winner(board) {
        GameStatus::Won { player, line }
    } else if is_full(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress
    }
}
