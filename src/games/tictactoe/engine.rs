//! Game engine: board, turn, mode and status for one table.
//!
//! The engine is the only owner of game state. Front ends feed it input
//! events and read back a [`GameView`] after every change.

use super::action::{Move, MoveError};
use super::ai;
use super::mode::Mode;
use super::rules::{GameStatus, evaluate_status};
use super::types::{Board, Player, Square};
use super::view::GameView;
use super::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Identifies one scheduled AI turn.
///
/// Issued by [`GameEngine::pending_ai_turn`] and redeemed with
/// [`GameEngine::play_ai_move`]. A ticket only matches the game it was
/// issued for: any reset or move in between makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiTicket {
    epoch: u64,
    move_number: usize,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    mode: Mode,
    status: GameStatus,
    history: Vec<Move>,
    epoch: u64,
}

impl GameEngine {
    /// Creates a fresh game in the given mode.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode,
            status: GameStatus::InProgress,
            history: Vec::new(),
            epoch: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the number of resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Applies a move for `mv.player`.
    ///
    /// Rejected moves leave the engine untouched.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if mv.player != self.to_move {
            return Err(MoveError::WrongPlayer(mv.player));
        }
        if !self.board.is_empty(mv.position) {
            return Err(MoveError::SquareOccupied(mv.position));
        }

        self.board.set(mv.position, Square::Occupied(mv.player));
        self.history.push(mv);
        self.to_move = mv.player.opponent();
        self.status = evaluate_status(&self.board);

        debug!(%mv, status = ?self.status, "Move applied");
        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "Game over");
        }
        Ok(self.status)
    }

    /// Plays the square at `index` for whoever is to move.
    ///
    /// Entry point for clicks and key presses. While the AI is due to move
    /// human input is rejected with [`MoveError::AwaitingAi`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if self.pending_ai_turn().is_some() {
            return Err(MoveError::AwaitingAi);
        }
        self.apply_move(Move::new(self.to_move, position))
    }

    /// Returns a ticket when the AI is due to move.
    pub fn pending_ai_turn(&self) -> Option<AiTicket> {
        let due = self.mode.has_ai() && !self.status.is_over() && self.to_move == Player::O;
        due.then_some(AiTicket {
            epoch: self.epoch,
            move_number: self.history.len(),
        })
    }

    /// Chooses a square for the AI, or `None` if the AI is not due to move.
    #[instrument(skip(self, rng))]
    pub fn select_ai_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        self.pending_ai_turn()?;
        ai::select_ai_move(&self.board, rng)
    }

    /// Plays the AI turn identified by `ticket`.
    ///
    /// Fails with [`MoveError::StaleAiTurn`] if the game was reset or moved
    /// on since the ticket was issued.
    #[instrument(skip(self, rng))]
    pub fn play_ai_move<R: Rng + ?Sized>(
        &mut self,
        ticket: AiTicket,
        rng: &mut R,
    ) -> Result<Move, MoveError> {
        if self.pending_ai_turn() != Some(ticket) {
            debug!(current_epoch = self.epoch, "Dropping stale AI turn");
            return Err(MoveError::StaleAiTurn);
        }
        let position = self.select_ai_move(rng).ok_or(MoveError::StaleAiTurn)?;
        let mv = Move::new(Player::O, position);
        self.apply_move(mv)?;
        Ok(mv)
    }

    /// Clears the board and starts a new game in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.epoch = self.epoch.wrapping_add(1);
        info!(epoch = self.epoch, mode = %self.mode, "Game reset");
    }

    /// Switches mode. Always restarts the game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    /// Switches to the other mode and returns it.
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggle());
        self.mode
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::from_engine(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
