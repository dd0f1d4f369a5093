//! Strictly Tic-Tac-Toe library - tic-tac-toe engine with terminal front ends
//!
//! # Architecture
//!
//! - **Games**: the [`GameEngine`] owns board, turn, mode and status; rules
//!   and the random AI are pure functions over a [`Board`]
//! - **TUI**: ratatui front end with a timed, cancellable AI turn
//! - **Replay**: plays a list of cell indices and reports the outcome
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, GameStatus, Mode, Player};
//!
//! let mut engine = GameEngine::new(Mode::TwoPlayer);
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play_index(index).unwrap();
//! }
//! assert_eq!(engine.status().winner(), Some(Player::X));
//! assert!(matches!(engine.status(), GameStatus::Won { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
pub mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AiTicket, Board, GameEngine, GameStatus, GameView, Mode, Move, MoveError, Player, Position,
    Square, WINNING_LINES, WinningLine, evaluate_status, select_ai_move,
};
