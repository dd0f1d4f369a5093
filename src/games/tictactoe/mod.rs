//! Tic-tac-toe: board types, rules, the random AI and the game engine.

mod action;
mod ai;
mod engine;
mod mode;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use ai::select_ai_move;
pub use engine::{AiTicket, GameEngine};
pub use mode::Mode;
pub use position::Position;
pub use rules::{GameStatus, WINNING_LINES, WinningLine, evaluate_status};
pub use types::{Board, Player, Square};
pub use view::GameView;
