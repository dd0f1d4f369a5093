//! Render snapshot handed from the engine to front ends.

use super::engine::GameEngine;
use super::mode::Mode;
use super::rules::GameStatus;
use super::types::Player;
use derive_getters::Getters;
use serde::Serialize;

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Marks in row-major order.
    cells: [Option<Player>; 9],
    /// Active mode.
    mode: Mode,
    /// Game status.
    status: GameStatus,
    /// Player to move, `None` once the game is over.
    to_move: Option<Player>,
    /// One-line status for the player.
    status_text: String,
    /// Indices to highlight after a win.
    winning_line: Option<[usize; 3]>,
}

impl GameView {
    pub(super) fn from_engine(engine: &GameEngine) -> Self {
        let status = engine.status();
        let to_move = (!status.is_over()).then_some(engine.to_move());
        Self {
            cells: engine.board().squares().map(|s| s.player()),
            mode: engine.mode(),
            status,
            to_move,
            status_text: status_text(engine),
            winning_line: status.winning_line().map(|line| line.indices()),
        }
    }

    /// Whether the cell at `index` is part of the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }

    /// Plain-text board followed by the status line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                out.push_str("\n-+-+-\n");
            }
            match cell {
                Some(player) => out.push_str(&player.to_string()),
                None => out.push_str(&(i + 1).to_string()),
            }
            if i % 3 < 2 {
                out.push('|');
            }
        }
        out.push_str("\n\n");
        out.push_str(&self.status_text);
        out
    }
}

fn status_text(engine: &GameEngine) -> String {
    match engine.status() {
        GameStatus::Won { player, .. } => format!("{} wins!", player),
        GameStatus::Tied => "It's a tie!".to_string(),
        GameStatus::InProgress if engine.pending_ai_turn().is_some() => {
            format!("{}'s turn (AI)", engine.to_move())
        }
        GameStatus::InProgress => format!("{}'s turn", engine.to_move()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_view() {
        let view = GameEngine::default().view();
        assert_eq!(view.status_text(), "X's turn");
        assert_eq!(view.to_move(), &Some(Player::X));
        assert!(view.cells().iter().all(Option::is_none));
        assert_eq!(view.winning_line(), &None);
    }

    #[test]
    fn test_ai_turn_text() {
        let mut engine = GameEngine::new(Mode::PlayerVsAi);
        engine.play_index(0).unwrap();
        assert_eq!(engine.view().status_text(), "O's turn (AI)");
    }

    #[test]
    fn test_win_view_highlights_line() {
        let mut engine = GameEngine::default();
        for i in [2, 0, 4, 1, 6] {
            engine.play_index(i).unwrap();
        }
        let view = engine.view();
        assert_eq!(view.status_text(), "X wins!");
        assert_eq!(view.winning_line(), &Some([2, 4, 6]));
        assert!(view.is_winning_cell(4));
        assert!(!view.is_winning_cell(0));
        assert_eq!(view.to_move(), &None);
    }

    #[test]
    fn test_render_text() {
        let mut engine = GameEngine::default();
        engine.play_index(4).unwrap();
        assert_eq!(
            engine.view().render_text(),
            "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n\nO's turn"
        );
    }
}
