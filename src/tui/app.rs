//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::input::{cell_at, digit_to_index, move_cursor};
use super::scheduler::AiScheduler;
use super::ui;
use crate::GameConfig;
use crate::games::tictactoe::{AiTicket, GameEngine, Position};

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    rng: StdRng,
    scheduler: AiScheduler,
    cells: [Rect; 9],
}

impl App {
    /// Creates the app. Due AI turns are delivered on `ai_tx`.
    #[instrument(skip(ai_tx))]
    pub fn new(config: &GameConfig, ai_tx: mpsc::UnboundedSender<AiTicket>) -> Self {
        Self {
            engine: GameEngine::new(*config.mode()),
            cursor: Position::Center,
            rng: config.rng(),
            scheduler: AiScheduler::new(config.ai_delay(), ai_tx),
            cells: [Rect::default(); 9],
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether an AI turn is waiting on its timer.
    pub fn ai_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Draws the current state and remembers where the cells landed.
    pub fn render(&mut self, frame: &mut Frame) {
        self.cells = ui::draw(frame, &self.engine.view(), self.cursor);
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('m') => self.switch_mode(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.play(index);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Handles a mouse event. Left clicks on a cell play it.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = cell_at(&self.cells, event.column, event.row) {
            if let Some(pos) = Position::from_index(index) {
                self.cursor = pos;
            }
            self.play(index);
        }
    }

    /// Plays a cell for the human to move. Refused input is ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        match self.engine.play_index(index) {
            Ok(status) => {
                info!(index, ?status, "Move played");
                self.schedule_ai();
            }
            Err(e) => debug!(error = %e, "Input ignored"),
        }
    }

    /// Fires a scheduled AI turn.
    #[instrument(skip(self))]
    pub fn ai_move_due(&mut self, ticket: AiTicket) {
        match self.engine.play_ai_move(ticket, &mut self.rng) {
            Ok(mv) => {
                info!(%mv, status = ?self.engine.status(), "AI moved");
                self.schedule_ai();
            }
            Err(e) => debug!(error = %e, "AI turn dropped"),
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.scheduler.cancel();
        self.engine.reset();
        self.schedule_ai();
    }

    /// Switches mode, which restarts the game.
    #[instrument(skip(self))]
    pub fn switch_mode(&mut self) {
        self.scheduler.cancel();
        let mode = self.engine.toggle_mode();
        info!(%mode, "Mode switched");
        self.schedule_ai();
    }

    fn schedule_ai(&mut self) {
        if let Some(ticket) = self.engine.pending_ai_turn() {
            self.scheduler.schedule(ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mode, Player, Square};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ai_app(delay_ms: u64) -> (App, mpsc::UnboundedReceiver<AiTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = GameConfig::default()
            .with_mode(Some(Mode::PlayerVsAi))
            .with_ai_delay_ms(Some(delay_ms))
            .with_seed(Some(1));
        (App::new(&config, tx), rx)
    }

    #[tokio::test]
    async fn test_ai_answers_after_delay() {
        let (mut app, mut rx) = ai_app(10);
        app.handle_key(key(KeyCode::Char('5')));
        assert!(app.ai_pending());

        let ticket = rx.recv().await.unwrap();
        app.ai_move_due(ticket);

        let board = app.engine().board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.marks(), 2);
        assert_eq!(app.engine().to_move(), Player::X);
    }

    #[tokio::test]
    async fn test_restart_cancels_pending_ai_turn() {
        let (mut app, mut rx) = ai_app(20);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('r')));

        let fired = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
        assert!(fired.is_err(), "cancelled AI turn must not fire");
        assert_eq!(app.engine().board().marks(), 0);
    }

    #[tokio::test]
    async fn test_stale_ticket_after_mode_switch_is_ignored() {
        let (mut app, _rx) = ai_app(1_000);
        app.handle_key(key(KeyCode::Char('1')));
        let stale = app.engine().pending_ai_turn().unwrap();

        app.handle_key(key(KeyCode::Char('m')));
        app.handle_key(key(KeyCode::Char('m')));
        app.ai_move_due(stale);

        assert_eq!(app.engine().mode(), Mode::PlayerVsAi);
        assert_eq!(app.engine().board().marks(), 0);
    }

    #[tokio::test]
    async fn test_clicks_ignored_while_ai_thinks() {
        let (mut app, _rx) = ai_app(1_000);
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.engine().board().marks(), 1);
    }

    #[tokio::test]
    async fn test_cursor_and_enter_play_in_two_player_mode() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(&GameConfig::default(), tx);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.engine().board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert!(!app.ai_pending());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
    }

    fn click(column: u16, row: u16, kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[tokio::test]
    async fn test_click_on_rendered_cell_places_mark() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(&GameConfig::default(), tx);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let target = app.cells[Position::BottomRight.to_index()];
        let left = MouseEventKind::Down(MouseButton::Left);
        app.handle_mouse(click(target.x + 1, target.y + 1, left));

        let board = app.engine().board();
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
        assert_eq!(board.marks(), 1);
        assert_eq!(app.cursor(), Position::BottomRight);

        // Right clicks and clicks off the board change nothing.
        let right = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(click(app.cells[0].x, app.cells[0].y, right));
        app.handle_mouse(click(0, 0, left));
        assert_eq!(app.engine().board().marks(), 1);
    }
}
