//! Terminal UI for Strictly Tic-Tac-Toe

mod app;
mod input;
mod scheduler;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::GameConfig;
use crate::games::tictactoe::AiTicket;
use terminal::TerminalGuard;

pub use app::{App, Flow};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(mode = %config.mode(), ai_delay_ms = config.ai_delay_ms(), "Starting terminal UI");

    let guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    let mut terminal: Tui =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to set up terminal")?;

    let (ai_tx, mut ai_rx) = mpsc::unbounded_channel();
    let app = App::new(&config, ai_tx);
    let res = run_app(&mut terminal, app, &mut ai_rx).await;

    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw, drain due AI turns, then wait briefly for input.
#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Tui,
    mut app: App,
    ai_rx: &mut mpsc::UnboundedReceiver<AiTicket>,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        while let Ok(ticket) = ai_rx.try_recv() {
            app.ai_move_due(ticket);
        }

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Flow::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
