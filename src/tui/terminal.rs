//! Raw-mode terminal setup with restore on drop.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, error};

/// Puts the terminal back when dropped: on normal exit, on an early `?`
/// return, and while unwinding from a panic.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and mouse capture.
    ///
    /// If a later step fails, the steps already taken are undone before the
    /// error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self::new(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Guard that runs `restore` on drop.
    pub fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}
