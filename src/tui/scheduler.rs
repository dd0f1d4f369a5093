//! Delayed AI turns.
//!
//! The AI's move fires after a short pause. The pause runs as a tokio task
//! that only sends the [`AiTicket`] back to the event loop; the event loop
//! owns the engine and decides whether the ticket is still good.

use crate::games::tictactoe::AiTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Schedules at most one pending AI turn at a time.
#[derive(Debug)]
pub struct AiScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AiTicket>,
    pending: Option<JoinHandle<()>>,
}

impl AiScheduler {
    /// Creates a scheduler that delivers due tickets on `tx`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<AiTicket>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Delivers `ticket` after the delay, replacing any pending turn.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: AiTicket) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Event loop closed before AI turn fired");
            }
        }));
    }

    /// Drops the pending turn, if any.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling pending AI turn");
            handle.abort();
        }
    }

    /// Whether a turn is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AiScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
