//! Non-interactive front end: plays a list of cell indices through the engine.

use crate::games::tictactoe::{GameEngine, GameView, Mode, MoveError};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// A move from the list that the engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejected {
    /// Index as given on the command line.
    pub index: usize,
    /// Why it was refused.
    pub error: MoveError,
}

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Final game snapshot.
    pub view: GameView,
    /// Moves that were skipped.
    pub rejected: Vec<Rejected>,
}

/// Plays `indices` as human moves in `mode`.
///
/// In player-vs-AI mode the AI answers each human move at once. Rejected
/// moves are skipped and reported.
#[instrument(skip(rng))]
pub fn replay<R: Rng + ?Sized>(mode: Mode, indices: &[usize], rng: &mut R) -> Replay {
    let mut engine = GameEngine::new(mode);
    let mut rejected = Vec::new();

    for &index in indices {
        match engine.play_index(index) {
            Ok(status) => debug!(index, ?status, "Replayed move"),
            Err(error) => {
                warn!(index, %error, "Move rejected, skipping");
                rejected.push(Rejected { index, error });
                continue;
            }
        }
        if let Some(ticket) = engine.pending_ai_turn() {
            match engine.play_ai_move(ticket, rng) {
                Ok(mv) => debug!(%mv, "AI replied"),
                Err(error) => warn!(%error, "AI move failed"),
            }
        }
    }

    info!(status = ?engine.status(), moves = engine.history().len(), "Replay finished");
    Replay {
        view: engine.view(),
        rejected,
    }
}

/// Parses a comma or whitespace separated list of indices.
#[instrument]
pub fn parse_moves(s: &str) -> anyhow::Result<Vec<usize>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<usize>()
                .map_err(|e| anyhow::anyhow!("Invalid move '{}': {}", t, e))
        })
        .collect()
}
