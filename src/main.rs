//! Strictly Tic-Tac-Toe - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use strictly_tictactoe::{GameConfig, replay, tui};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        None => tui::run_tui(config).await,
        Some(Command::Tui { game, ai_delay_ms }) => {
            let config = apply_game_args(config, &game).with_ai_delay_ms(ai_delay_ms);
            tui::run_tui(config).await
        }
        Some(Command::Replay { game, moves, json }) => {
            run_replay(apply_game_args(config, &game), &moves, json)
        }
    }
}

fn apply_game_args(config: GameConfig, args: &GameArgs) -> GameConfig {
    config.with_mode(args.mode).with_seed(args.seed)
}

/// Replays a move list and prints the final board.
#[instrument(skip(config), fields(mode = %config.mode()))]
fn run_replay(config: GameConfig, moves: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let indices = replay::parse_moves(moves)?;
    let mut rng = config.rng();

    info!(moves = indices.len(), "Replaying moves");
    let outcome = replay::replay(*config.mode(), &indices, &mut rng);
    if !outcome.rejected.is_empty() {
        warn!(skipped = outcome.rejected.len(), "Some moves were rejected");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.view)?);
    } else {
        println!("{}", outcome.view.render_text());
    }
    Ok(())
}
