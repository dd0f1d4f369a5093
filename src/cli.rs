//! Command-line interface for strictly_tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Mode;

/// Strictly Tic-Tac-Toe - terminal tic-tac-toe with a random AI opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Terminal tic-tac-toe for two players or against a random AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Starting mode: two-player or player-vs-ai
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Seed for the AI's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        #[command(flatten)]
        game: GameArgs,

        /// Pause before the AI moves, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Play a list of cell indices (0-8) and print the result
    Replay {
        #[command(flatten)]
        game: GameArgs,

        /// Comma separated cell indices, e.g. "0,3,1,4,2"
        #[arg(long)]
        moves: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
