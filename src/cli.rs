//! Command-line interface for timetravel_games.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timetravel_games")]
#[command(about = "Tic-tac-toe with a replayable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(long, global = true, default_value = "timetravel.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Play a sequence of moves headlessly and print the result
    Replay {
        /// Cells to play in order: indices 0-8 or labels like "center"
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Step to jump to after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
