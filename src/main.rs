//! Time-travel tic-tac-toe - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timetravel_games::{TuiConfig, render_json, render_text, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Tui => run_tui(&config),
        Command::Replay { moves, jump, json } => run_replay(&config, &moves, jump, json),
    }
}

/// Play a move list headlessly and print the result.
#[instrument(skip(config, moves))]
fn run_replay(config: &TuiConfig, moves: &[String], jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let engine = replay(moves, jump)?;

    if json {
        println!("{}", render_json(&engine)?);
    } else {
        print!("{}", render_text(&engine));
    }
    Ok(())
}
