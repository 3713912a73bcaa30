//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};
pub use ui::draw;

use crate::TuiConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    // Log to a file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting time-travel tic-tac-toe TUI");

    enable_raw_mode()?;
    // Any early return from here on still leaves raw mode.
    let restore = RestoreGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, config);

    drop(restore);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.engine().latest_step(),
        status = %app.status_message(),
        "TUI exited"
    );
    res
}

/// Runs its restore function when dropped.
struct RestoreGuard {
    restore: fn() -> io::Result<()>,
}

impl RestoreGuard {
    fn new(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Draw, wait for a key, apply it; repeat until quit.
#[instrument(skip_all, fields(tick_ms = *config.tick_rate_ms()))]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(config.tick_rate())? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too.
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
