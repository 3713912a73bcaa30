//! Time-travel tic-tac-toe front ends.
//!
//! The game itself lives in [`timetravel_tictactoe`]. This crate drives it:
//!
//! - **TUI**: interactive terminal play with a clickable move history
//! - **Replay**: headless play of a move list, printed as text or JSON
//! - **Config**: TOML settings for the terminal front end
//!
//! # Example
//!
//! ```
//! use timetravel_games::{render_text, replay};
//!
//! let moves: Vec<String> = ["0", "1", "3", "4", "6"].iter().map(|m| m.to_string()).collect();
//! let engine = replay(&moves, None)?;
//! assert!(render_text(&engine).contains("Winner: X"));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
mod tui;

pub use config::{ConfigError, TuiConfig};
pub use replay::{render_json, render_text, replay};
pub use tui::{Action, App, action_for, draw, move_cursor, run_tui};
