//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Engine**: owns the history of board snapshots and the step pointer.
//!   `play` appends (discarding any abandoned future), `jump_to` moves the
//!   pointer. Whose turn it is follows from the pointer.
//! - **Rules**: pure win and draw checks over a single board.
//! - **Presenters**: board, cell and move-list view models. They never mutate;
//!   clicks come back as [`Command`]s for [`Engine::dispatch`].
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{Engine, Player};
//!
//! let mut engine = Engine::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     engine.play(cell)?;
//! }
//! let line = engine.winner().expect("X completed the left column");
//! assert_eq!(line.winner, Player::X);
//! assert_eq!(line.indices(), [0, 3, 6]);
//!
//! engine.jump_to(2)?;
//! engine.play(4)?;
//! assert_eq!(engine.history().len(), 4);
//! # Ok::<(), timetravel_tictactoe::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
pub mod contracts;
mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod presenter;
pub mod rules;
mod snapshot;
mod status;
mod types;

pub use command::{Command, Transition};
pub use engine::{Engine, GAME_START_LABEL, describe_step};
pub use error::{EngineError, PlayOutcome, Rejection};
pub use history::History;
pub use position::{Coords, Position};
pub use presenter::{BoardView, CellView, MoveEntry, MoveList};
pub use rules::{WinLine, winner_of};
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
