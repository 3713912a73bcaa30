//! Pure view models over engine state.
//!
//! Presenters hold no mutable state. They derive what to draw from a snapshot
//! and turn clicks into [`Command`](crate::Command)s for the caller to dispatch.

mod board;
mod cell;
mod moves;

pub use board::BoardView;
pub use cell::CellView;
pub use moves::{MoveEntry, MoveList};
