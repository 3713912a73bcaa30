//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board. Nothing here knows about history or
//! whose turn it is, so the same checks serve live play and replayed snapshots.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinLine, winner_of};
