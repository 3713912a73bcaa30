//! Draw detection logic for tic-tac-toe.

use super::win::winner_of;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner_of(board).is_none()
}
