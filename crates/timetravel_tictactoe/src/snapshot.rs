//! Immutable board snapshots.

use crate::rules::{WinLine, winner_of};
use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One board configuration plus the move that produced it.
///
/// Snapshots are never mutated; a move builds a new one from the previous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board after the move.
    board: Board,
    /// The cell played to reach this board. `None` for the opening snapshot.
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty opening board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds the snapshot that follows this one when `player` marks `pos`.
    pub fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }

    /// Index of the cell played to reach this snapshot, 0 for the opening board.
    pub fn move_index(&self) -> usize {
        self.last_move.map_or(0, Position::index)
    }

    /// The completed line on this board, if any.
    pub fn winner(&self) -> Option<WinLine> {
        winner_of(&self.board)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
