//! Derived game status for status lines.

use crate::rules::{WinLine, is_draw};
use crate::{Player, Snapshot};
use serde::{Deserialize, Serialize};

/// Where the game stands at a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Undecided; `next` moves.
    #[display("Next player: {next}")]
    InProgress {
        /// The player to move.
        next: Player,
    },
    /// A line is complete.
    #[display("Winner: {}", _0.winner)]
    Won(WinLine),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Status of `snapshot` with `next` to move.
    pub fn of(snapshot: &Snapshot, next: Player) -> Self {
        match snapshot.winner() {
            Some(line) => GameStatus::Won(line),
            None if is_draw(snapshot.board()) => GameStatus::Draw,
            None => GameStatus::InProgress { next },
        }
    }

    /// The win line, if decided by a win.
    pub fn win_line(&self) -> Option<&WinLine> {
        match self {
            GameStatus::Won(line) => Some(line),
            _ => None,
        }
    }

    /// True once no further move can be played here.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}
