//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal. The first complete line wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and which three cells form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The player holding all three cells.
    pub winner: Player,
    /// The three cells, in line order.
    pub combination: [Position; 3],
}

impl WinLine {
    /// Returns true if `pos` is one of the winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.combination.contains(&pos)
    }

    /// The winning cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.combination.map(Position::index)
    }
}

/// Finds the first complete line on the board, if any.
#[instrument(level = "trace")]
pub fn winner_of(board: &Board) -> Option<WinLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player)).then_some(
            WinLine {
                winner: player,
                combination: [a, b, c],
            },
        )
    })
}
