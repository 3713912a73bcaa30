//! The 3x3 grid.

use super::CellView;
use crate::rules::WinLine;
use crate::{Command, Position, Snapshot};
use serde::Serialize;
use tracing::instrument;

/// Nine annotated cells, built from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    cells: [CellView; 9],
}

impl BoardView {
    /// Annotates `snapshot`; cells in `win` are highlighted.
    #[instrument(level = "trace", skip(snapshot))]
    pub fn new(snapshot: &Snapshot, win: Option<&WinLine>) -> Self {
        let cells = Position::ALL.map(|pos| {
            let highlighted = win.is_some_and(|line| line.contains(pos));
            CellView::new(pos, snapshot.board().get(pos), highlighted)
        });
        Self { cells }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[CellView; 9] {
        &self.cells
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.index()]
    }

    /// Three rows of three, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }

    /// Positions of highlighted cells.
    pub fn highlighted(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| *cell.highlighted())
            .map(|cell| *cell.position())
            .collect()
    }

    /// Forwards a click on cell `index` as a play command.
    pub fn click(&self, index: usize) -> Command {
        Command::Play(index)
    }
}
