//! A single board cell.

use crate::{Command, Position, Square};
use derive_getters::Getters;
use serde::Serialize;

/// What one cell shows: its mark and whether it belongs to the winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    position: Position,
    square: Square,
    highlighted: bool,
}

impl CellView {
    /// Creates a cell view.
    pub fn new(position: Position, square: Square, highlighted: bool) -> Self {
        Self {
            position,
            square,
            highlighted,
        }
    }

    /// `"X"`, `"O"`, or empty.
    pub fn label(&self) -> String {
        self.square
            .player()
            .map(|player| player.to_string())
            .unwrap_or_default()
    }

    /// The command a click on this cell produces.
    pub fn click(&self) -> Command {
        Command::Play(self.position.index())
    }
}
