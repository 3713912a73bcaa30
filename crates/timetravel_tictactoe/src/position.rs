//! Cell positions and their board coordinates.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// 1-based `(row, col)` coordinates of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("[{row}, {col}]")]
pub struct Coords {
    /// Row, 1 (top) to 3 (bottom).
    pub row: usize,
    /// Column, 1 (left) to 3 (right).
    pub col: usize,
}

impl Coords {
    /// Coordinates of a board index: row = index / 3 + 1, col = index % 3 + 1.
    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / 3 + 1,
            col: index % 3 + 1,
        }
    }
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from 1-based coordinates.
    pub fn from_coords(coords: Coords) -> Option<Self> {
        if !(1..=3).contains(&coords.row) || !(1..=3).contains(&coords.col) {
            return None;
        }
        Self::from_index((coords.row - 1) * 3 + (coords.col - 1))
    }

    /// Returns the 1-based `(row, col)` of this cell.
    pub fn coords(self) -> Coords {
        Coords::from_index(self.index())
    }

    /// Parse from a board index (0-8) or a label.
    ///
    /// Labels match case-insensitively, so "center" and "top-left" both work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coords_display() {
        assert_eq!(Position::MiddleRight.coords().to_string(), "[2, 3]");
    }

    #[test]
    fn test_from_coords_rejects_zero() {
        assert_eq!(Position::from_coords(Coords { row: 0, col: 1 }), None);
        assert_eq!(Position::from_coords(Coords { row: 3, col: 4 }), None);
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" bottom-right "), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("middle"), None);
        assert_eq!(Position::from_label_or_number("12"), None);
    }
}
