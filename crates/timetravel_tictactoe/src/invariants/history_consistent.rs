//! History consistency invariant: each step changes exactly the cell it records.

use super::Invariant;
use crate::{Engine, Square};

/// Invariant: snapshot 0 is the empty board with no move, and every later
/// snapshot differs from its predecessor in exactly one cell, the one it
/// records as its move, which was empty before.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let snapshots = engine.history().snapshots();
        let Some(first) = snapshots.first() else {
            return false;
        };
        if first.last_move().is_some() || first.board().occupied() != 0 {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(played) = *pair[1].last_move() else {
                return false;
            };
            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.squares()[i] != after.squares()[i])
                .collect();
            changed == [played.index()] && before.get(played) == Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot differs from the previous one in exactly its recorded move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Snapshot};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Engine::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = Engine::new();
        for cell in [0, 4, 2, 1] {
            engine.play(cell).expect("in range");
        }
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_recorded_move_violates() {
        let mut engine = Engine::new();
        engine.play(4).expect("in range");
        let board = engine.history().snapshots()[1].board().clone();
        // Same board, but claims the move went elsewhere.
        engine.history.snapshots_mut()[1] = Snapshot::from_parts(board, Some(Position::TopLeft));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_two_cells_changed_violates() {
        let mut engine = Engine::new();
        engine.play(4).expect("in range");
        let board = engine.history().snapshots()[1]
            .board()
            .with_mark(Position::TopLeft, Player::O);
        engine.history.snapshots_mut()[1] = Snapshot::from_parts(board, Some(Position::Center));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
