//! Alternating turn invariant: X marks odd steps, O marks even ones.

use super::Invariant;
use crate::{Engine, Player, Square};

/// Invariant: the cell played at step `k` holds the mark of the player
/// whose turn it was after `k - 1` moves.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        engine
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match *snapshot.last_move() {
                Some(pos) => {
                    snapshot.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Snapshot};

    #[test]
    fn test_alternation_holds() {
        let mut engine = Engine::new();
        for cell in [0, 1, 2] {
            engine.play(cell).expect("in range");
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut engine = Engine::new();
        engine.play(0).expect("in range");
        engine.history.snapshots_mut()[1] =
            Snapshot::initial().successor(Position::TopLeft, Player::O);
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
