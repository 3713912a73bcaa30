//! Contract-based validation for engine moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. A move whose
//! preconditions fail is ignored; postconditions guard the history after
//! every move that was applied.

use crate::error::Rejection;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::{Engine, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Why a precondition can fail.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: nobody has completed a line on the current board.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with the existing winner.
    #[instrument(level = "trace", skip(engine))]
    pub fn check(engine: &Engine) -> Result<(), Rejection> {
        match engine.winner() {
            Some(line) => Err(Rejection::GameDecided(line.winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty on the current board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with the occupied position.
    #[instrument(level = "trace", skip(engine))]
    pub fn check(engine: &Engine, pos: Position) -> Result<(), Rejection> {
        if engine.current_snapshot().board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Contract for `play`.
///
/// Preconditions:
/// - No winner at the current step
/// - Target square is empty
///
/// Postconditions:
/// - The pointer advanced by one onto the new tip of history
/// - All [`EngineInvariants`] hold
pub struct PlayContract;

impl Contract<Engine, Position> for PlayContract {
    type Rejection = Rejection;

    fn pre(engine: &Engine, pos: &Position) -> Result<(), Rejection> {
        NoWinnerYet::check(engine)?;
        SquareIsEmpty::check(engine, *pos)
    }

    fn post(before: &Engine, after: &Engine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if after.step() != before.step() + 1 || after.history().len() != before.step() + 2 {
            violations.push(InvariantViolation::new(
                "Move advances the pointer onto a freshly appended snapshot",
            ));
        }
        if let Err(mut more) = EngineInvariants::check_all(after) {
            violations.append(&mut more);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(%violation, "Postcondition failed");
            }
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_precondition_empty_square() {
        let engine = Engine::new();
        assert!(PlayContract::pre(&engine, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = Engine::new();
        engine.play(4).expect("in range");
        assert_eq!(
            PlayContract::pre(&engine, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_decided_game() {
        let mut engine = Engine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.play(cell).expect("in range");
        }
        assert_eq!(
            PlayContract::pre(&engine, &Position::BottomRight),
            Err(Rejection::GameDecided(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Engine::new();
        let mut after = before.clone();
        after.play(4).expect("in range");
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_advance() {
        let before = Engine::new();
        let after = before.clone();
        let violations = PlayContract::post(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}
