//! Error and outcome types for engine operations.

use crate::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Caller errors: indices outside the board or the recorded history.
///
/// None of these leave engine state changed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Cell index is not in 0..9.
    #[display("Cell index {index} is outside the board (0-8)")]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Step is not in 0..history length.
    #[display("Step {step} is outside the recorded history (0-{last})")]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// The last valid step.
        last: usize,
    },
    /// A move broke a history invariant and was rolled back.
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// The violated invariants, `; `-separated.
        description: String,
    },
}

/// Why a legal-looking move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Rejection {
    /// The board at the current step already has a winner.
    #[display("{_0} has already won")]
    GameDecided(Player),
    /// The target square is taken.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

/// Result of a `play` call that was in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The mark was placed; the engine now points at `step`.
    Played {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// The new current step.
        step: usize,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl PlayOutcome {
    /// True if the move changed the game.
    pub fn is_played(&self) -> bool {
        matches!(self, PlayOutcome::Played { .. })
    }
}
