//! Commands flowing from the presentation layer into the engine.

use crate::PlayOutcome;
use serde::{Deserialize, Serialize};

/// A user intent, routed to the engine by [`crate::Engine::dispatch`].
///
/// Presenters hand these out instead of mutating anything themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Place the current player's mark on a cell (board index 0-8).
    #[display("play {_0}")]
    Play(usize),
    /// Move the step pointer to a recorded step.
    #[display("jump to {_0}")]
    JumpTo(usize),
}

/// What a dispatched [`Command`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A play command, applied or ignored.
    Play(PlayOutcome),
    /// The step pointer moved.
    Jump {
        /// Step before the jump.
        from: usize,
        /// Step after the jump.
        to: usize,
    },
}

impl Transition {
    /// True if the engine's observable state changed.
    pub fn changed(&self) -> bool {
        match self {
            Transition::Play(outcome) => outcome.is_played(),
            Transition::Jump { from, to } => from != to,
        }
    }
}
