//! The game engine: history, step pointer, and the two ways to change them.
//!
//! The engine is the only stateful piece. It is constructed once and owned by
//! whatever drives the UI; presenters borrow it read-only and hand back
//! [`Command`]s.

use crate::command::{Command, Transition};
use crate::contracts::{Contract, PlayContract};
use crate::error::{EngineError, PlayOutcome};
use crate::rules::{WinLine, winner_of};
use crate::{Board, Coords, GameStatus, History, Player, Position, Snapshot};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Label of the history entry for step 0.
pub const GAME_START_LABEL: &str = "Go to game start";

/// Tic-tac-toe with a replayable history.
///
/// The player to move is always derived from the step pointer, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engine {
    pub(crate) history: History,
    pub(crate) step: usize,
}

impl Engine {
    /// A fresh game: one empty snapshot, pointer at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The last recorded step.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The snapshot at the current step.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history.snapshots()[self.step]
    }

    /// The player who moves next: X on even steps, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// The completed line on the current board, if any.
    pub fn winner(&self) -> Option<WinLine> {
        self.current_snapshot().winner()
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_snapshot(), self.to_move())
    }

    /// Pure win check over any board.
    pub fn winner_of(board: &Board) -> Option<WinLine> {
        winner_of(board)
    }

    /// Marks `cell` (0-8) for the player to move.
    ///
    /// Occupied cells and decided boards are ignored and reported as
    /// [`PlayOutcome::Ignored`]. Playing from a past step discards every
    /// snapshot after it.
    ///
    /// # Errors
    ///
    /// [`EngineError::CellOutOfRange`] if `cell >= 9`.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play(&mut self, cell: usize) -> Result<PlayOutcome, EngineError> {
        let pos = Position::from_index(cell).ok_or_else(|| {
            warn!(cell, "Rejecting out-of-range cell");
            EngineError::CellOutOfRange { index: cell }
        })?;
        self.play_at(pos)
    }

    /// Marks `pos` for the player to move. See [`Engine::play`].
    ///
    /// # Errors
    ///
    /// [`EngineError::InvariantViolation`] if the move corrupted history; the
    /// engine is restored to its prior state first.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn play_at(&mut self, pos: Position) -> Result<PlayOutcome, EngineError> {
        if let Err(rejection) = PlayContract::pre(self, &pos) {
            debug!(%rejection, "Move ignored");
            return Ok(PlayOutcome::Ignored(rejection));
        }

        #[cfg(any(debug_assertions, feature = "invariant-checks"))]
        let before = self.clone();

        let player = self.to_move();
        let next = self.current_snapshot().successor(pos, player);
        self.step = self.history.branch(self.step, next);

        #[cfg(any(debug_assertions, feature = "invariant-checks"))]
        if let Err(violations) = PlayContract::post(&before, self) {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            *self = before;
            return Err(EngineError::InvariantViolation { description });
        }

        info!(%player, position = %pos, step = self.step, "Move played");
        Ok(PlayOutcome::Played {
            player,
            position: pos,
            step: self.step,
        })
    }

    /// Moves the step pointer. History is untouched.
    ///
    /// # Errors
    ///
    /// [`EngineError::StepOutOfRange`] if `step` was never recorded.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        self.check_step(step)?;
        debug!(to = step, "Jumping");
        self.step = step;
        Ok(())
    }

    /// Routes a command to `play` or `jump_to`.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<Transition, EngineError> {
        match command {
            Command::Play(cell) => self.play(cell).map(Transition::Play),
            Command::JumpTo(step) => {
                let from = self.step;
                self.jump_to(step)?;
                Ok(Transition::Jump { from, to: step })
            }
        }
    }

    /// History label for `step`: the game start, or the move number and the
    /// 1-based `[row, col]` of the cell played.
    ///
    /// # Errors
    ///
    /// [`EngineError::StepOutOfRange`] if `step` was never recorded.
    pub fn describe_move(&self, step: usize) -> Result<String, EngineError> {
        self.check_step(step)?;
        let snapshot = &self.history.snapshots()[step];
        Ok(describe_step(step, snapshot))
    }

    fn check_step(&self, step: usize) -> Result<(), EngineError> {
        if step < self.history.len() {
            Ok(())
        } else {
            warn!(step, len = self.history.len(), "Rejecting out-of-range step");
            Err(EngineError::StepOutOfRange {
                step,
                last: self.latest_step(),
            })
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for a history entry, given its step and snapshot.
pub fn describe_step(step: usize, snapshot: &Snapshot) -> String {
    if step == 0 {
        GAME_START_LABEL.to_string()
    } else {
        format!(
            "Go to move #{} - {}",
            step,
            Coords::from_index(snapshot.move_index())
        )
    }
}
