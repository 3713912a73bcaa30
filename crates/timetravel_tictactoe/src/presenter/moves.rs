//! The move history list.

use crate::engine::describe_step;
use crate::{Command, Engine};
use derive_getters::Getters;
use serde::Serialize;

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    step: usize,
    label: String,
    current: bool,
}

impl MoveEntry {
    /// The command a click on this entry produces.
    pub fn click(&self) -> Command {
        Command::JumpTo(self.step)
    }
}

/// Every recorded step, oldest first, with the current one marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveList {
    entries: Vec<MoveEntry>,
}

impl MoveList {
    /// Builds the list from the engine's history and pointer.
    pub fn new(engine: &Engine) -> Self {
        let entries = engine
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                label: describe_step(step, snapshot),
                current: step == engine.step(),
            })
            .collect();
        Self { entries }
    }

    /// Entries in step order.
    pub fn entries(&self) -> &[MoveEntry] {
        &self.entries
    }

    /// Forwards a click on entry `step` as a jump command.
    pub fn click(&self, step: usize) -> Command {
        Command::JumpTo(step)
    }
}
