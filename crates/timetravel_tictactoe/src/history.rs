//! Move history with a movable step pointer.

use crate::Snapshot;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered snapshots, the first always being the empty board.
///
/// Appending after the pointer has been moved back discards everything
/// past the pointer first, so an abandoned future cannot be reached again.
///
/// Histories are only built by the engine; there is no way to load one that
/// lacks the opening board:
///
/// ```compile_fail
/// let history: timetravel_tictactoe::History =
///     serde_json::from_str(r#"{"snapshots":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// A history holding only the opening board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, including the opening board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the opening board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }

    /// Drops every snapshot after `step`, then appends `snapshot`.
    ///
    /// Returns the step of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        if keep < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - keep, "Discarding abandoned future");
            self.snapshots.truncate(keep);
        }
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_history_holds_only_the_opening_board() {
        let history = History::new();
        assert!(!history.is_empty());
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some(&Snapshot::initial()));
    }

    #[test]
    fn test_branch_at_tip_appends() {
        let mut history = History::new();
        let next = history.snapshots()[0].successor(Position::Center, Player::X);
        assert_eq!(history.branch(0, next), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_branch_in_past_truncates() {
        let mut history = History::new();
        let a = history.snapshots()[0].successor(Position::TopLeft, Player::X);
        history.branch(0, a.clone());
        let b = a.successor(Position::Center, Player::O);
        history.branch(1, b);
        assert_eq!(history.len(), 3);

        let c = history.snapshots()[0].successor(Position::BottomRight, Player::X);
        assert_eq!(history.branch(0, c.clone()), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&c));
    }
}
