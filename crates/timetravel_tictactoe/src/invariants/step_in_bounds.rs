//! Step pointer invariant: the current step names a recorded snapshot.

use super::Invariant;
use crate::Engine;

/// Invariant: `0 <= step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<Engine> for StepInBoundsInvariant {
    fn holds(engine: &Engine) -> bool {
        engine.step() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current step points inside the recorded history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_jump() {
        let mut engine = Engine::new();
        engine.play(0).expect("in range");
        engine.jump_to(0).expect("in range");
        assert!(StepInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_dangling_pointer() {
        let mut engine = Engine::new();
        engine.step = 1;
        assert!(!StepInBoundsInvariant::holds(&engine));
    }
}
