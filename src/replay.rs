//! Headless replay: play a list of moves, optionally jump, and report.

use anyhow::{Context, Result};
use timetravel_tictactoe::{BoardView, Engine, MoveList, PlayOutcome, Position};
use tracing::{info, instrument, warn};

/// Plays `moves` from a fresh game, then jumps to `jump` if given.
///
/// Moves are board indices (0-8) or position labels. Illegal moves are
/// skipped the same way a stray click would be; unparseable ones are errors.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[String], jump: Option<usize>) -> Result<Engine> {
    let mut engine = Engine::new();

    for raw in moves {
        let pos = Position::from_label_or_number(raw).with_context(|| {
            format!("'{}' is not a cell (use 0-8 or a label like 'center')", raw)
        })?;
        match engine.play_at(pos)? {
            PlayOutcome::Played { player, step, .. } => info!(%player, %pos, step, "Replayed move"),
            PlayOutcome::Ignored(rejection) => warn!(%pos, %rejection, "Skipping move"),
        }
    }

    if let Some(step) = jump {
        engine
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    Ok(engine)
}

/// Board, status line and move list as plain text.
///
/// Winning cells are wrapped in brackets; the current history entry is
/// marked with `>`.
pub fn render_text(engine: &Engine) -> String {
    let view = BoardView::new(engine.current_snapshot(), engine.winner().as_ref());
    let mut out = String::new();

    let rows: Vec<String> = view
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let label = cell.label();
                    let label = if label.is_empty() { "." } else { label.as_str() };
                    if *cell.highlighted() {
                        format!("[{}]", label)
                    } else {
                        format!(" {} ", label)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    out.push_str(&rows.join("\n---+---+---\n"));
    out.push_str("\n\n");
    out.push_str(&engine.status().to_string());
    out.push('\n');

    for entry in MoveList::new(engine).entries() {
        let marker = if *entry.current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step() + 1, entry.label()));
    }
    out
}

/// The observable game state as pretty JSON.
pub fn render_json(engine: &Engine) -> Result<String> {
    let state = serde_json::json!({
        "step": engine.step(),
        "to_move": engine.to_move(),
        "status": engine.status().to_string(),
        "winner": engine.winner(),
        "board": BoardView::new(engine.current_snapshot(), engine.winner().as_ref()),
        "moves": MoveList::new(engine),
        "history": engine.history(),
    });
    serde_json::to_string_pretty(&state).context("Failed to serialize game state")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_replay_accepts_labels() {
        let engine = replay(&moves(&["center", "0", "Bottom-right"]), None).expect("valid");
        assert_eq!(engine.step(), 3);
    }

    #[test]
    fn test_replay_rejects_garbage() {
        assert!(replay(&moves(&["nowhere"]), None).is_err());
        assert!(replay(&moves(&["9"]), None).is_err());
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        assert!(replay(&moves(&["0"]), Some(2)).is_err());
    }

    #[test]
    fn test_render_text_marks_win_and_current_step() {
        let engine = replay(&moves(&["0", "1", "3", "4", "6"]), None).expect("valid");
        let text = render_text(&engine);
        assert!(text.starts_with(concat!(
            "[X]| O | . \n---+---+---\n",
            "[X]| O | . \n---+---+---\n",
            "[X]| . | . ",
        )));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("> 6. Go to move #5 - [3, 1]"));
        assert!(text.contains("  1. Go to game start"));
    }

    #[test]
    fn test_render_json_reports_state() {
        let engine = replay(&moves(&["4"]), Some(0)).expect("valid");
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&engine).expect("serializable")).expect("json");
        assert_eq!(json["step"], 0);
        assert_eq!(json["to_move"], "X");
        assert_eq!(json["status"], "Next player: X");
        assert_eq!(json["moves"]["entries"].as_array().map(Vec::len), Some(2));
    }
}
