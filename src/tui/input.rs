//! Key handling: cursor movement and key-to-action mapping.

use crossterm::event::KeyCode;
use timetravel_tictactoe::{Command, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Move the cell cursor.
    MoveCursor(Position),
    /// Hand a command to the engine.
    Dispatch(Command),
    /// Nothing to do.
    None,
}

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let coords = cursor.coords();
    let (row, col) = match key {
        KeyCode::Left => (coords.row, coords.col.saturating_sub(1).max(1)),
        KeyCode::Right => (coords.row, (coords.col + 1).min(3)),
        KeyCode::Up => (coords.row.saturating_sub(1).max(1), coords.col),
        KeyCode::Down => ((coords.row + 1).min(3), coords.col),
        _ => return cursor,
    };
    Position::from_coords(timetravel_tictactoe::Coords { row, col }).unwrap_or(cursor)
}

/// Maps a key to an action given the cursor, the current step and the
/// latest recorded step.
pub fn action_for(key: KeyCode, cursor: Position, step: usize, latest: usize) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Action::MoveCursor(move_cursor(cursor, key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Dispatch(Command::Play(cursor.index())),
        KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
            Some(digit) => Action::Dispatch(Command::Play(digit as usize - 1)),
            None => Action::None,
        },
        KeyCode::PageUp | KeyCode::Char('[') if step > 0 => {
            Action::Dispatch(Command::JumpTo(step - 1))
        }
        KeyCode::PageDown | KeyCode::Char(']') if step < latest => {
            Action::Dispatch(Command::JumpTo(step + 1))
        }
        KeyCode::Home => Action::Dispatch(Command::JumpTo(0)),
        KeyCode::End => Action::Dispatch(Command::JumpTo(latest)),
        _ => Action::None,
    }
}
