//! Application state and logic.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use timetravel_tictactoe::{BoardView, Command, Engine, MoveList, Position, Transition};
use tracing::{debug, instrument, warn};

/// Main application state: the engine plus what only the terminal needs.
pub struct App {
    engine: Engine,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The board as it should be drawn now.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(self.engine.current_snapshot(), self.engine.winner().as_ref())
    }

    /// The move list as it should be drawn now.
    pub fn move_list(&self) -> MoveList {
        MoveList::new(&self.engine)
    }

    /// Status line: next player, winner, or draw.
    pub fn status_message(&self) -> String {
        self.engine.status().to_string()
    }

    /// Position in history, shown when viewing the past.
    pub fn history_message(&self) -> Option<String> {
        let (step, latest) = (self.engine.step(), self.engine.latest_step());
        (step < latest).then(|| {
            format!(
                "Viewing step {} of {} - playing here discards later moves",
                step, latest
            )
        })
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(step = self.engine.step()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match action_for(key, self.cursor, self.engine.step(), self.engine.latest_step()) {
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::MoveCursor(pos) => self.cursor = pos,
            Action::Dispatch(command) => self.apply(command),
            Action::None => {}
        }
    }

    /// Dispatches a command to the engine.
    ///
    /// Ignored moves and out-of-range requests leave the game as it was; they
    /// are logged but not shown.
    pub fn apply(&mut self, command: Command) {
        if let Command::Play(cell) = command {
            self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
        }

        match self.engine.dispatch(command) {
            Ok(Transition::Play(outcome)) if !outcome.is_played() => {
                debug!(?outcome, "Click had no effect");
            }
            Ok(transition) => debug!(?transition, "Applied"),
            Err(e) => warn!(error = %e, %command, "Command rejected"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::Player;

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().step(), 1);
        assert_eq!(app.board_view().cell(Position::Center).label(), "X");
        assert_eq!(app.status_message(), "Next player: O");
    }

    #[test]
    fn test_digit_moves_cursor_and_plays() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.cursor(), Position::TopRight);
        assert_eq!(app.engine().to_move(), Player::O);
    }

    #[test]
    fn test_history_message_only_in_the_past() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.history_message(), None);
        app.handle_key(KeyCode::PageUp);
        assert_eq!(app.engine().step(), 1);
        assert!(app.history_message().is_some());
        app.handle_key(KeyCode::End);
        assert_eq!(app.history_message(), None);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
