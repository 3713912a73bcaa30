//! Tests for the terminal app's key handling, without a terminal.

use crossterm::event::KeyCode;
use timetravel_games::App;
use timetravel_tictactoe::{Player, Position, Square};

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

#[test]
fn test_arrow_navigation_then_play() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Char(' ')]);
    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(
        *app.board_view().cell(Position::TopLeft).square(),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_win_then_time_travel_and_branch() {
    let mut app = App::new();
    press(
        &mut app,
        &[
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('4'),
            KeyCode::Char('5'),
            KeyCode::Char('7'),
        ],
    );
    assert_eq!(app.status_message(), "Winner: X");
    assert_eq!(app.board_view().highlighted().len(), 3);

    // Further clicks after the win do nothing.
    press(&mut app, &[KeyCode::Char('9')]);
    assert_eq!(app.engine().latest_step(), 5);

    press(&mut app, &[KeyCode::Home, KeyCode::PageDown, KeyCode::PageDown]);
    assert_eq!(app.engine().step(), 2);
    press(&mut app, &[KeyCode::Char('5')]);
    assert_eq!(app.engine().latest_step(), 3);
    assert_eq!(app.status_message(), "Next player: O");
    assert!(app.board_view().highlighted().is_empty());
}

#[test]
fn test_occupied_cell_click_is_harmless() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
    assert_eq!(app.engine().step(), 1);
    assert_eq!(app.engine().to_move(), Player::O);
}
