//! Presenters derive views from engine state and route clicks back as commands.

use timetravel_tictactoe::{BoardView, Command, Engine, MoveList, Position};

#[test]
fn test_board_click_round_trip_through_engine() {
    let mut engine = Engine::new();
    let view = BoardView::new(engine.current_snapshot(), engine.winner().as_ref());
    let command = view.cell(Position::Center).click();
    engine.dispatch(command).expect("in range");

    let view = BoardView::new(engine.current_snapshot(), engine.winner().as_ref());
    assert_eq!(view.cell(Position::Center).label(), "X");
    assert_eq!(view.cell(Position::TopLeft).label(), "");
}

#[test]
fn test_highlight_only_on_winning_cells() {
    let mut engine = Engine::new();
    for cell in [0, 1, 3, 4, 6] {
        engine.play(cell).expect("in range");
    }
    let view = BoardView::new(engine.current_snapshot(), engine.winner().as_ref());
    assert_eq!(
        view.highlighted(),
        vec![Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );

    engine.jump_to(4).expect("in range");
    let view = BoardView::new(engine.current_snapshot(), engine.winner().as_ref());
    assert!(view.highlighted().is_empty());
}

#[test]
fn test_move_list_click_jumps() {
    let mut engine = Engine::new();
    for cell in [2, 6] {
        engine.play(cell).expect("in range");
    }
    let list = MoveList::new(&engine);
    assert_eq!(list.entries().len(), 3);
    assert!(*list.entries()[2].current());

    let command = list.entries()[0].click();
    assert_eq!(command, Command::JumpTo(0));
    engine.dispatch(command).expect("in range");

    let list = MoveList::new(&engine);
    assert!(*list.entries()[0].current());
    assert_eq!(list.entries().len(), 3);
}
