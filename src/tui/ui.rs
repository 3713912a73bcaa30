//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use timetravel_tictactoe::{CellView, MoveList, Player, Position};

use super::app::App;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Time Travel Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], &app.move_list());

    let mut status_lines = vec![Line::from(app.status_message())];
    if let Some(message) = app.history_message() {
        status_lines[0].spans.push(Span::styled(
            format!("  ({})", message),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(status_lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Arrows+Enter or 1-9: play | PgUp/PgDn: step | Home/End: start/latest | Q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 29, 11);
    let view = app.board_view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row) in view.rows().enumerate() {
        draw_row(frame, rows[i * 2], row, app.cursor());
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], cursor: Position) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], cell, cursor);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position) {
    let base_style = match cell.square().player() {
        None => Style::default().fg(Color::DarkGray),
        Some(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if *cell.highlighted() {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };
    let style = if *cell.position() == cursor {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };

    let label = cell.label();
    let symbol = if label.is_empty() {
        format!("{}", cell.position().index() + 1)
    } else {
        label
    };

    // Middle line of the 3-line cell carries the mark.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_moves(frame: &mut Frame, area: Rect, moves: &MoveList) {
    let items: Vec<ListItem> = moves
        .entries()
        .iter()
        .map(|entry| {
            let (marker, style) = if *entry.current() {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}. {}", marker, entry.step() + 1, entry.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
