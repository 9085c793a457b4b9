//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use retrograde_core::{Board, Cell, GameState, Player, SortOrder};

use crate::app::App;

/// Draws the full frame: title, board, history, status, and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Retrograde - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(32)])
        .split(chunks[1]);

    draw_board(frame, main[0], app);
    draw_history(frame, main[1], app.game());
    draw_status(frame, chunks[2], app.game());
    draw_help(frame, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);

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

    for row in 0..Board::SIDE {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, row);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..Board::SIDE {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        draw_cell(frame, cols[col * 2], app, row * Board::SIDE + col);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: usize) {
    let game = app.game();
    let on_win_line = game
        .outcome()
        .line()
        .is_some_and(|line| line.contains(&cell));

    let (symbol, base_style) = match game.board().cells()[cell] {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_win_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, game: &GameState) {
    let len = game.history().len();
    let steps: Vec<usize> = match game.sort_order() {
        SortOrder::Ascending => (0..len).collect(),
        SortOrder::Descending => (0..len).rev().collect(),
    };

    let items: Vec<ListItem> = steps
        .iter()
        .map(|&step| ListItem::new(game.move_descriptor(step)))
        .collect();
    let selected = steps.iter().position(|&step| step == game.step());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("History ({})", game.sort_order())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, game: &GameState) {
    let outcome = game.outcome();
    let status = if let Some(winner) = outcome.winner() {
        format!("Winner: {winner}")
    } else if outcome.is_draw() {
        "This is a Draw".to_string()
    } else {
        format!("Next player: {}", game.next_player())
    };

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "arrows move · enter/1-9 place · pgup/pgdn step · home/end first/latest · s sort · r restart · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
