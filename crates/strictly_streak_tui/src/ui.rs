//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_streak::{Cell, GameState, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WIN_STREAK, Player, Square};

use crate::app::App;

/// Columns taken by one cell, not counting the separator.
const CELL_WIDTH: u16 = 3;

const HELP: &str = "arrows/hjkl move  enter/space place  +/- grid size  [/] win streak  r reset  q quit";

/// Renders the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Controls
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Streak - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_controls(frame, chunks[1], app.state());
    draw_board(frame, chunks[2], app.state(), app.cursor());

    let status_style = if app.state().status().is_over() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_controls(frame: &mut Frame, area: Rect, state: &GameState) {
    let config = state.config();
    let text = format!(
        "Grid Size ({}-{}): {}    Win Streak ({}-{}): {}",
        MIN_GRID_SIZE,
        MAX_GRID_SIZE,
        config.grid_size(),
        MIN_WIN_STREAK,
        config.grid_size(),
        config.win_streak(),
    );
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, area);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: Cell) {
    let size = state.board().size();
    let width = board_width(size);
    let height = (size * 2).saturating_sub(1) as u16;
    let board_area = center_rect(area, width, height);

    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..size {
        if row > 0 {
            lines.push(separator_line(size));
        }
        let mut spans = Vec::with_capacity(size * 2);
        for col in 0..size {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            spans.push(cell_span(state, Cell::new(row, col), cursor));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(state: &GameState, cell: Cell, cursor: Cell) -> Span<'static> {
    let square = state.board().get(cell).unwrap_or_default();

    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if state.is_winning_cell(cell) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cell == cursor && !state.status().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn separator_line(size: usize) -> Line<'static> {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let text = vec![segment; size].join("┼");
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn board_width(size: usize) -> u16 {
    (size as u16 * (CELL_WIDTH + 1)).saturating_sub(1)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
