//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{GameView, Mode, Player, Position};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the game and returns the screen area of each cell (for mouse hits).
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Position) -> [Rect; 9] {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic Tac Toe - {}", view.mode().label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cells = draw_board(frame, chunks[1], view, cursor);

    let status_style = if view.status().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status_text().as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(*view.mode()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

fn help_text(mode: Mode) -> String {
    let switch = match mode {
        Mode::TwoPlayer => "Switch to AI Mode",
        Mode::PlayerVsAi => "Switch to Player Mode",
    };
    format!("1-9/click: place  arrows+enter  r: restart  m: {}  q: quit", switch)
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            let index = row * 3 + col;
            cells[index] = cols[col * 2];
            draw_cell(frame, cols[col * 2], view, cursor, index);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position, index: usize) {
    let (symbol, mut style) = match view.cells()[index] {
        None => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_winning_cell(index) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if !view.status().is_over() && cursor.to_index() == index {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Middle line of a three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameEngine;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draw_reports_nine_distinct_cells() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let view = GameEngine::default().view();
        let mut cells = [Rect::default(); 9];
        terminal.draw(|f| cells = draw(f, &view, Position::Center)).unwrap();

        assert!(cells.iter().all(|r| r.width == CELL_WIDTH && r.height == CELL_HEIGHT));
        assert!(cells[0].x < cells[1].x && cells[1].x < cells[2].x);
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);
    }

    #[test]
    fn test_status_line_is_rendered() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let view = GameEngine::default().view();
        terminal
            .draw(|f| {
                draw(f, &view, Position::Center);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("X's turn"));
        assert!(text.contains("Switch to AI Mode"));
    }
}
