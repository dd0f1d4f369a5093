//! Keyboard and mouse mapping onto board positions.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps the keys `1`-`9` to cell indices 0-8.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        d @ 1..=9 => Some(d as usize - 1),
        _ => None,
    }
}

/// Finds the cell under a terminal coordinate.
pub fn cell_at(cells: &[Rect; 9], column: u16, row: u16) -> Option<usize> {
    cells.iter().position(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}
