//! Board cursor movement.

use crossterm::event::KeyCode;
use retrograde_core::Board;

/// Moves the cursor one cell in the arrow direction, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / Board::SIDE;
    let col = cursor % Board::SIDE;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(Board::SIDE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(Board::SIDE - 1)),
        _ => (row, col),
    };

    row * Board::SIDE + col
}
