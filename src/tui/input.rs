//! Keyboard cursor movement over the grid.

use crossterm::event::KeyCode;

use noughts::Position;

/// Moves the cursor one cell in the direction of an arrow key, staying
/// inside the grid. Non-arrow keys leave the cursor unchanged.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
