//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use oxo_engine::Position;

/// Moves cursor based on arrow keys (or `hjkl`), staying on the board.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.wrapping_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.wrapping_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        _ => return cursor,
    };
    Position::new(row, col).unwrap_or(cursor)
}
