//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use strictly_streak::Cell;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cell cursor.
    MoveCursor(Direction),
    /// Mark the cell under the cursor.
    Place,
    /// Grid size + 1.
    GrowGrid,
    /// Grid size - 1.
    ShrinkGrid,
    /// Win streak + 1.
    RaiseStreak,
    /// Win streak - 1.
    LowerStreak,
    /// Clear the board.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, if it is bound.
pub fn map_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::GrowGrid,
        KeyCode::Char('-') => Action::ShrinkGrid,
        KeyCode::Char(']') => Action::RaiseStreak,
        KeyCode::Char('[') => Action::LowerStreak,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one step, staying on a `size × size` board.
pub fn move_cursor(cursor: Cell, direction: Direction, size: usize) -> Cell {
    let last = size.saturating_sub(1);
    match direction {
        Direction::Up => Cell::new(cursor.row.saturating_sub(1), cursor.col),
        Direction::Down => Cell::new((cursor.row + 1).min(last), cursor.col),
        Direction::Left => Cell::new(cursor.row, cursor.col.saturating_sub(1)),
        Direction::Right => Cell::new(cursor.row, (cursor.col + 1).min(last)),
    }
}

/// Pulls the cursor back onto a board that shrank.
pub fn clamp_cursor(cursor: Cell, size: usize) -> Cell {
    let last = size.saturating_sub(1);
    Cell::new(cursor.row.min(last), cursor.col.min(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_vim_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(Action::MoveCursor(Direction::Up)));
        assert_eq!(map_key(KeyCode::Char('l')), Some(Action::MoveCursor(Direction::Right)));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Action::Place));
        assert_eq!(map_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let top_left = Cell::new(0, 0);
        assert_eq!(move_cursor(top_left, Direction::Up, 3), top_left);
        assert_eq!(move_cursor(top_left, Direction::Left, 3), top_left);

        let bottom_right = Cell::new(4, 4);
        assert_eq!(move_cursor(bottom_right, Direction::Down, 5), bottom_right);
        assert_eq!(move_cursor(bottom_right, Direction::Right, 5), bottom_right);
    }

    #[test]
    fn test_cursor_moves_inside_board() {
        let cursor = Cell::new(1, 1);
        assert_eq!(move_cursor(cursor, Direction::Down, 3), Cell::new(2, 1));
        assert_eq!(move_cursor(cursor, Direction::Right, 3), Cell::new(1, 2));
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(Cell::new(9, 2), 4), Cell::new(3, 2));
        assert_eq!(clamp_cursor(Cell::new(1, 1), 4), Cell::new(1, 1));
    }
}
