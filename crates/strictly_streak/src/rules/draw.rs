//! Draw detection.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Player};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(4);
        board.set(Cell::new(2, 2), Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(5);
        for row in 0..5 {
            for col in 0..5 {
                let player = if (row + col) % 2 == 0 { Player::X } else { Player::O };
                board.set(Cell::new(row, col), Square::Occupied(player));
            }
        }
        assert!(is_full(&board));
    }
}
