//! Win detection anchored at the last placed mark.
//!
//! Only the four lines through the anchor are visited, so a check costs
//! O(win_streak) regardless of board size.

use super::super::{Board, Cell, Player, Square};
use std::iter;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A direction a winning line can run in.
///
/// Iteration order is the order lines are checked in, which decides the
/// reported line when one move completes several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Axis {
    /// Unit step `(d_row, d_col)` in the positive sense of the axis.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Looks for a run of `win_streak` of `player`'s marks through `anchor` on a
/// single axis.
///
/// Walks the negative sense first, then the positive sense, stopping as soon
/// as the run is long enough. The returned cells are contiguous and ordered
/// along the axis's positive direction. The anchor is assumed to hold
/// `player`'s mark.
#[instrument(skip(board), fields(size = board.size()))]
pub fn scan_axis(
    board: &Board,
    anchor: Cell,
    player: Player,
    win_streak: usize,
    axis: Axis,
) -> Option<Vec<Cell>> {
    if win_streak <= 1 {
        return Some(vec![anchor]);
    }

    let mark = Square::Occupied(player);
    let (d_row, d_col) = axis.delta();
    let mut count = 1;
    let mut runs: [Vec<Cell>; 2] = Default::default();

    'walk: for (run, sign) in runs.iter_mut().zip([-1, 1]) {
        let mut cursor = anchor;
        while let Some(next) = cursor
            .step(d_row * sign, d_col * sign)
            .filter(|cell| board.get(*cell) == Some(mark))
        {
            count += 1;
            run.push(next);
            if count == win_streak {
                break 'walk;
            }
            cursor = next;
        }
    }

    if count < win_streak {
        return None;
    }

    let [before, after] = runs;
    Some(
        before
            .into_iter()
            .rev()
            .chain(iter::once(anchor))
            .chain(after)
            .collect(),
    )
}

/// Checks every axis through `anchor` in [`Axis`] order and returns the first
/// winning line found.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_line(
    board: &Board,
    anchor: Cell,
    player: Player,
    win_streak: usize,
) -> Option<(Axis, Vec<Cell>)> {
    Axis::iter().find_map(|axis| {
        scan_axis(board, anchor, player, win_streak, axis).map(|line| {
            debug!(%axis, %player, ?line, "Winning line found");
            (axis, line)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, player: Player, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col) in cells {
            board.set(Cell::new(row, col), Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_line_on_lone_mark() {
        let board = board_with(3, Player::X, &[(1, 1)]);
        assert_eq!(find_winning_line(&board, Cell::new(1, 1), Player::X, 3), None);
    }

    #[test]
    fn test_horizontal_from_right_end() {
        let board = board_with(3, Player::X, &[(0, 0), (0, 1), (0, 2)]);
        let (axis, line) = find_winning_line(&board, Cell::new(0, 2), Player::X, 3).unwrap();
        assert_eq!(axis, Axis::Horizontal);
        assert_eq!(line, vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn test_vertical_from_middle() {
        let board = board_with(4, Player::O, &[(0, 3), (1, 3), (2, 3)]);
        let (axis, line) = find_winning_line(&board, Cell::new(1, 3), Player::O, 3).unwrap();
        assert_eq!(axis, Axis::Vertical);
        assert_eq!(line, vec![Cell::new(0, 3), Cell::new(1, 3), Cell::new(2, 3)]);
    }

    #[test]
    fn test_diagonal() {
        let board = board_with(5, Player::X, &[(1, 1), (2, 2), (3, 3), (4, 4)]);
        let (axis, line) = find_winning_line(&board, Cell::new(4, 4), Player::X, 4).unwrap();
        assert_eq!(axis, Axis::Diagonal);
        assert_eq!(
            line,
            vec![Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3), Cell::new(4, 4)]
        );
    }

    #[test]
    fn test_anti_diagonal_ordered_along_axis() {
        let board = board_with(3, Player::O, &[(0, 2), (1, 1), (2, 0)]);
        let (axis, line) = find_winning_line(&board, Cell::new(1, 1), Player::O, 3).unwrap();
        assert_eq!(axis, Axis::AntiDiagonal);
        assert_eq!(line, vec![Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)]);
    }

    #[test]
    fn test_opponent_marks_break_run() {
        let mut board = board_with(4, Player::X, &[(0, 0), (0, 1), (0, 3)]);
        board.set(Cell::new(0, 2), Square::Occupied(Player::O));
        assert_eq!(find_winning_line(&board, Cell::new(0, 1), Player::X, 3), None);
    }

    #[test]
    fn test_does_not_wrap_across_rows() {
        let board = board_with(3, Player::X, &[(0, 1), (0, 2), (1, 0)]);
        assert_eq!(find_winning_line(&board, Cell::new(0, 2), Player::X, 3), None);
    }

    #[test]
    fn test_long_run_reports_exact_streak() {
        let board = board_with(6, Player::X, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        let (_, line) = find_winning_line(&board, Cell::new(2, 2), Player::X, 3).unwrap();
        assert_eq!(line.len(), 3);
        // Negative sense is walked first.
        assert_eq!(line, vec![Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)]);
    }

    #[test]
    fn test_horizontal_checked_before_vertical() {
        let board = board_with(3, Player::X, &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]);
        let (axis, _) = find_winning_line(&board, Cell::new(0, 0), Player::X, 3).unwrap();
        assert_eq!(axis, Axis::Horizontal);
    }

    #[test]
    fn test_axis_order() {
        let axes: Vec<Axis> = Axis::iter().collect();
        assert_eq!(
            axes,
            vec![Axis::Horizontal, Axis::Vertical, Axis::Diagonal, Axis::AntiDiagonal]
        );
    }
}
