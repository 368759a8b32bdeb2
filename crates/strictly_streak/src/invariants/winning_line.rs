//! Winning line invariant: the reported line really wins.

use super::super::rules::{Axis, is_full};
use super::super::{Cell, GameState, GameStatus, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: a won game reports exactly `win_streak` contiguous collinear
/// cells of the winner's mark; any other status reports no line, and a draw
/// has a full board.
pub struct WinningLineInvariant;

/// True if consecutive cells differ by the same axis step.
fn is_contiguous(line: &[Cell]) -> bool {
    Axis::iter().any(|axis| {
        let (d_row, d_col) = axis.delta();
        line.windows(2)
            .all(|pair| pair[0].step(d_row, d_col) == Some(pair[1]))
    })
}

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        let line = state.winning_line();
        match state.status() {
            GameStatus::Won(player) => {
                line.len() == state.config().win_streak()
                    && line
                        .iter()
                        .all(|cell| state.board().get(*cell) == Some(Square::Occupied(player)))
                    && is_contiguous(line)
            }
            GameStatus::Draw => line.is_empty() && is_full(state.board()),
            GameStatus::InProgress => line.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Winning line is a contiguous run of the winner's marks of win-streak length"
    }
}
