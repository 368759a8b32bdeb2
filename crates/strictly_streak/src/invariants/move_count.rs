//! Move count invariant: the counter matches the marks on the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: `move_count` equals the number of occupied squares.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.move_count() == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count matches occupied squares"
    }
}
