//! Config bounds invariant: the board matches a clamped configuration.

use super::super::config::{MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WIN_STREAK};
use super::super::GameState;
use super::Invariant;

/// Invariant: `3 <= win_streak <= grid_size <= 10` and the board is
/// `grid_size` squares on a side.
pub struct ConfigBoundsInvariant;

impl Invariant<GameState> for ConfigBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let config = state.config();
        let size = config.grid_size();
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size)
            && (MIN_WIN_STREAK..=size).contains(&config.win_streak())
            && state.board().size() == size
            && state.board().squares().len() == config.cell_count()
    }

    fn description() -> &'static str {
        "Board is square, sized per config, and win streak fits the grid"
    }
}
