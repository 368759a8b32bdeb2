//! First-class input events for the game engine.
//!
//! Every user interaction becomes one [`Event`], and every state change goes
//! through [`GameState::apply`](crate::GameState::apply).

use super::Cell;
use serde::{Deserialize, Serialize};

/// An input that drives one state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Change the board dimensions; always starts a fresh game.
    Configure {
        /// Requested board side (clamped to `3..=10`).
        grid_size: usize,
        /// Requested run length (clamped to `3..=grid_size`).
        win_streak: usize,
    },
    /// Clear the board, keeping the current dimensions.
    Reset,
    /// Current player marks a cell.
    PlaceMark(Cell),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Configure {
                grid_size,
                win_streak,
            } => write!(f, "configure {}x{} streak {}", grid_size, grid_size, win_streak),
            Event::Reset => write!(f, "reset"),
            Event::PlaceMark(cell) => write!(f, "place {}", cell),
        }
    }
}

/// Why a move was not applied.
///
/// The engine treats all of these as silent no-ops; the error exists so
/// callers can log or display the reason.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Cell),

    /// The square at the cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Cell),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
