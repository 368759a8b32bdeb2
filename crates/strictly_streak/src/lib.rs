//! Strictly Streak - pure N-by-N tic-tac-toe logic.
//!
//! Two players alternate marking cells on a square grid of 3 to 10 cells a
//! side. The first to complete a run of `win_streak` marks in a row,
//! column or diagonal wins; a full board with no run is a draw.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Square`]
//! - **Config**: [`GameConfig`] keeps `3 <= win_streak <= grid_size <= 10`
//! - **Rules**: win detection anchored at the last move, draw detection
//! - **State machine**: [`GameState::apply`] maps `(state, event)` to the next state
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_streak::{Game, GameConfig, GameStatus, Player};
//!
//! let mut game = Game::new(GameConfig::new(3, 3));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.place_mark(row, col);
//! }
//! assert_eq!(game.state().status(), GameStatus::Won(Player::X));
//! assert_eq!(game.state().winning_line().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Event, MoveError};
pub use config::{ConfigError, GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WIN_STREAK};
pub use game::{Game, GameState, GameStatus};
pub use rules::Axis;
pub use types::{Board, Cell, CellParseError, Player, Square};
