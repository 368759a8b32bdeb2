//! Grid size and win streak configuration.
//!
//! Out-of-range values are clamped into bounds rather than rejected, so every
//! `GameConfig` that exists satisfies `3 <= win_streak <= grid_size <= 10`.
//! Callers that want to refuse bad input instead can use
//! [`GameConfig::validate`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Smallest supported board side.
pub const MIN_GRID_SIZE: usize = 3;
/// Largest supported board side.
pub const MAX_GRID_SIZE: usize = 10;
/// Shortest supported win streak.
pub const MIN_WIN_STREAK: usize = 3;

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawGameConfig")]
pub struct GameConfig {
    grid_size: usize,
    win_streak: usize,
}

/// Unchecked wire form, clamped on the way in.
#[derive(Deserialize)]
struct RawGameConfig {
    grid_size: usize,
    win_streak: usize,
}

impl From<RawGameConfig> for GameConfig {
    fn from(raw: RawGameConfig) -> Self {
        Self::new(raw.grid_size, raw.win_streak)
    }
}

impl GameConfig {
    /// Creates a configuration, clamping `grid_size` to `[3, 10]` and then
    /// `win_streak` to `[3, grid_size]`.
    #[instrument]
    pub fn new(grid_size: usize, win_streak: usize) -> Self {
        let clamped_size = grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        let clamped_streak = win_streak.clamp(MIN_WIN_STREAK, clamped_size);

        if clamped_size != grid_size || clamped_streak != win_streak {
            warn!(
                grid_size,
                win_streak,
                clamped_size,
                clamped_streak,
                "Configuration out of range, clamped"
            );
        }

        Self {
            grid_size: clamped_size,
            win_streak: clamped_streak,
        }
    }

    /// Creates a configuration, rejecting out-of-range values.
    #[instrument]
    pub fn validate(grid_size: usize, win_streak: usize) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ConfigError::new(format!(
                "grid size {} outside {}..={}",
                grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE
            )));
        }
        if !(MIN_WIN_STREAK..=grid_size).contains(&win_streak) {
            return Err(ConfigError::new(format!(
                "win streak {} outside {}..={}",
                win_streak, MIN_WIN_STREAK, grid_size
            )));
        }
        Ok(Self {
            grid_size,
            win_streak,
        })
    }

    /// Returns the board side length.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Returns the run length needed to win.
    pub fn win_streak(&self) -> usize {
        self.win_streak
    }

    /// Total number of squares on the board.
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Returns a copy with a new grid size; the win streak is re-clamped.
    pub fn with_grid_size(self, grid_size: usize) -> Self {
        Self::new(grid_size, self.win_streak)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: MIN_GRID_SIZE,
            win_streak: MIN_WIN_STREAK,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
