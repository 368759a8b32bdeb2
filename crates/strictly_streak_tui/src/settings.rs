//! Persistent preferences loaded from a TOML settings file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_streak::{GameConfig, MIN_GRID_SIZE, MIN_WIN_STREAK};
use tracing::{debug, info, instrument};

/// User-configurable settings for a session.
///
/// Values outside the supported range are clamped when turned into a
/// [`GameConfig`], not when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Board side length for new games.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Marks in a row needed to win.
    #[serde(default = "default_win_streak")]
    win_streak: usize,

    /// File the terminal UI logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_grid_size() -> usize {
    MIN_GRID_SIZE
}

#[instrument]
fn default_win_streak() -> usize {
    MIN_WIN_STREAK
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_streak.log")
}

impl Settings {
    /// Creates settings with the given dimensions and the default log file.
    #[instrument]
    pub fn new(grid_size: usize, win_streak: usize) -> Self {
        Self {
            grid_size,
            win_streak,
            log_file: default_log_file(),
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            grid_size = settings.grid_size,
            win_streak = settings.win_streak,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        grid_size: Option<usize>,
        win_streak: Option<usize>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(grid_size) = grid_size {
            self.grid_size = grid_size;
        }
        if let Some(win_streak) = win_streak {
            self.win_streak = win_streak;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Returns the clamped game configuration.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.grid_size, self.win_streak)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(default_grid_size(), default_win_streak())
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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
