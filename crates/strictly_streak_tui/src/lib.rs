//! Strictly Streak terminal front end.
//!
//! A thin presentation layer over [`strictly_streak`]: it renders the board
//! and controls with ratatui and turns key presses into engine calls.
//!
//! # Architecture
//!
//! - **App**: cursor plus the engine [`Game`](strictly_streak::Game)
//! - **Input**: key bindings and cursor movement
//! - **UI**: stateless rendering of an [`App`]
//! - **Settings**: TOML preferences overridden by command-line flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod logging;
mod replay;
mod settings;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use input::{Action, Direction, clamp_cursor, map_key, move_cursor};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use replay::render_replay;
pub use settings::{Settings, SettingsError};
pub use terminal::run_tui;
pub use ui::draw;
