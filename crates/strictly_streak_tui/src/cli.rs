//! Command-line interface for strictly_streak.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_streak::Cell;

/// Strictly Streak - N-by-N tic-tac-toe with a configurable win streak
#[derive(Parser, Debug)]
#[command(name = "strictly_streak")]
#[command(about = "Configurable N-by-N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "strictly_streak.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board side length (3-10)
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Marks in a row needed to win (3 up to the grid size)
        #[arg(short, long)]
        win_streak: Option<usize>,

        /// File to write logs to while the terminal UI is active
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a list of `row,col` moves and print the final position
    Replay {
        /// Board side length (3-10)
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Marks in a row needed to win (3 up to the grid size)
        #[arg(short, long)]
        win_streak: Option<usize>,

        /// Print the final state as JSON instead of a board diagram
        #[arg(long)]
        json: bool,

        /// Moves as zero-based `row,col` pairs, X first
        moves: Vec<Cell>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            grid_size: None,
            win_streak: None,
            log_file: None,
        }
    }
}
