//! Strictly Streak - N-by-N tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use strictly_streak_tui::{
    Cli, Command, Settings, init_file_tracing, init_stderr_tracing, render_replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (for RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            grid_size,
            win_streak,
            log_file,
        } => {
            let settings = settings.with_overrides(grid_size, win_streak, log_file);
            init_file_tracing(settings.log_file())?;
            info!(?settings, "Settings resolved");
            run_tui(settings.game_config())
        }
        Command::Replay {
            grid_size,
            win_streak,
            json,
            moves,
        } => {
            init_stderr_tracing();
            let settings = settings.with_overrides(grid_size, win_streak, None);
            println!("{}", render_replay(settings.game_config(), &moves, json)?);
            Ok(())
        }
    }
}
