//! Terminal setup and the interactive event loop.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_streak::GameConfig;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::{input, ui};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument]
pub fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting Strictly Streak TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draws, waits for a key, applies it; repeats until quit.
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::map_key(key.code)
        {
            app.handle(action);
        }
    }
    Ok(())
}
