//! Application state and logic.

use crate::input::{self, Action};
use strictly_streak::{
    Cell, Game, GameConfig, GameState, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WIN_STREAK,
};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Cell,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            cursor: Cell::new(0, 0),
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Gets the cell under the cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        let state = self.state();
        state
            .status()
            .message()
            .unwrap_or_else(|| format!("Player {}'s turn", state.current_player()))
    }

    /// Handles one user action.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        let config = self.state().config();

        match action {
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction, config.grid_size());
            }
            Action::Place => self.game.place_mark(self.cursor.row, self.cursor.col),
            Action::GrowGrid if config.grid_size() < MAX_GRID_SIZE => {
                self.configure(config.grid_size() + 1, config.win_streak())
            }
            Action::ShrinkGrid if config.grid_size() > MIN_GRID_SIZE => {
                let grid_size = config.grid_size() - 1;
                self.configure(grid_size, config.win_streak().min(grid_size))
            }
            Action::RaiseStreak if config.win_streak() < config.grid_size() => {
                self.configure(config.grid_size(), config.win_streak() + 1)
            }
            Action::LowerStreak if config.win_streak() > MIN_WIN_STREAK => {
                self.configure(config.grid_size(), config.win_streak() - 1)
            }
            // Controls are bounded; presses past a limit change nothing.
            Action::GrowGrid | Action::ShrinkGrid | Action::RaiseStreak | Action::LowerStreak => {
                debug!(?config, "Control already at its limit");
            }
            Action::Reset => {
                debug!("Restarting game");
                self.game.reset();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn configure(&mut self, grid_size: usize, win_streak: usize) {
        self.game.configure(grid_size, win_streak);
        self.cursor = input::clamp_cursor(self.cursor, self.state().config().grid_size());
    }
}
