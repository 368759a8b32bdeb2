//! Game state machine for N-by-N tic-tac-toe.
//!
//! [`GameState::apply`] is the single transition function: it consumes the
//! current state and an [`Event`] and returns the next state. [`Game`] wraps
//! it for front ends that prefer to hold one mutable value.

use super::action::{Event, MoveError};
use super::config::GameConfig;
use super::invariants::assert_invariants;
use super::rules;
use super::{Board, Cell, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Status
// ─────────────────────────────────────────────────────────────

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Terminal message, or `None` while the game is in progress.
    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(format!("{} Wins!", player)),
            GameStatus::Draw => Some("It's a Draw!".to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  State
// ─────────────────────────────────────────────────────────────

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) move_count: usize,
    pub(crate) winning_line: Vec<Cell>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(config.grid_size()),
            current_player: Player::X,
            status: GameStatus::InProgress,
            move_count: 0,
            winning_line: Vec::new(),
        }
    }

    /// Returns the configuration this game was started with.
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is (the winner, once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Number of marks placed since the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cells of the completed line, empty unless the game was won.
    pub fn winning_line(&self) -> &[Cell] {
        &self.winning_line
    }

    /// Returns true if the cell is part of the winning line.
    pub fn is_winning_cell(&self, cell: Cell) -> bool {
        self.winning_line.contains(&cell)
    }

    /// Applies one event and returns the next state.
    #[instrument(skip(self), fields(status = ?self.status, move_count = self.move_count))]
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Configure {
                grid_size,
                win_streak,
            } => {
                let config = GameConfig::new(grid_size, win_streak);
                debug!(?config, "Reconfiguring game");
                Self::new(config)
            }
            Event::Reset => {
                debug!("Resetting game");
                Self::new(self.config)
            }
            Event::PlaceMark(cell) => {
                if let Err(e) = self.try_place_mark(cell) {
                    debug!(%cell, reason = %e, "Move ignored");
                }
                self
            }
        }
    }

    /// Places the current player's mark, reporting why an illegal move was
    /// refused. The state is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place_mark(&mut self, cell: Cell) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(cell) {
            None => return Err(MoveError::OutOfBounds(cell)),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(cell)),
            Some(Square::Empty) => {}
        }

        let player = self.current_player;
        self.board.set(cell, Square::Occupied(player));
        self.move_count += 1;

        if let Some((axis, line)) =
            rules::find_winning_line(&self.board, cell, player, self.config.win_streak())
        {
            info!(%player, %axis, move_count = self.move_count, "Game won");
            self.status = GameStatus::Won(player);
            self.winning_line = line;
        } else if self.move_count == self.config.cell_count() {
            info!(move_count = self.move_count, "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }

        assert_invariants(self);
        Ok(())
    }

    /// Plays `moves` in order on a fresh game. Illegal moves are ignored the
    /// same way interactive clicks are.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[Cell]) -> Self {
        moves
            .iter()
            .fold(Self::new(config), |state, cell| state.apply(Event::PlaceMark(*cell)))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  Mutable facade
// ─────────────────────────────────────────────────────────────

/// Game engine holding the current state.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Feeds one event through [`GameState::apply`].
    #[instrument(skip(self, event), fields(%event))]
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Starts a fresh game with new dimensions (clamped into range).
    pub fn configure(&mut self, grid_size: usize, win_streak: usize) {
        self.dispatch(Event::Configure {
            grid_size,
            win_streak,
        });
    }

    /// Clears the board, keeping the current dimensions.
    pub fn reset(&mut self) {
        self.dispatch(Event::Reset);
    }

    /// Places the current player's mark; illegal moves are ignored.
    pub fn place_mark(&mut self, row: usize, col: usize) {
        self.dispatch(Event::PlaceMark(Cell::new(row, col)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(GameStatus::InProgress.message(), None);
        assert_eq!(GameStatus::Won(Player::O).message().as_deref(), Some("O Wins!"));
        assert_eq!(GameStatus::Draw.message().as_deref(), Some("It's a Draw!"));
    }

    #[test]
    fn test_try_place_mark_reasons() {
        let mut state = GameState::new(GameConfig::default());
        assert_eq!(
            state.try_place_mark(Cell::new(3, 0)),
            Err(MoveError::OutOfBounds(Cell::new(3, 0)))
        );

        state.try_place_mark(Cell::new(1, 1)).unwrap();
        assert_eq!(
            state.try_place_mark(Cell::new(1, 1)),
            Err(MoveError::SquareOccupied(Cell::new(1, 1)))
        );

        state.status = GameStatus::Draw;
        assert_eq!(state.try_place_mark(Cell::new(0, 0)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winner_keeps_turn() {
        let state = GameState::replay(
            GameConfig::default(),
            &[
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(0, 2),
            ],
        );
        assert_eq!(state.status(), GameStatus::Won(Player::X));
        assert_eq!(state.current_player(), Player::X);
        assert!(state.is_winning_cell(Cell::new(0, 1)));
        assert!(!state.is_winning_cell(Cell::new(1, 1)));
    }

    #[test]
    fn test_dispatch_matches_apply() {
        let mut game = Game::default();
        game.place_mark(0, 0);
        let expected = GameState::default().apply(Event::PlaceMark(Cell::new(0, 0)));
        assert_eq!(game.state(), &expected);
    }
}
