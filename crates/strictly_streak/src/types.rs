//! Core domain types for N-by-N tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark shown for this square (`""`, `"X"` or `"O"`).
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// A `(row, col)` coordinate on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("({}, {})", row, col)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell one step away along `(d_row, d_col)`, if it does not
    /// underflow. Upper bounds are checked by the board.
    pub fn step(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Error parsing a cell from `"row,col"` text.
#[derive(Debug, Clone, Display, Error)]
#[display("Cell parse error: {} at {}:{}", message, file, line)]
pub struct CellParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CellParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    /// Parses `"row,col"` (whitespace around either number is allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| CellParseError::new(format!("expected `row,col`, got `{}`", s)))?;

        let row = row
            .trim()
            .parse()
            .map_err(|e| CellParseError::new(format!("invalid row `{}`: {}", row.trim(), e)))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| CellParseError::new(format!("invalid column `{}`: {}", col.trim(), e)))?;

        Ok(Self { row, col })
    }
}

/// Square board of `size × size` squares, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the cell lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.size + cell.col)
    }

    /// Gets the square at the given cell, or `None` if off the board.
    pub fn get(&self, cell: Cell) -> Option<Square> {
        self.index(cell).map(|i| self.squares[i])
    }

    /// Sets the square at the given cell. Returns `false` if the cell is
    /// off the board.
    pub fn set(&mut self, cell: Cell, square: Square) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.squares[i] = square;
                true
            }
            None => false,
        }
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        // `chunks` panics on zero; an empty board simply has no rows.
        self.squares.chunks(self.size.max(1))
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid, `.` marking empty squares.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => ".",
                        other => other.symbol(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::MIN_GRID_SIZE)
    }
}
