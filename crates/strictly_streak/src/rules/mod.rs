//! Game rules for N-by-N tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state. Rules are
//! separated from board storage so the state machine and the invariants can
//! share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Axis, find_winning_line, scan_axis};
