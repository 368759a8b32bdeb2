//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and are checked in debug builds.

use super::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collect(violations)
    }
}

pub mod balanced_marks;
pub mod config_bounds;
pub mod move_count;
pub mod winning_line;

pub use balanced_marks::BalancedMarksInvariant;
pub use config_bounds::ConfigBoundsInvariant;
pub use move_count::MoveCountInvariant;
pub use winning_line::WinningLineInvariant;

/// All game invariants as a composable set.
pub type StreakInvariants = (
    ConfigBoundsInvariant,
    MoveCountInvariant,
    BalancedMarksInvariant,
    WinningLineInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = StreakInvariants::check_all(state)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        panic!("Invariant violation: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameConfig, GameStatus, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let state = GameState::new(GameConfig::new(7, 5));
        assert!(StreakInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = GameState::replay(
            GameConfig::new(4, 3),
            &[Cell::new(0, 0), Cell::new(3, 3), Cell::new(1, 1), Cell::new(2, 3)],
        );
        assert!(StreakInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = GameState::new(GameConfig::default());
        state.board.set(Cell::new(0, 0), Square::Occupied(Player::O));
        state.status = GameStatus::Won(Player::X);

        let violations = StreakInvariants::check_all(&state).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec![
                MoveCountInvariant::description(),
                BalancedMarksInvariant::description(),
                WinningLineInvariant::description(),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MoveCountInvariant, BalancedMarksInvariant);
        assert!(TwoInvariants::check_all(&GameState::default()).is_ok());
    }
}
