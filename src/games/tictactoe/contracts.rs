//! Contract-based validation for game transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No line is complete on the active board.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once a line is complete.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match rules::evaluate(state.active_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.active_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: The requested step exists in the history.
pub struct StepInRange;

impl StepInRange {
    /// Fails with [`MoveError::StepOutOfRange`] past the last record.
    #[instrument(skip(state))]
    pub fn check(step: usize, state: &GameState) -> Result<(), MoveError> {
        let len = state.history().len();
        if step < len {
            Ok(())
        } else {
            Err(MoveError::StepOutOfRange { step, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

fn check_invariants(after: &GameState) -> Result<(), MoveError> {
    TicTacToeInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for playing a mark.
///
/// Preconditions:
/// - No line is complete on the active board
/// - Square must be empty
///
/// Postconditions:
/// - The history is one entry past the old active step
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(*pos, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let expected_len = before.step_number() + 2;
        if after.history().len() != expected_len || after.step_number() + 1 != expected_len {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} history entries ending at the active step",
                expected_len
            )));
        }
        check_invariants(after)
    }
}

/// Contract for jumping to a history step.
///
/// Preconditions:
/// - The step exists
///
/// Postconditions:
/// - The history is untouched
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(state: &GameState, step: &usize) -> Result<(), MoveError> {
        StepInRange::check(*step, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if before.history() != after.history() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: jumping changed the history".to_string(),
            ));
        }
        check_invariants(after)
    }
}
