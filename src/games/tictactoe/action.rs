//! First-class input events and rejection reasons.
//!
//! Every user action reaches the game as a [`GameEvent`]. Invalid actions
//! are ignored on the default path; the strict operations report them as
//! a [`MoveError`] instead.

use super::Position;
use serde::{Deserialize, Serialize};

/// An input event from the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board cell was clicked.
    CellClicked(Position),
    /// A move-list entry was clicked.
    HistoryClicked(usize),
    /// The sort-order toggle was clicked.
    SortToggled,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CellClicked(pos) => write!(f, "click {}", pos.label()),
            GameEvent::HistoryClicked(step) => write!(f, "jump to step {}", step),
            GameEvent::SortToggled => write!(f, "toggle sort"),
        }
    }
}

/// Error that can occur when validating or applying an event.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A line is already complete on the active board.
    #[display("Game is already over")]
    GameOver,

    /// The requested history step does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// An invariant was violated by a transition or a deserialized state.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
