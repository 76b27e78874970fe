//! Move records and their move-list descriptions.

use super::position::{Coordinates, Position};
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One entry of the game history: the board after a move.
///
/// The initial record holds the empty board and no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    position: Option<Position>,
}

impl MoveRecord {
    /// The record every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// A record for a board reached by playing `position`.
    pub fn played(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played to reach this board.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Coordinates of the position played, if any.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.position.map(Position::coordinates)
    }

    /// Move-list label for this record at `step`.
    pub fn describe(&self, step: usize) -> String {
        match self.coordinates() {
            Some(coords) if step > 0 => format!("Go to move #{} {}", step, coords),
            _ => "Go to game start".to_string(),
        }
    }
}

/// A render-ready move-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Button label.
    label: String,
    /// Whether this is the active step.
    is_current: bool,
}

impl MoveEntry {
    /// Builds the entry for `record` at `step`.
    pub fn new(step: usize, record: &MoveRecord, current_step: usize) -> Self {
        Self {
            step,
            label: record.describe(step),
            is_current: step == current_step,
        }
    }
}
