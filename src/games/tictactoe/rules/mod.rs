//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the game state and its contracts can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, evaluate};

use super::position::{Coordinates, Position};
use super::types::{Board, GameStatus};
use tracing::instrument;

/// Maps a position to its 1-based (row, column) coordinates.
pub fn coordinates_of(pos: Position) -> Coordinates {
    pos.coordinates()
}

/// Derives the status of a board: won, drawn, or still open.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(line) = evaluate(board) {
        GameStatus::Won(line.player())
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
