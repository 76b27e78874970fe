//! Tic-tac-toe with move history and time travel.

mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod session;
mod state;
mod types;
mod view;

pub use action::{GameEvent, MoveError};
pub use contracts::{Contract, GameNotOver, JumpContract, MoveContract, SquareIsEmpty, StepInRange};
pub use history::{MoveEntry, MoveRecord};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use position::{Coordinates, Position};
pub use rules::{LINES, WinningLine, coordinates_of, evaluate, is_draw, is_full, status};
pub use session::{Session, Subscriber};
pub use state::GameState;
pub use types::{Board, GameStatus, Player, Square};
pub use view::GameView;
