//! Timeline Tic-Tac-Toe library - tic-tac-toe with time travel
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **GameState**: history of board snapshots, active step, display order
//! - **Session**: live game with redraw subscribers
//! - **GameView**: render-ready projection consumed by the terminal UI
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameState, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center)
//!     .jump_to(1)
//!     .apply_move(Position::BottomRight);
//!
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(state.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod games;
mod settings;

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, Contract, Coordinates, GameEvent, GameNotOver, GameState,
    GameStatus, GameView, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    JumpContract, LINES, MonotonicBoardInvariant, MoveContract, MoveEntry, MoveError, MoveRecord,
    Player, Position, Session, SquareIsEmpty, Square, StepInRange, Subscriber,
    TicTacToeInvariants, WinningLine, coordinates_of, evaluate, is_draw, is_full, status,
};
