//! Game state with move history and time travel.
//!
//! A [`GameState`] is a value: every operation returns the next state and
//! leaves the previous one untouched. The history holds one board snapshot
//! per move, oldest first, starting from the empty board. Jumping back only
//! moves the step pointer; the next move played from an earlier step
//! discards every snapshot after it.

use super::action::{GameEvent, MoveError};
use super::contracts::{Contract, JumpContract, MoveContract};
use super::history::{MoveEntry, MoveRecord};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{self, WinningLine};
use super::types::{Board, GameStatus, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// Deserialized states are checked against [`TicTacToeInvariants`] and
/// rejected if any invariant fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    /// Board snapshots, oldest first. Never empty.
    pub(super) history: Vec<MoveRecord>,
    /// Index of the active snapshot.
    pub(super) step_number: usize,
    /// Move-list display order.
    pub(super) ascending: bool,
}

/// Wire shape of a [`GameState`] before validation.
#[derive(Deserialize)]
struct UncheckedGameState {
    history: Vec<MoveRecord>,
    step_number: usize,
    ascending: bool,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = MoveError;

    fn try_from(raw: UncheckedGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step_number: raw.step_number,
            ascending: raw.ascending,
        };
        TicTacToeInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game: one empty board, X to move, ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::initial()],
            step_number: 0,
            ascending: true,
        }
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        Self {
            ascending,
            ..Self::new()
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the active step.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns true when the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the board at the active step.
    pub fn active_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// Returns the completed line on the active board, if any.
    pub fn current_winner(&self) -> Option<WinningLine> {
        rules::evaluate(self.active_board())
    }

    /// Returns the player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Returns the status of the active board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.active_board())
    }

    /// Human-readable status line.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Draw => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Plays the next mark at `pos`, reporting why a move is refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the active board already has a line.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        MoveContract::pre(self, &pos)?;

        let board = self.active_board().with_mark(pos, self.next_player());
        let mut history = self.history[..=self.step_number].to_vec();
        history.push(MoveRecord::played(board, pos));

        let next = Self {
            step_number: history.len() - 1,
            history,
            ascending: self.ascending,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(
            step = next.step_number,
            status = ?next.status(),
            "Move applied"
        );
        Ok(next)
    }

    /// Plays the next mark at `pos`; refused moves leave the state unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(self, pos: Position) -> Self {
        match self.try_apply_move(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self
            }
        }
    }

    /// Makes `step` the active step without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::StepOutOfRange`] if no such step exists.
    #[instrument(skip(self))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, MoveError> {
        JumpContract::pre(self, &step)?;
        let next = Self {
            step_number: step,
            ..self.clone()
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        Ok(next)
    }

    /// Makes `step` the active step; unknown steps are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(self, step: usize) -> Self {
        match self.try_jump_to(step) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Jump ignored");
                self
            }
        }
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_sort(self) -> Self {
        Self {
            ascending: !self.ascending,
            ..self
        }
    }

    /// Applies one input event.
    #[instrument(skip(self, event), fields(event = %event))]
    pub fn update(self, event: GameEvent) -> Self {
        match event {
            GameEvent::CellClicked(pos) => self.apply_move(pos),
            GameEvent::HistoryClicked(step) => self.jump_to(step),
            GameEvent::SortToggled => self.toggle_sort(),
        }
    }

    /// Move-list entries in display order.
    ///
    /// Descending order only reverses the returned list; the history
    /// itself always stays oldest first.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, record)| MoveEntry::new(step, record, self.step_number));
        if self.ascending {
            entries.collect()
        } else {
            entries.rev().collect()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play(indices: &[usize]) -> GameState {
        indices.iter().fold(GameState::new(), |state, &i| {
            state.apply_move(Position::from_index(i).expect("valid index"))
        })
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step_number(), 0);
        assert!(state.is_ascending());
        assert_eq!(state.next_player(), Player::X);
        assert_eq!(state.status_text(), "Next player: X");
    }

    #[test]
    fn test_first_move_places_x() {
        let state = play(&[0]);
        assert_eq!(state.active_board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(state.current_winner(), None);
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_try_apply_move_reports_occupied() {
        let state = play(&[4]);
        assert_eq!(
            state.try_apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_try_apply_move_reports_game_over() {
        let state = play(&[0, 4, 1, 5, 2]);
        assert_eq!(state.try_apply_move(Position::BottomLeft), Err(MoveError::GameOver));
        assert_eq!(state.status_text(), "Winner: X");
    }

    #[test]
    fn test_try_jump_to_out_of_range() {
        let state = play(&[0, 4]);
        assert_eq!(
            state.try_jump_to(3),
            Err(MoveError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(state.clone().jump_to(3), state);
    }

    #[test]
    fn test_update_dispatches_events() {
        let state = GameState::new()
            .update(GameEvent::CellClicked(Position::Center))
            .update(GameEvent::SortToggled)
            .update(GameEvent::HistoryClicked(0));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step_number(), 0);
        assert!(!state.is_ascending());
    }

    #[test]
    fn test_move_list_descending_reverses_display_only() {
        let state = play(&[0, 4]).toggle_sort();
        let steps: Vec<usize> = state.move_list().iter().map(|e| *e.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(state.history()[0].position(), None);
        assert_eq!(state.history()[1].position(), Some(Position::TopLeft));
    }

    #[test]
    fn test_draw_status() {
        // X O X / X O O / O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.status_text(), "Draw");
    }

    #[test]
    fn test_deserialize_round_trips_valid_state() {
        let state = play(&[4, 0, 8]).jump_to(1);
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let result =
            serde_json::from_str::<GameState>(r#"{"history":[],"step_number":0,"ascending":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_step_past_end() {
        let mut value = serde_json::to_value(play(&[4])).expect("serialize");
        value["step_number"] = serde_json::json!(5);
        assert!(serde_json::from_value::<GameState>(value).is_err());
    }
}
