//! History consistency invariant: step pointer and move counts agree.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: The history is a consistent record of one game.
///
/// - The active step indexes an existing snapshot
/// - Snapshot `k` holds exactly `k` marks
/// - No snapshot follows a board with a completed line
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if state.step_number() >= history.len() {
            return false;
        }

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(step, record)| record.board().occupied_count() == step);

        let nothing_after_win = history
            .iter()
            .rev()
            .skip(1)
            .all(|record| rules::evaluate(record.board()).is_none());

        counts_match && nothing_after_win
    }

    fn description() -> &'static str {
        "Active step is in range, snapshot k holds k marks, no move follows a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{MoveRecord, Player, Position};

    fn won_game() -> GameState {
        [0, 3, 1, 4, 2]
            .into_iter()
            .filter_map(Position::from_index)
            .fold(GameState::new(), GameState::apply_move)
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_won_game_holds() {
        let state = won_game();
        assert_eq!(state.history().len(), 6);
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_step_out_of_range_violates() {
        let mut state = won_game();
        state.step_number = 6;
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut state = won_game();
        let board = state.history[5]
            .board()
            .with_mark(Position::BottomRight, Player::O);
        state.history.push(MoveRecord::played(board, Position::BottomRight));
        state.step_number = 6;
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
