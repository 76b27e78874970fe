//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark placed to reach snapshot `k` belongs to X when `k` is odd
/// and to O when `k` is even. First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, record)| match record.position() {
                Some(pos) => {
                    record.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
