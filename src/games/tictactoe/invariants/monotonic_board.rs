//! Monotonic board invariant: every snapshot adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: The history grows one mark at a time.
///
/// The first snapshot is the empty board. Every later snapshot differs
/// from its predecessor in exactly one square, which was empty before and
/// is the position recorded for that move.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied_count() != 0 || first.position().is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            match (prev.changed_positions(next).as_slice(), pair[1].position()) {
                ([changed], Some(played)) => {
                    *changed == played
                        && prev.get(played) == Square::Empty
                        && next.get(played) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous board"
    }
}
