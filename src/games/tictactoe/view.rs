//! Render-ready projection of a game state.
//!
//! A [`GameView`] carries everything a render surface draws for one frame:
//! the active board, the completed line, the status line and the move list
//! in display order. Surfaces never read [`GameState`] internals directly.

use super::history::MoveEntry;
use super::rules::WinningLine;
use super::state::GameState;
use super::types::{GameStatus, Player, Square};
use super::Position;
use serde::Serialize;

/// One frame's worth of game data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Active board, row-major; `None` for empty squares.
    pub cells: [Option<Player>; 9],
    /// Status of the active board.
    pub status: GameStatus,
    /// Status line ("Winner: X", "Next player: O", "Draw").
    pub status_text: String,
    /// Player to move next.
    pub next_player: Player,
    /// Board indices of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Active history step.
    pub step_number: usize,
    /// Move-list order.
    pub ascending: bool,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Whether `pos` belongs to the completed line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos.to_index()))
    }

    /// Label of the sort toggle.
    pub fn sort_label(&self) -> &'static str {
        if self.ascending { "Ascending" } else { "Descending" }
    }

    /// Plain-text rendering: board, status and move list.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| {
                    let i = row * 3 + col;
                    match self.cells[i] {
                        Some(player) if self.winning_line.is_some_and(|l| l.contains(&i)) => {
                            format!("[{}]", player)
                        }
                        Some(player) => format!(" {} ", player),
                        None => " . ".to_string(),
                    }
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status_text);
        out.push('\n');
        out.push_str(&format!("Moves ({}):\n", self.sort_label()));
        for entry in &self.moves {
            let marker = if *entry.is_current() { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label()));
        }
        out
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        let board = state.active_board();
        Self {
            cells: (*board.squares()).map(Square::player),
            status: state.status(),
            status_text: state.status_text(),
            next_player: state.next_player(),
            winning_line: state.current_winner().as_ref().map(WinningLine::indices),
            step_number: state.step_number(),
            ascending: state.is_ascending(),
            moves: state.move_list(),
        }
    }
}
