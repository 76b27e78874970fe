//! Application state and key handling.

use crossterm::event::KeyCode;
use timeline_tictactoe::{GameEvent, GameState, Position, Session};
use tracing::{debug, instrument};

use super::input::{cell_for_digit, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Leave the UI.
    Quit,
    /// Local view state changed; draw again.
    Redraw,
    /// Nothing visible changed.
    Ignored,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    /// Index into the displayed move list.
    selected: usize,
}

impl App {
    /// Creates a new application around `session`.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Mutable access to the session, for subscribing.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> KeyOutcome {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Char('r') => {
                debug!("Restarting game");
                self.session.restart();
                self.cursor = Position::Center;
                self.select_current();
                KeyOutcome::Redraw
            }
            KeyCode::Char('s') => {
                self.dispatch(GameEvent::SortToggled);
                KeyOutcome::Redraw
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.select_current();
                KeyOutcome::Redraw
            }
            KeyCode::Char(' ') if self.focus == Focus::Board => {
                self.dispatch(GameEvent::CellClicked(self.cursor));
                KeyOutcome::Redraw
            }
            KeyCode::Char(c) => match cell_for_digit(c) {
                Some(pos) => {
                    self.cursor = pos;
                    self.dispatch(GameEvent::CellClicked(pos));
                    KeyOutcome::Redraw
                }
                None => KeyOutcome::Ignored,
            },
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) -> KeyOutcome {
        match key {
            KeyCode::Enter => {
                self.dispatch(GameEvent::CellClicked(self.cursor));
                KeyOutcome::Redraw
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) -> KeyOutcome {
        let len = self.state().history().len();
        match key {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                KeyOutcome::Redraw
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(len - 1);
                KeyOutcome::Redraw
            }
            KeyCode::Enter => {
                let step = self
                    .state()
                    .move_list()
                    .get(self.selected)
                    .map(|entry| *entry.step());
                if let Some(step) = step {
                    self.dispatch(GameEvent::HistoryClicked(step));
                }
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        if self.session.dispatch(event) {
            self.select_current();
        }
    }

    /// Points the move-list selection at the active step.
    fn select_current(&mut self) {
        self.selected = self
            .state()
            .move_list()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}
