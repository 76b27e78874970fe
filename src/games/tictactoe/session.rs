//! Event dispatch with explicit redraw notifications.
//!
//! A [`Session`] owns the one live [`GameState`] of a running game. Render
//! surfaces subscribe to it and are called back with the new state after
//! every event that changed something; rejected clicks notify nobody.

use super::action::GameEvent;
use super::state::GameState;
use tracing::{debug, instrument};

/// Callback invoked with the new state after a change.
pub type Subscriber = Box<dyn FnMut(&GameState)>;

/// The live game plus its subscribers.
pub struct Session {
    state: GameState,
    subscribers: Vec<Subscriber>,
}

impl Session {
    /// Starts a session from `state`.
    #[instrument(skip(state))]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a callback for state changes.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GameState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `event`, notifying subscribers if the state changed.
    ///
    /// Returns whether the state changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: GameEvent) -> bool {
        let next = self.state.clone().update(event);
        self.replace(next)
    }

    /// Replaces the game with a fresh one, keeping the display order.
    ///
    /// Returns whether the state changed; restarting an untouched game
    /// notifies nobody.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> bool {
        let fresh = GameState::with_order(self.state.is_ascending());
        self.replace(fresh)
    }

    fn replace(&mut self, next: GameState) -> bool {
        if next == self.state {
            debug!("State unchanged");
            return false;
        }

        self.state = next;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        true
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}
