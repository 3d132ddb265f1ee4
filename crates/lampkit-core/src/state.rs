//! Elm-style state management: `State + Message → State`.
//!
//! # Examples
//!
//! ```
//! use lampkit_core::{State, Update};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Switch {
//!     on: bool,
//! }
//!
//! enum SwitchMessage {
//!     Flip,
//! }
//!
//! impl State for Switch {
//!     type Message = SwitchMessage;
//!
//!     fn update(&mut self, msg: Self::Message) -> Update {
//!         match msg {
//!             SwitchMessage::Flip => self.on = !self.on,
//!         }
//!         Update::Changed
//!     }
//! }
//!
//! let mut state = Switch::default();
//! state.update(SwitchMessage::Flip);
//! assert!(state.on);
//! ```

use serde::{Deserialize, Serialize};

/// Application state trait.
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    fn update(&mut self, msg: Self::Message) -> Update;
}

/// Outcome of [`State::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Message was a no-op
    Unchanged,
    /// State changed; dependents must re-render
    Changed,
}

impl Update {
    /// Whether the state changed.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }

    /// `Changed` when `changed` is true.
    #[must_use]
    pub const fn from_changed(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

/// Type alias for state change subscribers.
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Owns a [`State`] and notifies subscribers after every change.
pub struct Store<S: State> {
    state: S,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: State> Store<S> {
    /// Create a new store with initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Get current state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch a message. Subscribers only hear about real changes.
    pub fn dispatch(&mut self, msg: S::Message) -> Update {
        let update = self.state.update(msg);
        if update.is_changed() {
            for subscriber in &self.subscribers {
                subscriber(&self.state);
            }
        }
        update
    }

    /// Subscribe to state changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }
}

impl<S: State + std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
