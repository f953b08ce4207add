//! Refresh state and transition table
//!
//! The footer moves between three states. Pull progress while idle is reported
//! on a separate channel, so there is no distinct "about to trigger" state.
//!
//! ```text
//!            BEGIN                 END
//!   Idle ────────────▶ Refreshing ─────▶ Idle
//!                          │
//!                          │ END_NO_MORE_DATA
//!                          ▼
//!   Idle ◀──────────── NoMoreData ──BEGIN──▶ Refreshing
//!            RESET
//! ```

use std::hash::Hash;

use crate::events::{refresh_events, EventId};

/// Trait for state types that map events to transitions
///
/// Returning `None` means the event does not apply in the current state.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventId) -> Option<Self>;
}

/// Footer refresh state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefreshState {
    /// Waiting for the user to pull past the threshold
    #[default]
    Idle,
    /// Loading more content
    Refreshing,
    /// Data source exhausted; pulls no longer trigger until reset
    NoMoreData,
}

impl RefreshState {
    /// Returns true while a load is in flight
    pub fn is_refreshing(&self) -> bool {
        matches!(self, RefreshState::Refreshing)
    }

    /// Returns true if a pull past the threshold may start a refresh
    pub fn accepts_trigger(&self) -> bool {
        matches!(self, RefreshState::Idle)
    }
}

impl StateTransitions for RefreshState {
    fn on_event(&self, event: EventId) -> Option<Self> {
        use refresh_events::*;
        match (self, event) {
            (RefreshState::Idle, BEGIN) => Some(RefreshState::Refreshing),
            (RefreshState::NoMoreData, BEGIN) => Some(RefreshState::Refreshing),
            (RefreshState::Refreshing, END) => Some(RefreshState::Idle),
            (RefreshState::Refreshing, END_NO_MORE_DATA) => Some(RefreshState::NoMoreData),
            (RefreshState::NoMoreData, RESET) => Some(RefreshState::Idle),
            _ => None,
        }
    }
}
