//! Reducer trait.

use super::intent::Intent;
use super::state::StoreState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// Reducers that need collaborators (a clock, a transport) hold them
/// as fields, which is why `reduce` borrows `self`.
pub trait Reducer: Send + Sync {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State;
}
