//! The store: one [`ApplicationState`], one reducer, many subscribers.
//!
//! A `Store` is an explicit context object. Clone it into whatever needs
//! to read or dispatch; clones share the same state.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::analytics::{AnalyticsPolicy, HttpAnalyticsTransport};
use crate::config::Config;
use crate::mvi::Reducer;
use crate::state::{Action, ApplicationState, GlobalReducer};

#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: Mutex<ApplicationState>,
    reducer: GlobalReducer,
    updates: watch::Sender<ApplicationState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(GlobalReducer::default())
    }
}

impl Store {
    /// Store starting from the default state.
    pub fn new(reducer: GlobalReducer) -> Self {
        Self::with_state(reducer, ApplicationState::default())
    }

    pub fn with_state(reducer: GlobalReducer, initial: ApplicationState) -> Self {
        let (updates, _) = watch::channel(initial.clone());
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(initial),
                reducer,
                updates,
            }),
        }
    }

    /// Store wired to the backend: analytics are posted through `transport`
    /// and thresholds come from `config`. Keep a clone of `transport` to
    /// wait for pending posts before shutdown.
    pub fn connected(config: &Config, transport: HttpAnalyticsTransport) -> Self {
        let reducer = GlobalReducer::new(Arc::new(transport))
            .with_policy(AnalyticsPolicy::from(&config.analytics))
            .with_max_cached_quotes(config.cache.max_quotes);
        let initial = ApplicationState {
            max_quote_id: config.cache.max_quote_id,
            ..ApplicationState::default()
        };
        Self::with_state(reducer, initial)
    }

    /// Apply `action` and publish the result.
    ///
    /// Dispatches are applied one at a time, in call order.
    pub fn dispatch(&self, action: Action) {
        let kind = action.kind();
        let mut state = self.inner.state.lock();
        let next = self.inner.reducer.reduce(std::mem::take(&mut *state), action);
        *state = next;
        self.inner.updates.send_replace(state.clone());
        tracing::debug!(action = kind, "Dispatched");
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ApplicationState {
        self.inner.state.lock().clone()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&ApplicationState) -> R) -> R {
        f(&self.inner.state.lock())
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<ApplicationState> {
        self.inner.updates.subscribe()
    }
}
