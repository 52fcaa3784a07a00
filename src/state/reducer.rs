use std::sync::Arc;

use crate::analytics::{
    AnalyticsBatch, AnalyticsPolicy, AnalyticsTransport, Clock, NoopTransport, SystemClock,
};
use crate::mvi::Reducer;
use crate::state::action::Action;
use crate::state::app_state::ApplicationState;
use crate::state::model::{AnalyticsEvent, Quote, Quotelist};
use crate::util::format_event_datetime;

/// Capacity of the in-memory quote cache.
pub const DEFAULT_MAX_CACHED_QUOTES: usize = 100;

/// Reducer for [`ApplicationState`].
///
/// Every transition is synchronous. The one side effect is handing a
/// flushed analytics batch to the transport, which must not block.
pub struct GlobalReducer {
    policy: AnalyticsPolicy,
    max_cached_quotes: usize,
    clock: Arc<dyn Clock>,
    transport: Arc<dyn AnalyticsTransport>,
}

impl Default for GlobalReducer {
    fn default() -> Self {
        Self::new(Arc::new(NoopTransport))
    }
}

impl GlobalReducer {
    pub fn new(transport: Arc<dyn AnalyticsTransport>) -> Self {
        Self {
            policy: AnalyticsPolicy::default(),
            max_cached_quotes: DEFAULT_MAX_CACHED_QUOTES,
            clock: Arc::new(SystemClock),
            transport,
        }
    }

    pub fn with_policy(mut self, policy: AnalyticsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_max_cached_quotes(mut self, max: usize) -> Self {
        self.max_cached_quotes = max;
        self
    }

    fn extend_quotes(&self, mut state: ApplicationState, quotes: Vec<Quote>) -> ApplicationState {
        state.quotes.extend(quotes);
        let len = state.quotes.len();
        if len > self.max_cached_quotes {
            state.quotes.drain(..len - self.max_cached_quotes);
        }
        state
    }

    fn add_quotelist(&self, mut state: ApplicationState, quotelist: Quotelist) -> ApplicationState {
        match state.user.as_mut() {
            Some(user) => {
                user.quotelists.get_or_insert_with(Vec::new).push(quotelist);
            }
            None => {
                tracing::warn!(
                    quotelist_id = quotelist.id,
                    "Quotelist added without a logged-in user; ignored"
                );
            }
        }
        state
    }

    fn add_analytic(
        &self,
        mut state: ApplicationState,
        action: String,
        force_commit: bool,
    ) -> ApplicationState {
        if action.is_empty() {
            return state;
        }

        let now = self.clock.now();
        state.analytics.push(AnalyticsEvent {
            datetime: format_event_datetime(now),
            action,
        });

        if force_commit || self.policy.should_flush(&state.analytics, now) {
            let batch = AnalyticsBatch {
                user: state.user_id(),
                data: std::mem::take(&mut state.analytics),
            };
            tracing::debug!(events = batch.data.len(), force_commit, "Flushing analytics");
            self.transport.send(batch);
        }
        state
    }
}

fn quotelists_mut(state: &mut ApplicationState) -> Option<&mut Vec<Quotelist>> {
    state.user.as_mut().and_then(|user| user.quotelists.as_mut())
}

impl Reducer for GlobalReducer {
    type State = ApplicationState;
    type Intent = Action;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            Action::SetUser(user) => ApplicationState {
                user,
                session_checked: true,
                ..state
            },
            Action::SetSessionChecked(session_checked) => ApplicationState {
                session_checked,
                ..state
            },
            Action::SetQuote(quote) => ApplicationState { quote, ..state },
            Action::SetQuotes(quotes) => ApplicationState { quotes, ..state },
            Action::ExtendQuotes(quotes) => self.extend_quotes(state, quotes),
            Action::SetSearch(search) => ApplicationState { search, ..state },
            Action::RemoveQuoteFromList {
                quotelist_id,
                quote_id,
            } => {
                let mut state = state;
                if let Some(list) = quotelists_mut(&mut state)
                    .and_then(|lists| lists.iter_mut().find(|list| list.id == quotelist_id))
                {
                    list.quotes.retain(|quote| quote.id != quote_id);
                }
                state
            }
            Action::RemoveQuotelist { quotelist_id } => {
                let mut state = state;
                if let Some(lists) = quotelists_mut(&mut state) {
                    lists.retain(|list| list.id != quotelist_id);
                }
                state
            }
            Action::AddQuotelist(quotelist) => self.add_quotelist(state, quotelist),
            Action::AddAnalytic {
                action,
                force_commit,
            } => self.add_analytic(state, action, force_commit),
        }
    }
}
