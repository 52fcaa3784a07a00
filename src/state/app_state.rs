use crate::mvi::StoreState;
use crate::state::model::{AnalyticsEvent, Quote, SearchCriteria, User};

/// Upper bound for random-quote features.
pub const DEFAULT_MAX_QUOTE_ID: u64 = 2400;

/// The single state value a [`Store`](crate::store::Store) owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationState {
    pub user: Option<User>,
    /// Currently focused quote.
    pub quote: Quote,
    /// Recently seen quotes, oldest first.
    pub quotes: Vec<Quote>,
    /// Events not yet flushed.
    pub analytics: Vec<AnalyticsEvent>,
    pub max_quote_id: u64,
    pub search: SearchCriteria,
    /// `false` together with `user == None` means the session probe is
    /// still pending.
    pub session_checked: bool,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            user: None,
            quote: Quote::default(),
            quotes: Vec::new(),
            analytics: Vec::new(),
            max_quote_id: DEFAULT_MAX_QUOTE_ID,
            search: SearchCriteria::default(),
            session_checked: false,
        }
    }
}

impl StoreState for ApplicationState {}

impl ApplicationState {
    /// Whether identity is known: either a user is present or the probe
    /// completed without one.
    pub fn identity_known(&self) -> bool {
        self.user.is_some() || self.session_checked
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|user| user.id)
    }
}
