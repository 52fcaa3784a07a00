use crate::mvi::Intent;
use crate::state::model::{Quote, Quotelist, SearchCriteria, User};

/// Every state change the reducer accepts.
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the user. Always marks the session as checked.
    SetUser(Option<User>),
    SetSessionChecked(bool),
    SetQuote(Quote),
    /// Replace the quote cache wholesale.
    SetQuotes(Vec<Quote>),
    /// Append to the quote cache, keeping only the most recent entries.
    ExtendQuotes(Vec<Quote>),
    SetSearch(SearchCriteria),
    RemoveQuoteFromList { quotelist_id: u64, quote_id: u64 },
    RemoveQuotelist { quotelist_id: u64 },
    /// Requires a logged-in user.
    AddQuotelist(Quotelist),
    /// Buffer a UI event. `force_commit` flushes immediately, for events
    /// likely to be the last before the page goes away.
    AddAnalytic { action: String, force_commit: bool },
}

impl Intent for Action {}

impl Action {
    /// Analytics event subject to the normal flush policy.
    pub fn analytic(action: impl Into<String>) -> Self {
        Action::AddAnalytic {
            action: action.into(),
            force_commit: false,
        }
    }

    /// Analytics event that is flushed straight away.
    pub fn analytic_commit(action: impl Into<String>) -> Self {
        Action::AddAnalytic {
            action: action.into(),
            force_commit: true,
        }
    }

    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetUser(_) => "set_user",
            Action::SetSessionChecked(_) => "set_session_checked",
            Action::SetQuote(_) => "set_quote",
            Action::SetQuotes(_) => "set_quotes",
            Action::ExtendQuotes(_) => "extend_quotes",
            Action::SetSearch(_) => "set_search",
            Action::RemoveQuoteFromList { .. } => "remove_quote_from_list",
            Action::RemoveQuotelist { .. } => "remove_quotelist",
            Action::AddQuotelist(_) => "add_quotelist",
            Action::AddAnalytic { .. } => "add_analytic",
        }
    }
}
