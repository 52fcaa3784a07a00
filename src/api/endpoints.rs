//! Endpoint paths, relative to the configured API base URL.

pub const LOGIN: &str = "/login/";
pub const LOGOUT: &str = "/logout/";
pub const SESSION: &str = "/validate/";
pub const USERS: &str = "/users/";
pub const QUOTES: &str = "/quotes/";
pub const QUOTE_LIST: &str = "/quote-list/";
pub const VOTES: &str = "/votes/";
pub const REPORT: &str = "/quotes/report/";
pub const CATEGORIES: &str = "/categories/";
pub const QOTD: &str = "/quotes/qotd/";
pub const FORGOT_PASSWORD: &str = "/forgot-password/";
pub const PASSWORD_RESET: &str = "/reset-password/";
pub const COMMENTS: &str = "/comments/";
pub const HOME: &str = "/home/";
pub const ANALYTICS: &str = "/analytics/";

/// User summary path: profile plus quotes, quotelists, votes, and comments.
pub fn user_summary(user_id: u64) -> String {
    format!("{USERS}?id={user_id}&s=1")
}
