//! Records the client stores and mutates.
//!
//! Shapes follow the backend's JSON payloads so they can be deserialized
//! straight from API responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A category tag attached to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub category: String,
}

/// A quote as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    /// The quote text.
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub total_upvotes: i64,
    #[serde(default)]
    pub total_downvotes: i64,
    #[serde(default)]
    pub net_votes: i64,
    /// Derived by the backend; 0.5 for an unvoted quote.
    #[serde(default = "default_popularity")]
    pub popularity: f64,
}

fn default_popularity() -> f64 {
    0.5
}

impl Quote {
    /// Minimal quote with no votes or categories.
    pub fn new(id: u64, quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            quote: quote.into(),
            author: author.into(),
            context: None,
            categories: Vec::new(),
            total_upvotes: 0,
            total_downvotes: 0,
            net_votes: 0,
            popularity: default_popularity(),
        }
    }
}

impl Default for Quote {
    /// The quote pre-loaded so views never render an empty focus.
    fn default() -> Self {
        Self::new(
            79,
            "The best time to plant a tree was 20 years ago. The second best time is today.",
            "Chinese proverb",
        )
    }
}

/// A user-owned named collection of quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotelist {
    pub id: u64,
    pub name: String,
    /// Public share identifier.
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

/// The authenticated user and the collections the backend returns with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Quotes the user submitted.
    #[serde(default)]
    pub quotes: Vec<Quote>,
    /// `None` when the payload carried no quotelists at all.
    #[serde(default)]
    pub quotelists: Option<Vec<Quotelist>>,
    /// Backend-owned, cached verbatim.
    #[serde(default)]
    pub votes: Vec<Value>,
    /// Backend-owned, cached verbatim.
    #[serde(default)]
    pub comments: Vec<Value>,
}

impl User {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            username: None,
            quotes: Vec::new(),
            quotelists: None,
            votes: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Sort orders understood by the quotes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "-popularity")]
    MostPopular,
    #[serde(rename = "popularity")]
    LeastPopular,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "-total_upvotes")]
    MostUpvoted,
    #[serde(rename = "-total_downvotes")]
    MostDownvoted,
    #[serde(rename = "random")]
    Random,
}

/// Last-used search filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
}

/// One buffered UI event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// UTC, `YYYY-MM-DD HH:MM:SS`.
    pub datetime: String,
    pub action: String,
}
