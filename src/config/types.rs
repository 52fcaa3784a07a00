use serde::{Deserialize, Serialize};

use crate::analytics::{DEFAULT_MAX_AGE, DEFAULT_MAX_EVENTS};
use crate::state::{DEFAULT_MAX_CACHED_QUOTES, DEFAULT_MAX_QUOTE_ID};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Backend API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are appended to (e.g., "https://famous-quotes.uk/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Analytics flush thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Flush once this many events are buffered (default: 10).
    #[serde(default = "default_commit_events")]
    pub commit_every_n_events: usize,
    /// Flush once the oldest buffered event is this many seconds old (default: 30).
    #[serde(default = "default_commit_seconds")]
    pub commit_every_n_seconds: u64,
}

/// In-memory cache limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Quotes kept in the recent-quotes cache (default: 100).
    #[serde(default = "default_max_quotes")]
    pub max_quotes: usize,
    /// Highest quote id, used for random quote picks (default: 2400).
    #[serde(default = "default_max_quote_id")]
    pub max_quote_id: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_commit_events() -> usize {
    DEFAULT_MAX_EVENTS
}

fn default_commit_seconds() -> u64 {
    DEFAULT_MAX_AGE.as_secs()
}

fn default_max_quotes() -> usize {
    DEFAULT_MAX_CACHED_QUOTES
}

fn default_max_quote_id() -> u64 {
    DEFAULT_MAX_QUOTE_ID
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            commit_every_n_events: default_commit_events(),
            commit_every_n_seconds: default_commit_seconds(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_quotes: default_max_quotes(),
            max_quote_id: default_max_quote_id(),
        }
    }
}
