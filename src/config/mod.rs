//! Client configuration loaded from TOML.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{AnalyticsConfig, ApiConfig, CacheConfig, Config};
