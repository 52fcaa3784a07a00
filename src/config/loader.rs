use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "FAMOUS_QUOTES_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/famous-quotes/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("famous-quotes").join("config.toml")
    }

    /// Loads configuration from the default config file, applies the
    /// `FAMOUS_QUOTES_API_URL` override, and validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::resolve(&Self::config_path(), std::env::var(API_URL_ENV).ok(), None)
    }

    /// Loads `path`, then applies `env_api_url` and `cli_api_url` in that
    /// order (later wins), then validates the result once.
    pub fn resolve(
        path: &Path,
        env_api_url: Option<String>,
        cli_api_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides(env_api_url);
        config.apply_env_overrides(cli_api_url);
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from `path` without validating it.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Replace the API base URL when an override is given and non-empty.
    pub fn apply_env_overrides(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is http(s)
    /// - Analytics thresholds and cache size are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("API base URL '{}' must start with http:// or https://", base_url),
            });
        }

        if self.analytics.commit_every_n_events == 0 {
            return Err(ConfigError::ValidationError {
                message: "analytics.commit_every_n_events must be at least 1".to_string(),
            });
        }

        if self.analytics.commit_every_n_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "analytics.commit_every_n_seconds must be at least 1".to_string(),
            });
        }

        if self.cache.max_quotes == 0 {
            return Err(ConfigError::ValidationError {
                message: "cache.max_quotes must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
