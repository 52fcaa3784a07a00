use std::fs;

use famous_quotes::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.analytics.commit_every_n_events, 10);
    assert_eq!(config.analytics.commit_every_n_seconds, 30);
    assert_eq!(config.cache.max_quotes, 100);
    assert_eq!(config.cache.max_quote_id, 2400);
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"[api]
base_url = "https://famous-quotes.uk/api"

[analytics]
commit_every_n_events = 25
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://famous-quotes.uk/api");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.analytics.commit_every_n_events, 25);
    assert_eq!(config.analytics.commit_every_n_seconds, 30);
    assert_eq!(config.cache.max_quotes, 100);
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn non_http_base_url_is_rejected() {
    let (_dir, path) = write_config("[api]\nbase_url = \"ftp://example.com\"\n");
    let err = Config::resolve(&path, None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp://example.com"));
}

#[test]
fn zero_thresholds_are_rejected() {
    let (_dir, path) = write_config("[analytics]\ncommit_every_n_events = 0\n");
    assert!(matches!(
        Config::resolve(&path, None, None),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = write_config("[cache]\nmax_quotes = 0\n");
    assert!(matches!(
        Config::resolve(&path, None, None),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn load_from_does_not_validate() {
    let (_dir, path) = write_config("[api]\nbase_url = \"localhost:8000/api\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "localhost:8000/api");
    assert!(config.validate().is_err());
}

#[test]
fn env_url_repairs_invalid_file_url() {
    let (_dir, path) = write_config("[api]\nbase_url = \"localhost:8000/api\"\n");
    let config =
        Config::resolve(&path, Some("https://staging.example/api".to_string()), None).unwrap();
    assert_eq!(config.api.base_url, "https://staging.example/api");
}

#[test]
fn cli_url_wins_over_env_url() {
    let (_dir, path) = write_config("[api]\nbase_url = \"https://famous-quotes.uk/api\"\n");
    let config = Config::resolve(
        &path,
        Some("https://staging.example/api".to_string()),
        Some("http://127.0.0.1:9000/api".to_string()),
    )
    .unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
}

#[test]
fn invalid_override_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = Config::resolve(
        &dir.path().join("absent.toml"),
        Some("staging.example/api".to_string()),
        None,
    )
    .unwrap_err();
    assert!(err.to_string().contains("staging.example/api"));
}

#[test]
fn env_override_replaces_base_url() {
    let mut config = Config::default();
    config.apply_env_overrides(Some("https://staging.example/api".to_string()));
    assert_eq!(config.api.base_url, "https://staging.example/api");

    config.apply_env_overrides(Some("  ".to_string()));
    assert_eq!(config.api.base_url, "https://staging.example/api");

    config.apply_env_overrides(None);
    assert_eq!(config.api.base_url, "https://staging.example/api");
}

#[test]
fn config_path_is_under_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("famous-quotes/config.toml"));
}
