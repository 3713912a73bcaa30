//! Tests for loading the TOML configuration.

use std::io::Write;
use tempfile::NamedTempFile;
use timetravel_games::TuiConfig;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "log_file = \"game.log\"\nlog_filter = \"warn\"\ntick_rate_ms = 100")
        .expect("Failed to write config");

    let config = TuiConfig::from_file(file.path()).expect("Config should load");
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(config.tick_rate(), std::time::Duration::from_millis(100));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_from_file_reports_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "tick_rate_ms = [").expect("Failed to write config");
    assert!(TuiConfig::load_or_default(file.path()).is_err());
}
