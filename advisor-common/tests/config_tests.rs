//! Tests for configuration loading and backend URL resolution
//!
//! Covers:
//! - Priority order: CLI argument > ADVISOR_API_URL > TOML > compiled default
//! - Missing/malformed config file handling
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate ADVISOR_API_URL are marked with #[serial].

use advisor_common::config::{
    ApiUrlResolver, ClientConfig, TomlConfig, API_URL_ENV, DEFAULT_API_URL,
};
use advisor_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::time::Duration;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(API_URL_ENV);

    let resolver = ApiUrlResolver::new(None, &TomlConfig::default());
    assert_eq!(resolver.resolve().unwrap(), DEFAULT_API_URL);
}

#[test]
#[serial]
fn test_resolver_env_var_beats_config() {
    env::set_var(API_URL_ENV, "http://env-host:8100/");

    let config = TomlConfig {
        api_url: Some("http://config-host:8200".to_string()),
        ..Default::default()
    };
    let resolver = ApiUrlResolver::new(None, &config);
    assert_eq!(resolver.resolve().unwrap(), "http://env-host:8100");

    env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_resolver_cli_beats_env() {
    env::set_var(API_URL_ENV, "http://env-host:8100");

    let resolver = ApiUrlResolver::new(Some("https://cli-host"), &TomlConfig::default());
    assert_eq!(resolver.resolve().unwrap(), "https://cli-host");

    env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_resolver_blank_env_falls_through() {
    env::set_var(API_URL_ENV, "   ");

    let config = TomlConfig {
        api_url: Some("http://config-host:8200".to_string()),
        ..Default::default()
    };
    let resolver = ApiUrlResolver::new(None, &config);
    assert_eq!(resolver.resolve().unwrap(), "http://config-host:8200");

    env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_resolver_rejects_bad_env_url() {
    env::set_var(API_URL_ENV, "ftp://nope");

    let resolver = ApiUrlResolver::new(None, &TomlConfig::default());
    assert!(matches!(resolver.resolve(), Err(Error::Config(_))));

    env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_client_config_from_explicit_file() {
    env::remove_var(API_URL_ENV);

    let file = write_config(
        r#"
        api_url = "https://advisors.example.edu/"
        request_timeout_secs = 20

        [logging]
        level = "warn"
        "#,
    );

    let config = ClientConfig::resolve(None, Some(file.path()), None).unwrap();
    assert_eq!(config.api_url, "https://advisors.example.edu");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(20)));
    assert_eq!(config.log_level, "warn");
}

#[test]
#[serial]
fn test_client_config_cli_log_level_override() {
    env::remove_var(API_URL_ENV);

    let file = write_config("[logging]\nlevel = \"warn\"\n");
    let config = ClientConfig::resolve(None, Some(file.path()), Some("trace")).unwrap();
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert!(config.request_timeout.is_none());
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = TomlConfig::load_or_default(Some(&missing));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_malformed_config_is_error() {
    let file = write_config("api_url = [not valid toml");
    let result = TomlConfig::load(file.path());
    assert!(matches!(result, Err(Error::Toml(_))));
}
