//! Configuration loading and backend URL resolution
//!
//! The backend base URL is the only setting the client strictly needs.
//! It is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`ADVISOR_API_URL`)
//! 3. TOML config file (`api_url` key)
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Compiled default backend location
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend location
pub const API_URL_ENV: &str = "ADVISOR_API_URL";

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "advisor-finder";

/// Configuration loaded from the optional TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Backend base URL
    #[serde(default)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds. Absent means requests wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Load config from an explicit path, or from the platform default location
    ///
    /// An explicit path must exist. A missing default file is not an error:
    /// a warning is logged and built-in defaults are used.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                warn!(
                    path = %path.display(),
                    "No config file found, using built-in defaults"
                );
                Ok(Self::default())
            }
            None => {
                warn!("Could not determine config directory, using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Default config file path for the platform
///
/// e.g. `~/.config/advisor-finder/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.toml"))
}

/// Backend URL resolution following the priority order in the module docs
#[derive(Debug, Clone, Default)]
pub struct ApiUrlResolver {
    cli_arg: Option<String>,
    config_value: Option<String>,
}

impl ApiUrlResolver {
    pub fn new(cli_arg: Option<&str>, config: &TomlConfig) -> Self {
        Self {
            cli_arg: cli_arg.map(str::to_string),
            config_value: config.api_url.clone(),
        }
    }

    /// Resolve and normalize the backend base URL
    pub fn resolve(&self) -> Result<String> {
        // Priority 1: Command-line argument
        if let Some(url) = non_empty(self.cli_arg.as_deref()) {
            return normalize_api_url(url);
        }

        // Priority 2: Environment variable
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if let Some(url) = non_empty(Some(&url)) {
                return normalize_api_url(url);
            }
        }

        // Priority 3: TOML config file
        if let Some(url) = non_empty(self.config_value.as_deref()) {
            return normalize_api_url(url);
        }

        // Priority 4: Compiled default
        normalize_api_url(DEFAULT_API_URL)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate the scheme and strip trailing slashes
pub fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Config(format!(
            "API URL must start with http:// or https://: {}",
            trimmed
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Fully resolved client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub request_timeout: Option<Duration>,
    pub log_level: String,
}

impl ClientConfig {
    /// Resolve the client configuration from CLI overrides, env and TOML
    pub fn resolve(
        cli_api_url: Option<&str>,
        config_path: Option<&Path>,
        cli_log_level: Option<&str>,
    ) -> Result<Self> {
        let toml_config = TomlConfig::load_or_default(config_path)?;
        let api_url = ApiUrlResolver::new(cli_api_url, &toml_config).resolve()?;

        Ok(Self {
            api_url,
            request_timeout: toml_config.request_timeout_secs.map(Duration::from_secs),
            log_level: cli_log_level
                .map(str::to_string)
                .unwrap_or(toml_config.logging.level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_api_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_api_url("  https://advisors.example.edu//  ").unwrap(),
            "https://advisors.example.edu"
        );
    }

    #[test]
    fn test_normalize_rejects_missing_scheme() {
        let err = normalize_api_url("localhost:8000").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_defaults() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert!(config.api_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_full() {
        let config: TomlConfig = toml::from_str(
            r#"
            api_url = "https://advisors.example.edu"
            request_timeout_secs = 45

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://advisors.example.edu"));
        assert_eq!(config.request_timeout_secs, Some(45));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_cli_arg_wins_over_config() {
        let config = TomlConfig {
            api_url: Some("http://from-config:9000".to_string()),
            ..Default::default()
        };
        let resolver = ApiUrlResolver::new(Some("http://from-cli:7000/"), &config);
        assert_eq!(resolver.resolve().unwrap(), "http://from-cli:7000");
    }
}
