use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Requests shorter than this cannot complete a round trip.
const MIN_TIMEOUT_MS: u64 = 100;

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
    /// Uses `~/.config/widget-store/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("widget-store").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
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

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The GraphQL endpoint is a non-empty http(s) URL
    /// - The request timeout is at least 100ms
    /// - At least one toast can be visible
    /// - The mock bind address is a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.api.graphql_endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "graphql_endpoint is required".to_string(),
            });
        }

        match reqwest::Url::parse(endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigError::ValidationError {
                    message: format!("Invalid graphql_endpoint URL: {}", endpoint),
                });
            }
        }

        if self.api.timeout_ms < MIN_TIMEOUT_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "timeout_ms must be at least {}ms, got {}",
                    MIN_TIMEOUT_MS, self.api.timeout_ms
                ),
            });
        }

        if self.ui.max_visible_toasts == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_visible_toasts must be at least 1".to_string(),
            });
        }

        if self.mock.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid mock bind_addr: {}", self.mock.bind_addr),
            });
        }

        Ok(())
    }
}
