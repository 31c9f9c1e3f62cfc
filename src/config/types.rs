use serde::{Deserialize, Serialize};

use crate::graphql::FetchPolicy;
use crate::slices::app_metadata::{Environment, FeatureFlags};
use crate::slices::notifications::{ToastPosition, DEFAULT_MAX_VISIBLE};
use crate::slices::theme::ThemePreference;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

/// GraphQL client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint URL (e.g., "http://127.0.0.1:4000/graphql").
    #[serde(default = "default_graphql_endpoint")]
    pub graphql_endpoint: String,
    /// Sent as `x-api-key` when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-attempt request timeout in milliseconds (default: 30000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Retries after the first attempt for transport failures (default: 3).
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Base delay before the first retry in milliseconds (default: 1000).
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Keep query results in memory (default: true).
    #[serde(default = "default_true")]
    pub enable_cache: bool,
    #[serde(default)]
    pub fetch_policy: FetchPolicy,
}

/// Presentation defaults seeded into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial theme preference until a stored one is restored.
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default = "default_max_visible_toasts")]
    pub max_visible_toasts: usize,
    #[serde(default)]
    pub toast_position: ToastPosition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

/// Mock GraphQL backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Bind address (host:port) for `widget-store serve`.
    #[serde(default = "default_mock_bind_addr")]
    pub bind_addr: String,
    /// Artificial latency added to every GraphQL response.
    #[serde(default)]
    pub latency_ms: u64,
    /// When set, requests without a matching `x-api-key` get HTTP 401.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_graphql_endpoint() -> String {
    "http://127.0.0.1:4000/graphql".to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_max_visible_toasts() -> usize {
    DEFAULT_MAX_VISIBLE
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_mock_bind_addr() -> String {
    "127.0.0.1:4000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: default_graphql_endpoint(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            enable_cache: true,
            fetch_policy: FetchPolicy::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            max_visible_toasts: default_max_visible_toasts(),
            toast_position: ToastPosition::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            locale: default_locale(),
            timezone: default_timezone(),
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_mock_bind_addr(),
            latency_ms: 0,
            api_key: None,
        }
    }
}
