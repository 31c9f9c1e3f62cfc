//! TOML configuration for the store, its GraphQL client and the mock backend.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, AppConfig, Config, LogLevel, LoggingConfig, MockConfig, UiConfig};
