use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::store::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    BetaWidgets,
    Analytics,
    DebugMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub enable_beta_widgets: bool,
    #[serde(default)]
    pub enable_analytics: bool,
    #[serde(default)]
    pub debug_mode: bool,
}

impl FeatureFlags {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::BetaWidgets => self.enable_beta_widgets,
            Feature::Analytics => self.enable_analytics,
            Feature::DebugMode => self.debug_mode,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::BetaWidgets => self.enable_beta_widgets = enabled,
            Feature::Analytics => self.enable_analytics = enabled,
            Feature::DebugMode => self.debug_mode = enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppMetadataState {
    pub environment: Environment,
    pub api_endpoint: String,
    pub locale: String,
    pub timezone: String,
    pub features: FeatureFlags,
    pub app_version: String,
    /// Epoch milliseconds at which this state was built.
    pub build_timestamp: i64,
}

impl AppMetadataState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            environment: config.app.environment,
            api_endpoint: config.api.graphql_endpoint.clone(),
            locale: config.app.locale.clone(),
            timezone: config.app.timezone.clone(),
            features: config.features,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            build_timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl Default for AppMetadataState {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api_endpoint: "http://localhost:3000".to_string(),
            locale: "en".to_string(),
            timezone: "UTC".to_string(),
            features: FeatureFlags::default(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            build_timestamp: 0,
        }
    }
}

impl SliceState for AppMetadataState {}
