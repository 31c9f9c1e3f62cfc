use crate::slices::app_metadata::state::{Environment, Feature, FeatureFlags};
use crate::store::AppState;

pub fn select_environment(state: &AppState) -> Environment {
    state.app_metadata.environment
}

pub fn select_locale(state: &AppState) -> &str {
    &state.app_metadata.locale
}

pub fn select_feature_flags(state: &AppState) -> FeatureFlags {
    state.app_metadata.features
}

pub fn select_feature_flag(state: &AppState, feature: Feature) -> bool {
    state.app_metadata.features.get(feature)
}
