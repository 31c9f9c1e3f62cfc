use crate::slices::app_metadata::state::{Environment, Feature};
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMetadataAction {
    SetLocale { locale: String },
    SetEnvironment { environment: Environment },
    ToggleFeature { feature: Feature, enabled: bool },
}

impl Action for AppMetadataAction {
    fn name(&self) -> &'static str {
        match self {
            AppMetadataAction::SetLocale { .. } => "[App Metadata] Set Locale",
            AppMetadataAction::SetEnvironment { .. } => "[App Metadata] Set Environment",
            AppMetadataAction::ToggleFeature { .. } => "[App Metadata] Toggle Feature",
        }
    }
}
