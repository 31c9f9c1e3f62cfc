use crate::slices::app_metadata::action::AppMetadataAction;
use crate::slices::app_metadata::state::AppMetadataState;
use crate::store::mvi::Reducer;

pub struct AppMetadataReducer;

impl Reducer for AppMetadataReducer {
    type State = AppMetadataState;
    type Action = AppMetadataAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AppMetadataAction::SetLocale { locale } => AppMetadataState { locale, ..state },
            AppMetadataAction::SetEnvironment { environment } => {
                AppMetadataState {
                    environment,
                    ..state
                }
            }
            AppMetadataAction::ToggleFeature { feature, enabled } => {
                let mut features = state.features;
                features.set(feature, enabled);
                AppMetadataState { features, ..state }
            }
        }
    }
}
