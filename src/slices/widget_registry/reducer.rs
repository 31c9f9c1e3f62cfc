use crate::slices::widget_registry::action::WidgetRegistryAction;
use crate::slices::widget_registry::state::{WidgetInfo, WidgetRegistryState, WidgetStatus};
use crate::store::mvi::Reducer;

/// Every transition overwrites the whole entry for its id.
pub struct WidgetRegistryReducer;

impl Reducer for WidgetRegistryReducer {
    type State = WidgetRegistryState;
    type Action = WidgetRegistryAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        let mut widgets = state.widgets;
        match action {
            WidgetRegistryAction::RegisterWidget { id } => {
                widgets.insert(id.clone(), WidgetInfo::with_status(id, WidgetStatus::Idle));
            }
            WidgetRegistryAction::WidgetLoading { id } => {
                widgets.insert(id.clone(), WidgetInfo::with_status(id, WidgetStatus::Loading));
            }
            WidgetRegistryAction::WidgetLoaded { id, loaded_at } => {
                let info = WidgetInfo {
                    loaded_at: Some(loaded_at),
                    ..WidgetInfo::with_status(id.clone(), WidgetStatus::Ready)
                };
                widgets.insert(id, info);
            }
            WidgetRegistryAction::WidgetError { id, error_message } => {
                let info = WidgetInfo {
                    error_message: Some(error_message),
                    ..WidgetInfo::with_status(id.clone(), WidgetStatus::Error)
                };
                widgets.insert(id, info);
            }
            WidgetRegistryAction::UnregisterWidget { id } => {
                widgets.remove(&id);
            }
        }
        WidgetRegistryState { widgets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_clears_loaded_at() {
        let state = WidgetRegistryReducer::reduce(
            WidgetRegistryState::default(),
            WidgetRegistryAction::WidgetLoaded {
                id: "chart".into(),
                loaded_at: 42,
            },
        );
        let state = WidgetRegistryReducer::reduce(
            state,
            WidgetRegistryAction::WidgetError {
                id: "chart".into(),
                error_message: "chunk failed".into(),
            },
        );
        let info = &state.widgets["chart"];
        assert_eq!(info.status, WidgetStatus::Error);
        assert_eq!(info.loaded_at, None);
        assert_eq!(info.error_message.as_deref(), Some("chunk failed"));
    }

    #[test]
    fn reload_after_error_drops_message() {
        let state = WidgetRegistryReducer::reduce(
            WidgetRegistryState::default(),
            WidgetRegistryAction::WidgetError {
                id: "chart".into(),
                error_message: "boom".into(),
            },
        );
        let state = WidgetRegistryReducer::reduce(
            state,
            WidgetRegistryAction::WidgetLoading { id: "chart".into() },
        );
        assert_eq!(state.widgets["chart"].status, WidgetStatus::Loading);
        assert!(state.widgets["chart"].error_message.is_none());
    }
}
