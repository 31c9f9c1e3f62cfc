use crate::slices::theme::action::ThemeAction;
use crate::slices::theme::state::{ThemePreference, ThemeState};
use crate::store::mvi::Reducer;

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeState;
    type Action = ThemeAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ThemeAction::SetPreference { preference } => ThemeState {
                preference,
                resolved: preference.forced().unwrap_or(state.system),
                ..state
            },
            ThemeAction::SystemPreferenceChanged { system_theme } => ThemeState {
                system: system_theme,
                resolved: if state.preference == ThemePreference::System {
                    system_theme
                } else {
                    state.resolved
                },
                ..state
            },
            ThemeAction::ResolvedThemeUpdated { resolved } => ThemeState { resolved, ..state },
        }
    }
}
