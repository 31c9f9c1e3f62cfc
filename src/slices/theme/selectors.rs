use crate::slices::theme::state::{ResolvedTheme, ThemePreference};
use crate::store::AppState;

pub fn select_theme_preference(state: &AppState) -> ThemePreference {
    state.theme.preference
}

pub fn select_resolved_theme(state: &AppState) -> ResolvedTheme {
    state.theme.resolved
}

pub fn select_is_dark_mode(state: &AppState) -> bool {
    state.theme.resolved == ResolvedTheme::Dark
}
