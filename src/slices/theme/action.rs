use crate::slices::theme::state::{ResolvedTheme, ThemePreference};
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeAction {
    SetPreference { preference: ThemePreference },
    /// The operating system reported a (possibly new) color scheme.
    SystemPreferenceChanged { system_theme: ResolvedTheme },
    /// Explicit override of the resolved theme, regardless of preference.
    ResolvedThemeUpdated { resolved: ResolvedTheme },
}

impl Action for ThemeAction {
    fn name(&self) -> &'static str {
        match self {
            ThemeAction::SetPreference { .. } => "[Theme] Set Preference",
            ThemeAction::SystemPreferenceChanged { .. } => "[Theme] System Preference Changed",
            ThemeAction::ResolvedThemeUpdated { .. } => "[Theme] Resolved Theme Updated",
        }
    }
}
