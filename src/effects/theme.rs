use std::str::FromStr;
use std::sync::Arc;

use crate::slices::theme::{ThemeAction, ThemePreference};
use crate::storage::{KeyValueStorage, THEME_PREFERENCE_KEY};
use crate::store::AppAction;

use super::Effect;

/// Writes every preference change to storage. Dispatches nothing.
pub struct ThemePersistEffect {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemePersistEffect {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait::async_trait]
impl Effect for ThemePersistEffect {
    fn name(&self) -> &'static str {
        "theme-persist"
    }

    fn accepts(&self, action: &AppAction) -> bool {
        matches!(action, AppAction::Theme(ThemeAction::SetPreference { .. }))
    }

    async fn run(&self, action: AppAction) -> Option<AppAction> {
        let AppAction::Theme(ThemeAction::SetPreference { preference }) = action else {
            return None;
        };
        if let Err(e) = self
            .storage
            .set_item(THEME_PREFERENCE_KEY, preference.as_str())
        {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
        None
    }
}

/// Reapplies the stored preference once, on `Init`.
pub struct ThemeRestoreEffect {
    storage: Arc<dyn KeyValueStorage>,
}

impl ThemeRestoreEffect {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait::async_trait]
impl Effect for ThemeRestoreEffect {
    fn name(&self) -> &'static str {
        "theme-restore"
    }

    fn accepts(&self, action: &AppAction) -> bool {
        matches!(action, AppAction::Init)
    }

    async fn run(&self, _action: AppAction) -> Option<AppAction> {
        let stored = match self.storage.get_item(THEME_PREFERENCE_KEY) {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme preference");
                return None;
            }
        };

        match ThemePreference::from_str(&stored) {
            Ok(preference) => {
                tracing::debug!(%preference, "Restoring theme preference");
                Some(ThemeAction::SetPreference { preference }.into())
            }
            Err(e) => {
                tracing::warn!("Ignoring stored theme preference: {}", e);
                None
            }
        }
    }
}
