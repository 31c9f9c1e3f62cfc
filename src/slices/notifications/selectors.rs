use crate::slices::notifications::state::{NotificationKey, Toast};
use crate::store::AppState;

pub fn select_toast_by_key(state: &AppState, key: NotificationKey) -> Option<&Toast> {
    state.notifications.toasts.get(&key)
}

/// Visible toasts in display order.
pub fn select_visible_toasts(state: &AppState) -> Vec<&Toast> {
    state
        .notifications
        .visible_keys
        .iter()
        .filter_map(|key| state.notifications.toasts.get(key))
        .collect()
}

pub fn select_toast_count(state: &AppState) -> usize {
    state.notifications.visible_keys.len()
}

pub fn select_able_to_show_toast(state: &AppState) -> bool {
    state.notifications.visible_keys.len() < state.notifications.max_visible
}
