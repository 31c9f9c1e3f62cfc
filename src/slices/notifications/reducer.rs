use crate::slices::notifications::action::NotificationsAction;
use crate::slices::notifications::state::{
    NotificationKey, NotificationState, Toast, DEFAULT_TOAST_DURATION_MS,
};
use crate::store::mvi::Reducer;

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationState;
    type Action = NotificationsAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        if !action.is_valid() {
            tracing::error!(action = ?action, "Discarding toast without an id");
            return state;
        }

        match action {
            NotificationsAction::ShowToast {
                id,
                toast_type,
                message,
                key,
                duration_ms,
                dismissible,
                timestamp,
            } => {
                let mut state = state;
                if let Some(existing) = state.toasts.get_mut(&key) {
                    existing.count += 1;
                    existing.last_occurred_at = timestamp;
                    existing.last_occurrence_id = id;
                    return state;
                }

                state.toasts.insert(
                    key,
                    Toast {
                        last_occurrence_id: id.clone(),
                        id,
                        toast_type,
                        message,
                        key,
                        count: 1,
                        first_occurred_at: timestamp,
                        last_occurred_at: timestamp,
                        duration_ms: duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
                        dismissible: dismissible.unwrap_or(true),
                    },
                );
                if state.visible_keys.len() < state.max_visible {
                    state.visible_keys.push(key);
                }
                state
            }
            NotificationsAction::DismissToast { key } => hide(state, key),
            NotificationsAction::AutoDismissToast {
                key,
                toast_id,
                scheduled_at,
            } => {
                // The toast fired again after the timer was armed; its own timer will hide it.
                let reoccurred = state.toasts.get(&key).is_some_and(|toast| {
                    toast.last_occurrence_id != toast_id || toast.last_occurred_at > scheduled_at
                });
                if reoccurred {
                    state
                } else {
                    hide(state, key)
                }
            }
            NotificationsAction::DismissAllToasts => NotificationState {
                visible_keys: Vec::new(),
                ..state
            },
            NotificationsAction::UpdatePosition { position } => {
                NotificationState { position, ..state }
            }
        }
    }
}

fn hide(mut state: NotificationState, key: NotificationKey) -> NotificationState {
    state.visible_keys.retain(|visible| *visible != key);
    state
}
