use std::time::Duration;

use crate::slices::auth::AuthAction;
use crate::slices::notifications::{
    NotificationKey, NotificationsAction, ToastType, DEFAULT_TOAST_DURATION_MS,
};
use crate::slices::tasks::TaskAction;
use crate::store::AppAction;

use super::Effect;

/// Turns task and login outcomes into toasts.
pub struct ToastEffect;

impl ToastEffect {
    fn toast_for(action: &AppAction) -> Option<NotificationsAction> {
        use NotificationKey as Key;
        use ToastType::{Error, Success};

        let (toast_type, key, message) = match action {
            AppAction::Task(TaskAction::CreateTaskSuccess { task }) => (
                Success,
                Key::TaskCreateSuccess,
                format!("Task \"{}\" created", task.title),
            ),
            AppAction::Task(TaskAction::CreateTaskFailure { error }) => (
                Error,
                Key::TaskCreateError,
                format!("Failed to create task: {}", error),
            ),
            AppAction::Task(TaskAction::UpdateTaskSuccess { task }) => (
                Success,
                Key::TaskUpdateSuccess,
                format!("Task \"{}\" updated", task.title),
            ),
            AppAction::Task(TaskAction::UpdateTaskFailure { error }) => (
                Error,
                Key::TaskUpdateError,
                format!("Failed to update task: {}", error),
            ),
            AppAction::Task(TaskAction::DeleteTaskSuccess { .. }) => {
                (Success, Key::TaskDeleteSuccess, "Task deleted".to_string())
            }
            AppAction::Task(TaskAction::DeleteTaskFailure { error }) => (
                Error,
                Key::TaskDeleteError,
                format!("Failed to delete task: {}", error),
            ),
            AppAction::Task(TaskAction::LoadTasksFailure { error }) => (
                Error,
                Key::NetworkError,
                format!("Failed to load tasks: {}", error),
            ),
            AppAction::Auth(AuthAction::LoginFailure { error }) => {
                (Error, Key::AuthError, error.clone())
            }
            _ => return None,
        };
        Some(NotificationsAction::show_toast(toast_type, key, message))
    }
}

#[async_trait::async_trait]
impl Effect for ToastEffect {
    fn name(&self) -> &'static str {
        "outcome-toasts"
    }

    fn accepts(&self, action: &AppAction) -> bool {
        Self::toast_for(action).is_some()
    }

    async fn run(&self, action: AppAction) -> Option<AppAction> {
        Self::toast_for(&action).map(AppAction::from)
    }
}

/// Hides each shown toast once its duration has elapsed.
///
/// A zero duration keeps the toast until it is dismissed explicitly.
pub struct ToastAutoDismissEffect;

#[async_trait::async_trait]
impl Effect for ToastAutoDismissEffect {
    fn name(&self) -> &'static str {
        "toast-auto-dismiss"
    }

    fn accepts(&self, action: &AppAction) -> bool {
        matches!(
            action,
            AppAction::Notifications(show @ NotificationsAction::ShowToast { .. }) if show.is_valid()
        )
    }

    async fn run(&self, action: AppAction) -> Option<AppAction> {
        let AppAction::Notifications(NotificationsAction::ShowToast {
            id,
            key,
            duration_ms,
            timestamp,
            ..
        }) = action
        else {
            return None;
        };

        let duration_ms = duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS);
        if duration_ms == 0 {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(duration_ms)).await;
        Some(
            NotificationsAction::AutoDismissToast {
                key,
                toast_id: id,
                scheduled_at: timestamp,
            }
            .into(),
        )
    }
}
