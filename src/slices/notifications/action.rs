use crate::slices::notifications::state::{NotificationKey, ToastPosition, ToastType};
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationsAction {
    ShowToast {
        id: String,
        toast_type: ToastType,
        message: String,
        key: NotificationKey,
        duration_ms: Option<u64>,
        dismissible: Option<bool>,
        timestamp: i64,
    },
    DismissToast {
        key: NotificationKey,
    },
    DismissAllToasts,
    /// Fired by the auto-dismiss timer armed by the `ShowToast` with id
    /// `toast_id` and timestamp `scheduled_at`.
    AutoDismissToast {
        key: NotificationKey,
        toast_id: String,
        scheduled_at: i64,
    },
    UpdatePosition {
        position: ToastPosition,
    },
}

impl NotificationsAction {
    /// False for a `ShowToast` without a usable id. The reducer discards
    /// such actions and no timer may be armed for them.
    pub fn is_valid(&self) -> bool {
        match self {
            NotificationsAction::ShowToast { id, .. } => !id.trim().is_empty(),
            _ => true,
        }
    }

    /// Build a `ShowToast` with a fresh id, stamped with the current time.
    pub fn show_toast(
        toast_type: ToastType,
        key: NotificationKey,
        message: impl Into<String>,
    ) -> Self {
        NotificationsAction::ShowToast {
            id: uuid::Uuid::new_v4().to_string(),
            toast_type,
            message: message.into(),
            key,
            duration_ms: None,
            dismissible: None,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl Action for NotificationsAction {
    fn name(&self) -> &'static str {
        match self {
            NotificationsAction::ShowToast { .. } => "[Notifications] Show Toast",
            NotificationsAction::DismissToast { .. } => "[Notifications] Dismiss Toast",
            NotificationsAction::DismissAllToasts => "[Notifications] Dismiss All Toasts",
            NotificationsAction::AutoDismissToast { .. } => "[Notifications] Auto Dismiss Toast",
            NotificationsAction::UpdatePosition { .. } => "[Notifications] Update Position",
        }
    }
}
