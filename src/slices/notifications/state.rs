use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::mvi::SliceState;

pub const DEFAULT_MAX_VISIBLE: usize = 3;
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

/// Event categories toasts are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKey {
    TaskCreateSuccess,
    TaskCreateError,
    TaskUpdateSuccess,
    TaskUpdateError,
    TaskDeleteSuccess,
    TaskDeleteError,
    NetworkError,
    AuthError,
    GenericError,
    GenericSuccess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: String,
    pub toast_type: ToastType,
    pub message: String,
    pub key: NotificationKey,
    /// Occurrences under this key since the toast was first shown.
    pub count: u32,
    pub first_occurred_at: i64,
    pub last_occurred_at: i64,
    /// Id of the most recent `ShowToast` under this key.
    pub last_occurrence_id: String,
    pub duration_ms: u64,
    pub dismissible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationState {
    /// Never pruned on dismissal.
    pub toasts: BTreeMap<NotificationKey, Toast>,
    /// Display order; at most `max_visible` entries.
    pub visible_keys: Vec<NotificationKey>,
    pub position: ToastPosition,
    pub max_visible: usize,
}

impl NotificationState {
    pub fn with_layout(max_visible: usize, position: ToastPosition) -> Self {
        Self {
            toasts: BTreeMap::new(),
            visible_keys: Vec::new(),
            position,
            max_visible,
        }
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::with_layout(DEFAULT_MAX_VISIBLE, ToastPosition::default())
    }
}

impl SliceState for NotificationState {}
