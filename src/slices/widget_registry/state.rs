use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetInfo {
    pub id: String,
    /// Set only while `status` is `Ready`.
    pub loaded_at: Option<i64>,
    pub status: WidgetStatus,
    /// Set only while `status` is `Error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl WidgetInfo {
    pub(crate) fn with_status(id: String, status: WidgetStatus) -> Self {
        Self {
            id,
            loaded_at: None,
            status,
            error_message: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WidgetRegistryState {
    pub widgets: BTreeMap<String, WidgetInfo>,
}

impl SliceState for WidgetRegistryState {}
