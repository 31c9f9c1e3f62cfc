use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::mvi::SliceState;

/// Spinners appear only for operations that outlive this delay.
pub const DEFAULT_SPINNER_DELAY_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingProcess {
    pub operation_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Stamped by the reducer from `StartLoading::started_at`.
    #[serde(default)]
    pub started_at: i64,
}

impl LoadingProcess {
    pub fn new(operation_name: impl Into<String>, message: Option<String>) -> Self {
        Self {
            operation_name: operation_name.into(),
            message,
            started_at: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadingState {
    /// Keyed by operation name; one entry per name.
    pub operations: BTreeMap<String, LoadingProcess>,
    pub delay_before_spinner_ms: u64,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            operations: BTreeMap::new(),
            delay_before_spinner_ms: DEFAULT_SPINNER_DELAY_MS,
        }
    }
}

impl SliceState for LoadingState {}
