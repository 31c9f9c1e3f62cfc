use serde::Serialize;

use crate::slices::loading::state::LoadingProcess;
use crate::store::AppState;

/// What a spinner component needs to decide whether to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadingData {
    pub is_loading: bool,
    /// Start of the oldest in-flight operation.
    pub started_at: Option<i64>,
    pub delay_before_spinner_ms: u64,
}

pub fn select_active_operations(state: &AppState) -> Vec<&LoadingProcess> {
    state.loading.operations.values().collect()
}

pub fn select_is_loading(state: &AppState) -> bool {
    !state.loading.operations.is_empty()
}

pub fn select_is_operation_loading(state: &AppState, operation_name: &str) -> bool {
    state.loading.operations.contains_key(operation_name)
}

pub fn select_loading_started_at(state: &AppState) -> Option<i64> {
    state
        .loading
        .operations
        .values()
        .map(|process| process.started_at)
        .min()
}

pub fn select_loading_data(state: &AppState) -> LoadingData {
    LoadingData {
        is_loading: select_is_loading(state),
        started_at: select_loading_started_at(state),
        delay_before_spinner_ms: state.loading.delay_before_spinner_ms,
    }
}
