use std::collections::BTreeMap;

use crate::slices::widget_registry::state::{WidgetInfo, WidgetStatus};
use crate::store::AppState;

pub fn select_all_widgets(state: &AppState) -> &BTreeMap<String, WidgetInfo> {
    &state.widget_registry.widgets
}

pub fn select_widget_by_id<'a>(state: &'a AppState, id: &str) -> Option<&'a WidgetInfo> {
    state.widget_registry.widgets.get(id)
}

pub fn select_widgets_with_status(state: &AppState, status: WidgetStatus) -> Vec<&WidgetInfo> {
    state
        .widget_registry
        .widgets
        .values()
        .filter(|widget| widget.status == status)
        .collect()
}

pub fn select_all_loaded_widgets(state: &AppState) -> Vec<&WidgetInfo> {
    select_widgets_with_status(state, WidgetStatus::Ready)
}

pub fn select_all_broken_widgets(state: &AppState) -> Vec<&WidgetInfo> {
    select_widgets_with_status(state, WidgetStatus::Error)
}

pub fn select_is_any_widget_loading(state: &AppState) -> bool {
    state
        .widget_registry
        .widgets
        .values()
        .any(|widget| widget.status == WidgetStatus::Loading)
}

/// Statuses with no widgets are absent from the result.
pub fn select_widget_count_by_status(state: &AppState) -> BTreeMap<WidgetStatus, usize> {
    state
        .widget_registry
        .widgets
        .values()
        .fold(BTreeMap::new(), |mut counts, widget| {
            *counts.entry(widget.status).or_insert(0) += 1;
            counts
        })
}
