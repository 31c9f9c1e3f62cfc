use crate::slices::viewport::state::{Breakpoint, DeviceType};
use crate::store::AppState;

pub fn select_breakpoint(state: &AppState) -> Breakpoint {
    state.viewport.breakpoint
}

pub fn select_device_type(state: &AppState) -> DeviceType {
    state.viewport.device_type
}

pub fn select_is_mobile(state: &AppState) -> bool {
    state.viewport.device_type == DeviceType::Mobile
}

pub fn select_is_tablet(state: &AppState) -> bool {
    state.viewport.device_type == DeviceType::Tablet
}

pub fn select_is_desktop(state: &AppState) -> bool {
    state.viewport.device_type == DeviceType::Desktop
}

/// True when the viewport is at least as wide as `breakpoint`.
pub fn select_is_at_least(state: &AppState, breakpoint: Breakpoint) -> bool {
    state.viewport.breakpoint >= breakpoint
}
