//! Viewport breakpoint slice.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::ViewportAction;
pub use reducer::ViewportReducer;
pub use state::{Breakpoint, DeviceType, ViewportState};
