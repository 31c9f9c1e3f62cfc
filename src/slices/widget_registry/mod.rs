//! Lifecycle registry for dynamically loaded widgets.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::WidgetRegistryAction;
pub use reducer::WidgetRegistryReducer;
pub use state::{WidgetInfo, WidgetRegistryState, WidgetStatus};
