//! Task list feature slice, fed by the task effects.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::TaskAction;
pub use reducer::TaskReducer;
pub use state::TaskState;
