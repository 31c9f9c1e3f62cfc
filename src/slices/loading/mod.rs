//! In-flight operation tracking for loading spinners.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::LoadingAction;
pub use reducer::LoadingReducer;
pub use state::{LoadingProcess, LoadingState, DEFAULT_SPINNER_DELAY_MS};
