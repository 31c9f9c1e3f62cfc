//! Toast notifications, deduplicated by category key.
//!
//! A repeated toast for a key already in the map bumps its occurrence count
//! instead of stacking another entry. Dismissal only hides a key; the toast
//! record stays in the map so later occurrences keep counting.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::NotificationsAction;
pub use reducer::NotificationsReducer;
pub use state::{
    NotificationKey, NotificationState, Toast, ToastPosition, ToastType, DEFAULT_MAX_VISIBLE,
    DEFAULT_TOAST_DURATION_MS,
};
