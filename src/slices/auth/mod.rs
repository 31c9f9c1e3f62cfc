//! Authentication session slice.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::AuthAction;
pub use reducer::AuthReducer;
pub use state::{AuthState, AuthStatus, User};
