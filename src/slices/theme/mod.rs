//! Theme preference slice.
//!
//! The user's preference may defer to the operating system. The slice keeps
//! the last system-reported theme so that switching back to `System`
//! resolves immediately without waiting for the next OS event.

mod action;
mod reducer;
pub mod selectors;
mod state;

pub use action::ThemeAction;
pub use reducer::ThemeReducer;
pub use state::{ResolvedTheme, ThemePreference, ThemeState};
