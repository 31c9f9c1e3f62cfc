//! State slices composed by the store.
//!
//! Each slice owns an action enum, a pure reducer, its state shape and a
//! set of selectors over the root [`AppState`](crate::store::AppState).

pub mod app_metadata;
pub mod auth;
pub mod loading;
pub mod notifications;
pub mod tasks;
pub mod theme;
pub mod viewport;
pub mod widget_registry;
