//! The process-wide state container.
//!
//! [`Store::spawn`] starts a single task that owns the [`AppState`] and
//! applies dispatched actions one at a time. Everything else talks to it
//! through a cloneable [`StoreHandle`]: `dispatch` to write, `state` /
//! `select` to read, `subscribe` to observe a projection and `actions` to
//! observe the action stream (which is how effects are driven).

mod app_state;
pub mod mvi;
mod runtime;
mod selector;

pub use app_state::{AppAction, AppState, SliceOf};
pub use runtime::{Selection, Store, StoreError, StoreHandle};
pub use selector::MemoizedSelector;
