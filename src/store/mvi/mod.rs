//! Model-View-Intent primitives shared by every state slice.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selector ──→ View
//!    ↑                                            │
//!    └────────────── Effect ←─────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of one slice
//! - **Action**: Named event describing a requested change or an async outcome
//! - **Reducer**: Pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::SliceState;
