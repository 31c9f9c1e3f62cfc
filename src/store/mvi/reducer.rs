//! Reducer trait for slice state transitions.

use super::action::Action;
use super::state::SliceState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State. Clocks, random ids
/// and I/O belong to action constructors and effects, never here.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions with no effect on the slice must return `state` unchanged.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
