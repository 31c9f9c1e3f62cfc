//! Base trait for actions dispatched into the store.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent:
/// - User requests (log in, change theme, create a task)
/// - System events (viewport resize, OS theme change)
/// - Async outcomes reported back by effects (`... Success`, `... Failure`)
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable `[Source] Event` name used for logging and effect filtering.
    fn name(&self) -> &'static str;
}
