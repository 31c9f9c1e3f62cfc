use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use crate::store::app_state::{AppAction, AppState};
use crate::store::mvi::Action;

/// Capacity of the action broadcast. Slow observers that fall further
/// behind than this skip the oldest actions.
const ACTION_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store is closed, dropped action {action}")]
    Closed { action: &'static str },
}

/// Owner of the state; see [`Store::spawn`].
pub struct Store;

impl Store {
    /// Start the store task on the current tokio runtime.
    ///
    /// The task exits once every [`StoreHandle`] has been dropped.
    pub fn spawn(initial: AppState) -> (StoreHandle, JoinHandle<()>) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(Arc::new(initial));
        let (observed_tx, _) = broadcast::channel(ACTION_CHANNEL_CAPACITY);

        let handle = StoreHandle {
            actions: action_tx,
            state: state_rx,
            observed: observed_tx.clone(),
        };
        let task = tokio::spawn(run(action_rx, state_tx, observed_tx));
        (handle, task)
    }
}

async fn run(
    mut actions: mpsc::UnboundedReceiver<AppAction>,
    state: watch::Sender<Arc<AppState>>,
    observed: broadcast::Sender<AppAction>,
) {
    let mut current = state.borrow().clone();
    while let Some(action) = actions.recv().await {
        let next = current.reduce(&action);
        let changed = !next.same_slices(&current);
        tracing::debug!(action = action.name(), changed, "Reduced action");

        if changed {
            current = Arc::new(next);
            state.send_replace(Arc::clone(&current));
        }
        // Effects see an action only after every reducer has processed it.
        let _ = observed.send(action);
    }
    tracing::debug!("Store stopped: all handles dropped");
}

/// Cloneable access point to the store.
#[derive(Clone)]
pub struct StoreHandle {
    actions: mpsc::UnboundedSender<AppAction>,
    state: watch::Receiver<Arc<AppState>>,
    observed: broadcast::Sender<AppAction>,
}

impl StoreHandle {
    /// Queue an action. Never blocks, usable from sync code and `Drop`.
    pub fn dispatch(&self, action: impl Into<AppAction>) -> Result<(), StoreError> {
        let action = action.into();
        let name = action.name();
        self.actions
            .send(action)
            .map_err(|_| StoreError::Closed { action: name })
    }

    /// Snapshot of the latest state.
    pub fn state(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    /// Apply a selector to the latest state.
    pub fn select<T, F>(&self, selector: F) -> T
    where
        F: FnOnce(&AppState) -> T,
    {
        selector(&**self.state.borrow())
    }

    /// Observe a projection of the state, emitting only when it changes.
    pub fn subscribe<T, F>(&self, selector: F) -> Selection<T, F>
    where
        T: Clone + PartialEq,
        F: Fn(&AppState) -> T,
    {
        let mut state = self.state.clone();
        let current = selector(&**state.borrow_and_update());
        Selection {
            state,
            selector,
            current,
        }
    }

    /// Wait until the state satisfies `predicate`, returning that state.
    ///
    /// Returns `None` if the store shuts down first.
    pub async fn wait_for<F>(&self, mut predicate: F) -> Option<Arc<AppState>>
    where
        F: FnMut(&AppState) -> bool,
    {
        let mut state = self.state.clone();
        let snapshot = state.wait_for(|snapshot| predicate(&**snapshot)).await.ok()?;
        let matched = Arc::clone(&*snapshot);
        Some(matched)
    }

    /// Stream of actions, delivered after the reducers have run.
    pub fn actions(&self) -> broadcast::Receiver<AppAction> {
        self.observed.subscribe()
    }
}

/// A selector bound to the store; see [`StoreHandle::subscribe`].
pub struct Selection<T, F> {
    state: watch::Receiver<Arc<AppState>>,
    selector: F,
    current: T,
}

impl<T, F> Selection<T, F>
where
    T: Clone + PartialEq,
    F: Fn(&AppState) -> T,
{
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Wait for the projected value to differ from the last one seen.
    ///
    /// Returns `None` once the store has shut down.
    pub async fn changed(&mut self) -> Option<T> {
        loop {
            self.state.changed().await.ok()?;
            let next = (self.selector)(&**self.state.borrow_and_update());
            if next != self.current {
                self.current = next.clone();
                return Some(next);
            }
        }
    }
}
