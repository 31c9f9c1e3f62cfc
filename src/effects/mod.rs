//! Side effects driven by the action stream.
//!
//! An [`Effect`] picks the actions it cares about, performs one external
//! operation per action and answers with at most one follow-up action.
//! Every matching action runs in its own task: slow operations never block
//! the store or each other, and a panicking effect only loses its own
//! follow-up.

mod auth;
mod loading;
mod notifications;
mod tasks;
mod theme;

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::store::mvi::Action;
use crate::store::{AppAction, StoreHandle};

pub use auth::AuthEffect;
pub use loading::LoadingService;
pub use notifications::{ToastAutoDismissEffect, ToastEffect};
pub use tasks::TaskEffect;
pub use theme::{ThemePersistEffect, ThemeRestoreEffect};

#[async_trait::async_trait]
pub trait Effect: Send + Sync + 'static {
    /// Used in logs.
    fn name(&self) -> &'static str;

    fn accepts(&self, action: &AppAction) -> bool;

    /// Handle one accepted action. `None` means nothing to dispatch.
    async fn run(&self, action: AppAction) -> Option<AppAction>;
}

/// Fans the store's action stream out to registered effects.
pub struct EffectRunner {
    store: StoreHandle,
    effects: Vec<Arc<dyn Effect>>,
}

impl EffectRunner {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            store,
            effects: Vec::new(),
        }
    }

    pub fn register(mut self, effect: impl Effect) -> Self {
        self.effects.push(Arc::new(effect));
        self
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Start listening. Actions dispatched after this call returns are
    /// guaranteed to be seen.
    pub fn spawn(self) -> JoinHandle<()> {
        let mut actions = self.store.actions();
        tokio::spawn(async move {
            loop {
                match actions.recv().await {
                    Ok(action) => self.handle(&action),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Effect runner lagged behind the store");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("Effect runner stopped");
        })
    }

    fn handle(&self, action: &AppAction) {
        for effect in &self.effects {
            if !effect.accepts(action) {
                continue;
            }
            tracing::trace!(effect = effect.name(), action = action.name(), "Running effect");

            let name = effect.name();
            let store = self.store.clone();
            let work = {
                let effect = Arc::clone(effect);
                let action = action.clone();
                tokio::spawn(async move { effect.run(action).await })
            };

            tokio::spawn(async move {
                match work.await {
                    Ok(Some(follow_up)) => {
                        if let Err(e) = store.dispatch(follow_up) {
                            tracing::warn!(effect = name, error = %e, "Follow-up not dispatched");
                        }
                    }
                    Ok(None) => {}
                    Err(e) if e.is_panic() => {
                        tracing::error!(effect = name, "Effect panicked; follow-up dropped");
                    }
                    Err(_) => {
                        tracing::debug!(effect = name, "Effect cancelled");
                    }
                }
            });
        }
    }
}
