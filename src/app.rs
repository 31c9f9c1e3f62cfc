//! Wires the store, the GraphQL client and the effects together.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::effects::{
    AuthEffect, EffectRunner, LoadingService, TaskEffect, ThemePersistEffect, ThemeRestoreEffect,
    ToastAutoDismissEffect, ToastEffect,
};
use crate::graphql::{GraphQLError, GraphQLService};
use crate::services::{AuthService, TaskService};
use crate::slices::app_metadata::AppMetadataState;
use crate::slices::notifications::NotificationState;
use crate::slices::theme::{ThemeAction, ThemeReducer, ThemeState};
use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::store::mvi::Reducer;
use crate::store::{AppAction, AppState, Store, StoreError, StoreHandle};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Graphql(#[from] GraphQLError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// State seeded from configuration, before anything is restored.
pub fn initial_state(config: &Config) -> AppState {
    let theme = ThemeReducer::reduce(
        ThemeState::default(),
        ThemeAction::SetPreference {
            preference: config.ui.theme,
        },
    );

    AppState {
        theme: Arc::new(theme),
        notifications: Arc::new(NotificationState::with_layout(
            config.ui.max_visible_toasts,
            config.ui.toast_position,
        )),
        app_metadata: Arc::new(AppMetadataState::from_config(config)),
        ..AppState::default()
    }
}

pub struct AppBuilder {
    config: Config,
    storage: Option<Arc<dyn KeyValueStorage>>,
    auth: AuthService,
}

impl AppBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            storage: None,
            auth: AuthService::new(),
        }
    }

    /// Where the theme preference is kept. Defaults to process memory.
    pub fn storage(mut self, storage: Arc<dyn KeyValueStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn auth_service(mut self, auth: AuthService) -> Self {
        self.auth = auth;
        self
    }

    /// Spawn the store and effects on the current runtime and dispatch
    /// `Init`.
    pub fn start(self) -> Result<App, AppError> {
        let graphql = Arc::new(GraphQLService::new(&self.config.api)?);
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStorage::new()));

        let (store, store_task) = Store::spawn(initial_state(&self.config));

        let runner = EffectRunner::new(store.clone())
            .register(AuthEffect::new(self.auth))
            .register(ThemePersistEffect::new(Arc::clone(&storage)))
            .register(ThemeRestoreEffect::new(storage))
            .register(TaskEffect::new(
                TaskService::new(Arc::clone(&graphql)),
                LoadingService::new(store.clone()),
            ))
            .register(ToastEffect)
            .register(ToastAutoDismissEffect);
        tracing::info!(
            effects = runner.len(),
            endpoint = graphql.endpoint(),
            "Starting store"
        );
        let effects_task = runner.spawn();

        store.dispatch(AppAction::Init)?;

        Ok(App {
            store,
            graphql,
            store_task,
            effects_task,
        })
    }
}

/// A running store with its effects.
pub struct App {
    store: StoreHandle,
    graphql: Arc<GraphQLService>,
    store_task: JoinHandle<()>,
    effects_task: JoinHandle<()>,
}

impl App {
    pub fn builder(config: Config) -> AppBuilder {
        AppBuilder::new(config)
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn graphql(&self) -> &Arc<GraphQLService> {
        &self.graphql
    }

    /// Stop the effects and the store. In-flight effects are abandoned.
    pub async fn shutdown(self) -> Arc<AppState> {
        let last = self.store.state();
        self.effects_task.abort();
        self.store_task.abort();
        let _ = self.effects_task.await;
        let _ = self.store_task.await;
        tracing::debug!("Store shut down");
        last
    }
}
