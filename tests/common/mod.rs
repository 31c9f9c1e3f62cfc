//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use std::sync::Arc;
use std::time::Duration;

use widget_store::app::App;
use widget_store::config::{Config, MockConfig};
use widget_store::graphql::FetchPolicy;
use widget_store::mock::{MockHandle, MockServer};
use widget_store::services::AuthService;
use widget_store::storage::KeyValueStorage;
use widget_store::store::{AppState, StoreHandle};

/// Upper bound for anything a test waits on.
pub const WAIT: Duration = Duration::from_secs(5);

/// Config pointed at `endpoint`, with short timeouts and no cache.
pub fn test_config(endpoint: &str) -> Config {
    let mut config = Config::default();
    config.api.graphql_endpoint = endpoint.to_string();
    config.api.timeout_ms = 2_000;
    config.api.retry_attempts = 2;
    config.api.retry_delay_ms = 10;
    config.api.enable_cache = false;
    config.api.fetch_policy = FetchPolicy::NetworkOnly;
    config
}

/// Start the seeded mock GraphQL backend on a free port.
pub async fn start_mock() -> MockHandle {
    start_mock_with(MockConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        latency_ms: 0,
        api_key: None,
    })
    .await
}

pub async fn start_mock_with(config: MockConfig) -> MockHandle {
    MockServer::bind(&config)
        .await
        .expect("Failed to bind mock GraphQL backend")
        .spawn()
}

/// Login checks that answer immediately.
pub fn instant_auth() -> AuthService {
    AuthService::new().with_latency(Duration::ZERO, Duration::ZERO)
}

pub fn start_app(config: Config) -> App {
    App::builder(config)
        .auth_service(instant_auth())
        .start()
        .expect("Failed to start app")
}

pub fn start_app_with_storage(config: Config, storage: Arc<dyn KeyValueStorage>) -> App {
    App::builder(config)
        .auth_service(instant_auth())
        .storage(storage)
        .start()
        .expect("Failed to start app")
}

/// Wait until the store satisfies `predicate`, failing the test after `WAIT`.
pub async fn wait_until<F>(store: &StoreHandle, predicate: F) -> Arc<AppState>
where
    F: FnMut(&AppState) -> bool,
{
    tokio::time::timeout(WAIT, store.wait_for(predicate))
        .await
        .expect("Timed out waiting for state")
        .expect("Store stopped")
}

/// Receive actions until one satisfies `predicate`, failing the test after `WAIT`.
pub async fn next_action<F>(
    actions: &mut tokio::sync::broadcast::Receiver<widget_store::store::AppAction>,
    mut predicate: F,
) -> widget_store::store::AppAction
where
    F: FnMut(&widget_store::store::AppAction) -> bool,
{
    tokio::time::timeout(WAIT, async {
        loop {
            let action = actions.recv().await.expect("Action stream closed");
            if predicate(&action) {
                return action;
            }
        }
    })
    .await
    .expect("Timed out waiting for action")
}
