use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::MockConfig;
use crate::mock::data::MockData;
use crate::mock::handlers::{self, MockState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub fn build_router(state: MockState) -> Router {
    Router::new()
        .route("/graphql", post(handlers::graphql))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Mock GraphQL backend bound to a local port.
pub struct MockServer {
    pub addr: SocketAddr,
    /// Bound in `bind` so the port is reserved before `run`.
    listener: TcpListener,
    state: MockState,
}

impl MockServer {
    /// Bind to `config.bind_addr`; port 0 picks a free port.
    pub async fn bind(config: &MockConfig) -> Result<Self, ServerError> {
        Self::bind_with(config, MockData::seeded()).await
    }

    pub async fn bind_with(config: &MockConfig, data: MockData) -> Result<Self, ServerError> {
        let addr: SocketAddr =
            config
                .bind_addr
                .parse()
                .map_err(|source| ServerError::InvalidAddr {
                    addr: config.bind_addr.clone(),
                    source,
                })?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let addr = listener.local_addr()?;

        Ok(Self {
            addr,
            listener,
            state: MockState {
                data: Arc::new(Mutex::new(data)),
                api_key: config.api_key.clone(),
                latency_ms: config.latency_ms,
            },
        })
    }

    pub fn graphql_url(&self) -> String {
        format!("http://{}/graphql", self.addr)
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<S>(self, shutdown: S) -> Result<(), ServerError>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(addr = %self.addr, "Mock GraphQL backend listening");
        axum::serve(self.listener, build_router(self.state))
            .with_graceful_shutdown(shutdown)
            .into_future()
            .await?;
        tracing::info!("Mock GraphQL backend stopped");
        Ok(())
    }

    /// Serve on a background task; dropping the handle stops the server.
    pub fn spawn(self) -> MockHandle {
        let addr = self.addr;
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            let shutdown = async move {
                let _ = shutdown_rx.changed().await;
            };
            if let Err(e) = self.run(shutdown).await {
                tracing::error!(error = %e, "Mock GraphQL backend failed");
            }
        });
        MockHandle {
            addr,
            shutdown: shutdown_tx,
            task: Some(task),
        }
    }
}

pub struct MockHandle {
    pub addr: SocketAddr,
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl MockHandle {
    pub fn graphql_url(&self) -> String {
        format!("http://{}/graphql", self.addr)
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(_) => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
