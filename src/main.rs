use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use widget_store::app::App;
use widget_store::config::{Config, ConfigStore};
use widget_store::mock::{shutdown_signal, MockServer};
use widget_store::models::{CreateTaskInput, TaskPriority, TaskStatus};
use widget_store::slices::auth::{selectors::select_is_authenticated, AuthAction, AuthStatus};
use widget_store::slices::tasks::TaskAction;
use widget_store::slices::theme::{ThemeAction, ThemePreference};
use widget_store::slices::viewport::ViewportAction;
use widget_store::slices::widget_registry::WidgetRegistryAction;
use widget_store::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use widget_store::store::{AppState, StoreHandle};

const STEP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(name = "widget-store")]
#[command(about = "Client state store with a mock GraphQL backend")]
struct Cli {
    /// Config file (default: <config_dir>/widget-store/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the mock GraphQL backend until interrupted
    Serve {
        /// Override `mock.bind_addr`
        #[arg(long)]
        bind: Option<String>,
    },

    /// Run a scripted session against an embedded backend and print the final state
    Demo {
        /// Persist the theme preference to this file instead of memory
        #[arg(long)]
        storage: Option<PathBuf>,

        /// Login username
        #[arg(long, default_value = "demo")]
        username: String,

        /// Login password
        #[arg(long, default_value = "demo")]
        password: String,

        /// Viewport width in pixels
        #[arg(long, default_value = "1024")]
        width: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = ConfigStore::open(path.clone())
        .with_context(|| format!("loading {}", path.display()))?;
    widget_store::logging::init(config.get().logging.level);

    match cli.command {
        Command::Serve { bind } => serve(config.get(), bind).await,
        Command::Demo {
            storage,
            username,
            password,
            width,
        } => demo(config.get(), storage, username, password, width).await,
    }
}

async fn serve(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.mock.bind_addr = bind;
    }
    let server = MockServer::bind(&config.mock).await?;
    println!("Mock GraphQL backend at {}", server.graphql_url());
    server.run(shutdown_signal()).await?;
    Ok(())
}

async fn demo(
    mut config: Config,
    storage: Option<PathBuf>,
    username: String,
    password: String,
    width: u32,
) -> Result<()> {
    config.mock.bind_addr = "127.0.0.1:0".to_string();
    let backend = MockServer::bind(&config.mock).await?.spawn();
    config.api.graphql_endpoint = backend.graphql_url();
    config.api.api_key = config.mock.api_key.clone();

    let storage: Arc<dyn KeyValueStorage> = match storage {
        Some(path) => Arc::new(FileStorage::new(path)),
        None => Arc::new(MemoryStorage::new()),
    };
    let app = App::builder(config).storage(storage).start()?;
    let store = app.store();

    store.dispatch(ViewportAction::WidthChanged { width })?;
    store.dispatch(ThemeAction::SetPreference {
        preference: ThemePreference::Dark,
    })?;
    store.dispatch(WidgetRegistryAction::RegisterWidget {
        id: "task-list".to_string(),
    })?;
    store.dispatch(WidgetRegistryAction::WidgetLoading {
        id: "task-list".to_string(),
    })?;

    store.dispatch(AuthAction::Login { username, password })?;
    step(store, "login", |s| {
        matches!(s.auth.status, AuthStatus::Authenticated | AuthStatus::Error)
    })
    .await?;
    if !store.select(select_is_authenticated) {
        tracing::warn!("Continuing the demo anonymously");
    }

    store.dispatch(TaskAction::LoadTasks)?;
    step(store, "load tasks", |s| {
        !s.tasks.tasks.is_empty() || s.tasks.error.is_some()
    })
    .await?;
    if let Some(error) = &store.state().tasks.error {
        tracing::warn!(error = %error, "Loading tasks failed, continuing with an empty list");
    }
    store.dispatch(WidgetRegistryAction::WidgetLoaded {
        id: "task-list".to_string(),
        loaded_at: chrono::Utc::now().timestamp_millis(),
    })?;

    let before = store.state().tasks.tasks.len();
    store.dispatch(TaskAction::CreateTask {
        input: CreateTaskInput::new("Try the demo", TaskStatus::Todo, TaskPriority::Medium)
            .with_description("Created by `widget-store demo`"),
    })?;
    step(store, "create task", |s| {
        !s.tasks.loading && s.tasks.tasks.len() > before
    })
    .await?;

    store.dispatch(TaskAction::CreateTask {
        input: CreateTaskInput {
            title: Some("Missing status".to_string()),
            priority: Some(TaskPriority::Low),
            ..Default::default()
        },
    })?;
    step(store, "rejected task", |s| s.tasks.error.is_some()).await?;

    let state = app.shutdown().await;
    println!("{}", serde_json::to_string_pretty(&*state)?);
    backend.shutdown().await;
    Ok(())
}

/// Wait for a scripted step to settle.
async fn step<F>(store: &StoreHandle, name: &str, done: F) -> Result<Arc<AppState>>
where
    F: FnMut(&AppState) -> bool,
{
    tokio::time::timeout(STEP_TIMEOUT, store.wait_for(done))
        .await
        .with_context(|| format!("timed out waiting for {}", name))?
        .with_context(|| format!("store stopped during {}", name))
}
