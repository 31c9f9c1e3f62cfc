//! Retry, classification and caching of the GraphQL client.

mod common;

use std::sync::Arc;

use common::mock_backend::{MockResponse, ScriptedBackend};
use common::test_config;
use widget_store::graphql::{FetchPolicy, GraphQLError, GraphQLService};
use widget_store::models::{CreateTaskInput, TaskPriority, TaskStatus};
use widget_store::services::TaskService;

const TASKS: &str = r#"{"tasks": [{"id": "1", "title": "One", "status": "TODO", "priority": "LOW", "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"}]}"#;
const CREATED: &str = r#"{"createTask": {"id": "2", "title": "Two", "status": "DONE", "priority": "HIGH", "createdAt": "2024-01-02T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z"}}"#;

fn service(backend: &ScriptedBackend) -> TaskService {
    let config = test_config(&backend.graphql_url());
    TaskService::new(Arc::new(GraphQLService::new(&config.api).unwrap()))
}

#[tokio::test]
async fn transient_server_error_is_retried() {
    let backend = ScriptedBackend::start().await;
    backend.enqueue(MockResponse::status(503)).await;
    backend.enqueue(MockResponse::data(TASKS)).await;

    let tasks = service(&backend).get_tasks().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "One");

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body["operationName"], "tasks");
    assert!(requests[0].body["query"].as_str().unwrap().contains("tasks"));
}

#[tokio::test]
async fn retries_stop_after_configured_attempts() {
    let backend = ScriptedBackend::start().await;

    let err = service(&backend).get_tasks().await.unwrap_err();
    assert!(matches!(err, GraphQLError::Server { status: 500 }));
    // First attempt plus two retries.
    assert_eq!(backend.captured_requests().await.len(), 3);
}

#[tokio::test]
async fn unauthorized_is_not_retried() {
    let backend = ScriptedBackend::start().await;
    backend.enqueue(MockResponse::status(401)).await;
    backend.enqueue(MockResponse::data(TASKS)).await;

    let err = service(&backend).get_tasks().await.unwrap_err();
    assert!(matches!(err, GraphQLError::Unauthorized { status: 401 }));
    assert!(!err.is_retryable());
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn graphql_errors_are_not_retried() {
    let backend = ScriptedBackend::start().await;
    backend
        .enqueue(MockResponse::graphql_error("Missing required fields: status"))
        .await;

    let input = CreateTaskInput {
        title: Some("No status".to_string()),
        priority: Some(TaskPriority::Low),
        ..Default::default()
    };
    let err = service(&backend).create_task(&input).await.unwrap_err();
    assert_eq!(err.to_string(), "Missing required fields: status");
    assert_eq!(backend.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut config = test_config(&format!("http://127.0.0.1:{}/graphql", port));
    config.api.retry_attempts = 0;
    let tasks = TaskService::new(Arc::new(GraphQLService::new(&config.api).unwrap()));

    let err = tasks.get_tasks().await.unwrap_err();
    assert_eq!(err.error_type(), "network_error", "unexpected error: {:?}", err);
}

#[tokio::test]
async fn api_key_header_is_sent() {
    let backend = ScriptedBackend::start().await;
    backend.enqueue(MockResponse::data(TASKS)).await;

    let mut config = test_config(&backend.graphql_url());
    config.api.api_key = Some("secret".to_string());
    let tasks = TaskService::new(Arc::new(GraphQLService::new(&config.api).unwrap()));
    tasks.get_tasks().await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].header("x-api-key"), Some("secret"));
}

#[tokio::test]
async fn cache_first_reuses_results_until_a_mutation() {
    let backend = ScriptedBackend::start().await;
    backend.enqueue(MockResponse::data(TASKS)).await;
    backend.enqueue(MockResponse::data(CREATED)).await;
    backend.enqueue(MockResponse::data(TASKS)).await;

    let mut config = test_config(&backend.graphql_url());
    config.api.enable_cache = true;
    config.api.fetch_policy = FetchPolicy::CacheFirst;
    let tasks = TaskService::new(Arc::new(GraphQLService::new(&config.api).unwrap()));

    tasks.get_tasks().await.unwrap();
    tasks.get_tasks().await.unwrap();
    assert_eq!(backend.captured_requests().await.len(), 1);

    let created = tasks
        .create_task(&CreateTaskInput::new("Two", TaskStatus::Done, TaskPriority::High))
        .await
        .unwrap();
    assert_eq!(created.id, "2");

    tasks.get_tasks().await.unwrap();
    assert_eq!(backend.captured_requests().await.len(), 3);
}
