//! HTTP surface of the mock GraphQL backend.

mod common;

use std::sync::Arc;

use common::{start_mock, start_mock_with, test_config};
use serde_json::{json, Value};
use widget_store::config::MockConfig;
use widget_store::graphql::{GraphQLError, GraphQLService};
use widget_store::services::TaskService;

#[tokio::test]
async fn test_health_endpoint() {
    let mock = start_mock().await;
    let body: Value = reqwest::get(format!("http://{}/health", mock.addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn operation_name_is_read_from_the_document() {
    let mock = start_mock().await;
    let response = reqwest::Client::new()
        .post(mock.graphql_url())
        .json(&json!({ "query": "query users { users { id name } }" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 3);
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn validation_errors_use_graphql_envelope() {
    let mock = start_mock().await;
    let body: Value = reqwest::Client::new()
        .post(mock.graphql_url())
        .json(&json!({
            "operationName": "createTask",
            "query": "mutation createTask($input: TaskInput!) { createTask(input: $input) { id } }",
            "variables": { "input": { "title": "X" } }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"], Value::Null);
    assert_eq!(
        body["errors"][0]["message"],
        "Missing required fields: status, priority"
    );
}

#[tokio::test]
async fn api_key_is_enforced() {
    let mock = start_mock_with(MockConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        latency_ms: 0,
        api_key: Some("letmein".to_string()),
    })
    .await;

    let config = test_config(&mock.graphql_url());
    let anonymous = TaskService::new(Arc::new(GraphQLService::new(&config.api).unwrap()));
    let err = anonymous.get_tasks().await.unwrap_err();
    assert!(matches!(err, GraphQLError::Unauthorized { status: 401 }));

    let mut config = test_config(&mock.graphql_url());
    config.api.api_key = Some("letmein".to_string());
    let authorized = TaskService::new(Arc::new(GraphQLService::new(&config.api).unwrap()));
    assert_eq!(authorized.get_tasks().await.unwrap().len(), 5);
    assert_eq!(authorized.get_users().await.unwrap().len(), 3);
    assert_eq!(
        authorized.get_user("2").await.unwrap().map(|u| u.name),
        Some("User".to_string())
    );
    assert!(authorized.get_task("99").await.unwrap().is_none());
}
