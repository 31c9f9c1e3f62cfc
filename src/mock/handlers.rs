//! GraphQL request resolution for the mock backend.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::graphql::{GraphQLErrorEntry, API_KEY_HEADER};
use crate::mock::data::MockData;

#[derive(Clone)]
pub struct MockState {
    pub data: Arc<Mutex<MockData>>,
    pub api_key: Option<String>,
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct GraphQLResponse {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLErrorEntry>>,
}

impl GraphQLResponse {
    fn data(data: Value) -> Self {
        Self { data, errors: None }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            data: Value::Null,
            errors: Some(vec![GraphQLErrorEntry::new(message)]),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "widget-store-mock",
    })
}

pub async fn graphql(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    if let Some(expected) = &state.api_key {
        let provided = headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            tracing::warn!("Rejected request without a valid API key");
            return (
                StatusCode::UNAUTHORIZED,
                Json(GraphQLResponse::error("Unauthorized")),
            )
                .into_response();
        }
    }

    if state.latency_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(state.latency_ms)).await;
    }

    let response = resolve(&state.data, &request);
    Json(response).into_response()
}

/// Route one request to its resolver. Failures become GraphQL errors.
pub fn resolve(data: &Mutex<MockData>, request: &GraphQLRequest) -> GraphQLResponse {
    let Some(operation) = operation_name(request) else {
        return GraphQLResponse::error("Could not determine operation name");
    };
    let variables = request.variables.as_ref().unwrap_or(&Value::Null);
    let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    tracing::debug!(operation = %operation, "Resolving mock operation");

    let mut data = data.lock();
    let result = match operation.as_str() {
        "tasks" => Ok(json!({ "tasks": data.tasks })),
        "task" => {
            let task = string_arg(variables, "id").and_then(|id| data.task(id));
            Ok(json!({ "task": task }))
        }
        "users" => Ok(json!({ "users": data.users })),
        "user" => {
            let user = string_arg(variables, "id").and_then(|id| data.user(id));
            Ok(json!({ "user": user }))
        }
        "createTask" => data
            .create_task(variables.get("input"), &now)
            .map(|task| json!({ "createTask": task })),
        "updateTask" => match string_arg(variables, "id") {
            Some(id) => data
                .update_task(id, variables.get("input"), &now)
                .map(|task| json!({ "updateTask": task })),
            None => Err("Task id is required".to_string()),
        },
        "deleteTask" => match string_arg(variables, "id") {
            Some(id) => data
                .delete_task(id)
                .map(|deleted| json!({ "deleteTask": deleted })),
            None => Err("Task id is required".to_string()),
        },
        other => Err(format!("Unknown operation: {}", other)),
    };

    match result {
        Ok(data) => GraphQLResponse::data(data),
        Err(message) => {
            tracing::debug!(operation = %operation, "Mock operation failed: {}", message);
            GraphQLResponse::error(message)
        }
    }
}

fn string_arg<'a>(variables: &'a Value, name: &str) -> Option<&'a str> {
    variables.get(name).and_then(Value::as_str)
}

/// `operationName` when given, otherwise the name after `query`/`mutation`.
fn operation_name(request: &GraphQLRequest) -> Option<String> {
    if let Some(name) = request.operation_name.as_deref().filter(|n| !n.is_empty()) {
        return Some(name.to_string());
    }

    let document = request.query.trim_start();
    let rest = document
        .strip_prefix("query")
        .or_else(|| document.strip_prefix("mutation"))?;
    let name: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(operation: Option<&str>, query: &str, variables: Value) -> GraphQLRequest {
        GraphQLRequest {
            operation_name: operation.map(str::to_string),
            query: query.to_string(),
            variables: Some(variables),
        }
    }

    #[test]
    fn operation_name_falls_back_to_document() {
        let req = request(None, "mutation createTask($input: TaskInput!) { x }", json!({}));
        assert_eq!(operation_name(&req).as_deref(), Some("createTask"));

        let anonymous = request(None, "{ tasks { id } }", json!({}));
        assert_eq!(operation_name(&anonymous), None);
    }

    #[test]
    fn task_lookup_by_id() {
        let data = Mutex::new(MockData::seeded());
        let found = resolve(&data, &request(Some("task"), "", json!({ "id": "3" })));
        assert_eq!(found.data["task"]["title"], "Chill sometimes");

        let missing = resolve(&data, &request(Some("task"), "", json!({ "id": "42" })));
        assert_eq!(missing.data["task"], Value::Null);
        assert!(missing.errors.is_none());
    }

    #[test]
    fn validation_failure_has_null_data() {
        let data = Mutex::new(MockData::seeded());
        let response = resolve(
            &data,
            &request(Some("createTask"), "", json!({ "input": { "title": "x" } })),
        );
        assert_eq!(response.data, Value::Null);
        let errors = response.errors.unwrap();
        assert_eq!(errors[0].message, "Missing required fields: status, priority");
    }
}
