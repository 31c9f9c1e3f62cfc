//! Error classification for GraphQL requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphQLErrorEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }
}

/// Errors that can occur while executing a GraphQL operation.
#[derive(Debug, Error)]
pub enum GraphQLError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection refused, reset, DNS failure...
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A single attempt exceeded the configured timeout
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Upstream answered with a 5xx status
    #[error("Server error: HTTP {status}")]
    Server { status: u16 },

    /// Upstream answered with 401 or 403
    #[error("Unauthorized: HTTP {status}")]
    Unauthorized { status: u16 },

    /// Any other non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response carried a non-empty `errors` array
    #[error("{}", join_messages(.0))]
    Graphql(Vec<GraphQLErrorEntry>),

    /// Neither `data` nor `errors` in the response
    #[error("Response contained no data")]
    MissingData,

    /// `data` did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn join_messages(errors: &[GraphQLErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl GraphQLError {
    /// Transport-level failures that another attempt might fix.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GraphQLError::Network(_) | GraphQLError::Timeout { .. } | GraphQLError::Server { .. }
        )
    }

    /// True for failures outside the GraphQL application layer.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            GraphQLError::Network(_)
                | GraphQLError::Timeout { .. }
                | GraphQLError::Server { .. }
                | GraphQLError::Unauthorized { .. }
                | GraphQLError::Http { .. }
        )
    }

    /// Get error type string for logs
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphQLError::Client(_) => "client_error",
            GraphQLError::Network(_) => "network_error",
            GraphQLError::Timeout { .. } => "timeout",
            GraphQLError::Server { .. } => "server_error",
            GraphQLError::Unauthorized { .. } => "unauthorized",
            GraphQLError::Http { .. } => "http_error",
            GraphQLError::Graphql(_) => "graphql_error",
            GraphQLError::MissingData => "missing_data",
            GraphQLError::Decode(_) => "decode_error",
        }
    }
}
