//! The GraphQL client used by every service.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::graphql::cache::{FetchPolicy, QueryCache};
use crate::graphql::error::{GraphQLError, GraphQLErrorEntry};
use crate::graphql::link::{self, RetryPolicy};

/// Header carrying the optional API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    operation_name: &'a str,
    query: &'a str,
    variables: &'a Value,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQLErrorEntry>>,
}

pub struct GraphQLService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout_ms: u64,
    retry: RetryPolicy,
    cache: Option<QueryCache>,
    fetch_policy: FetchPolicy,
}

impl GraphQLService {
    pub fn new(api: &ApiConfig) -> Result<Self, GraphQLError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(api.timeout_ms))
            .build()
            .map_err(GraphQLError::Client)?;

        Ok(Self {
            client,
            endpoint: api.graphql_endpoint.clone(),
            api_key: api.api_key.clone(),
            timeout_ms: api.timeout_ms,
            retry: RetryPolicy::from(api),
            cache: api.enable_cache.then(QueryCache::new),
            fetch_policy: api.fetch_policy,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query and decode its `data` payload.
    pub async fn query<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<T, GraphQLError> {
        let cache = match self.fetch_policy {
            FetchPolicy::NoCache => None,
            FetchPolicy::CacheFirst | FetchPolicy::NetworkOnly => self.cache.as_ref(),
        };
        let key = QueryCache::key(operation.name, &variables);

        if self.fetch_policy == FetchPolicy::CacheFirst {
            if let Some(data) = cache.and_then(|c| c.get(&key)) {
                tracing::trace!(operation = operation.name, "Served from cache");
                return Ok(serde_json::from_value(data)?);
            }
        }

        let data = self.execute(operation, &variables).await?;
        if let Some(cache) = cache {
            cache.insert(key, data.clone());
        }
        Ok(serde_json::from_value(data)?)
    }

    /// Execute a mutation and decode its `data` payload.
    ///
    /// Cached query results are dropped once the mutation succeeds.
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        variables: Value,
    ) -> Result<T, GraphQLError> {
        let data = self.execute(operation, &variables).await?;
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
        Ok(serde_json::from_value(data)?)
    }

    async fn execute(&self, operation: &Operation, variables: &Value) -> Result<Value, GraphQLError> {
        let mut retries = 0;
        loop {
            match self.send_once(operation, variables).await {
                Ok(data) => return Ok(data),
                Err(err) if self.retry.should_retry(&err, retries) => {
                    retries += 1;
                    let delay = self.retry.delay_for(retries);
                    tracing::warn!(
                        operation = operation.name,
                        retry = retries,
                        max_retries = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying after {}",
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    link::report(operation.name, &err);
                    return Err(err);
                }
            }
        }
    }

    async fn send_once(&self, operation: &Operation, variables: &Value) -> Result<Value, GraphQLError> {
        let body = Request {
            operation_name: operation.name,
            query: operation.document,
            variables,
        };

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GraphQLError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if status.is_server_error() {
            return Err(GraphQLError::Server {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let parsed = serde_json::from_slice::<Response>(&bytes);

        if !status.is_success() {
            // Some servers report GraphQL errors alongside a 4xx status.
            if let Ok(Response {
                errors: Some(errors),
                ..
            }) = parsed
            {
                if !errors.is_empty() {
                    return Err(GraphQLError::Graphql(errors));
                }
            }
            return Err(GraphQLError::Http {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let parsed = parsed?;
        if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
            return Err(GraphQLError::Graphql(errors));
        }
        match parsed.data {
            Some(Value::Null) | None => Err(GraphQLError::MissingData),
            Some(data) => Ok(data),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> GraphQLError {
        if err.is_timeout() {
            GraphQLError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            GraphQLError::Network(err)
        }
    }
}
