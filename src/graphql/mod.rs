//! Thin GraphQL client: `query` / `mutate` returning only the `data` payload.
//!
//! Transport failures are retried with jittered exponential backoff;
//! GraphQL application errors and authorization failures (HTTP 401/403)
//! are returned immediately. Every failure passes through the error link,
//! which logs it once with its classification.

mod cache;
mod error;
mod link;
mod service;

pub use cache::{FetchPolicy, QueryCache};
pub use error::{GraphQLError, GraphQLErrorEntry};
pub use link::RetryPolicy;
pub use service::{GraphQLService, Operation, API_KEY_HEADER};
