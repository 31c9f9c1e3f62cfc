//! Mock GraphQL backend: seeded tasks and users served over HTTP.
//!
//! `POST /graphql` resolves `tasks`, `task`, `users`, `user`, `createTask`,
//! `updateTask` and `deleteTask`. Validation failures are answered with
//! HTTP 200 and `{"data": null, "errors": [...]}`, like a real GraphQL
//! server. `GET /health` reports liveness.

mod data;
mod handlers;
mod server;

pub use data::MockData;
pub use handlers::{resolve, GraphQLRequest, GraphQLResponse, HealthStatus, MockState};
pub use server::{build_router, shutdown_signal, MockHandle, MockServer, ServerError};
