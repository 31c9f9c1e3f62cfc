//! External operations the effects call into.

mod auth;
mod tasks;

pub use auth::{AuthError, AuthService};
pub use tasks::{operations, TaskService};
