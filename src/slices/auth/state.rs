use serde::{Deserialize, Serialize};

use crate::store::mvi::SliceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
    Error,
}

/// Identity of the logged-in user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl SliceState for AuthState {}
