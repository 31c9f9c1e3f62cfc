//! Mock credential check standing in for a real identity provider.

use std::time::Duration;

use thiserror::Error;

use crate::slices::auth::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

struct MockAccount {
    id: &'static str,
    username: &'static str,
    password: &'static str,
    email: Option<&'static str>,
}

const MOCK_ACCOUNTS: &[MockAccount] = &[
    MockAccount {
        id: "1",
        username: "admin",
        password: "admin",
        email: Some("admin@example.com"),
    },
    MockAccount {
        id: "2",
        username: "user",
        password: "user",
        email: Some("user@example.com"),
    },
    MockAccount {
        id: "3",
        username: "demo",
        password: "demo",
        email: None,
    },
];

#[derive(Debug, Clone)]
pub struct AuthService {
    success_delay: Duration,
    failure_delay: Duration,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            success_delay: Duration::from_millis(1000),
            failure_delay: Duration::from_millis(500),
        }
    }

    /// Override the simulated round-trip times.
    pub fn with_latency(mut self, success: Duration, failure: Duration) -> Self {
        self.success_delay = success;
        self.failure_delay = failure;
        self
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let account = MOCK_ACCOUNTS
            .iter()
            .find(|a| a.username == username && a.password == password);

        match account {
            Some(account) => {
                tokio::time::sleep(self.success_delay).await;
                Ok(User {
                    id: account.id.to_string(),
                    username: account.username.to_string(),
                    email: account.email.map(str::to_string),
                })
            }
            None => {
                tokio::time::sleep(self.failure_delay).await;
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
