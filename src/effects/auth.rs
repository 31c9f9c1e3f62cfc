use crate::services::AuthService;
use crate::slices::auth::AuthAction;
use crate::store::AppAction;

use super::Effect;

/// `Login` → credential check → `LoginSuccess` / `LoginFailure`.
pub struct AuthEffect {
    service: AuthService,
}

impl AuthEffect {
    pub fn new(service: AuthService) -> Self {
        Self { service }
    }
}

#[async_trait::async_trait]
impl Effect for AuthEffect {
    fn name(&self) -> &'static str {
        "auth-login"
    }

    fn accepts(&self, action: &AppAction) -> bool {
        matches!(action, AppAction::Auth(AuthAction::Login { .. }))
    }

    async fn run(&self, action: AppAction) -> Option<AppAction> {
        let AppAction::Auth(AuthAction::Login { username, password }) = action else {
            return None;
        };

        let outcome = match self.service.login(&username, &password).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "Login succeeded");
                AuthAction::LoginSuccess { user }
            }
            Err(e) => {
                tracing::warn!(username = %username, "Login failed: {}", e);
                AuthAction::LoginFailure {
                    error: e.to_string(),
                }
            }
        };
        Some(outcome.into())
    }
}
