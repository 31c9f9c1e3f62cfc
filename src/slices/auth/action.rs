use crate::slices::auth::state::User;
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Login { username: String, password: String },
    LoginSuccess { user: User },
    LoginFailure { error: String },
    Logout,
    ClearError,
}

impl Action for AuthAction {
    fn name(&self) -> &'static str {
        match self {
            AuthAction::Login { .. } => "[Auth] Login",
            AuthAction::LoginSuccess { .. } => "[Auth] Login Success",
            AuthAction::LoginFailure { .. } => "[Auth] Login Failure",
            AuthAction::Logout => "[Auth] Logout",
            AuthAction::ClearError => "[Auth] Clear Error",
        }
    }
}
