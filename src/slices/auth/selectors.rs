use crate::slices::auth::state::{AuthState, AuthStatus, User};
use crate::store::AppState;

pub fn select_auth_state(state: &AppState) -> &AuthState {
    &state.auth
}

pub fn select_auth_status(state: &AppState) -> AuthStatus {
    state.auth.status
}

pub fn select_auth_user(state: &AppState) -> Option<&User> {
    state.auth.user.as_ref()
}

pub fn select_auth_error(state: &AppState) -> Option<&str> {
    state.auth.error.as_deref()
}

pub fn select_is_authenticated(state: &AppState) -> bool {
    state.auth.status == AuthStatus::Authenticated
}

pub fn select_is_authenticating(state: &AppState) -> bool {
    state.auth.status == AuthStatus::Authenticating
}

pub fn select_is_auth_error(state: &AppState) -> bool {
    state.auth.status == AuthStatus::Error
}
