use crate::slices::auth::action::AuthAction;
use crate::slices::auth::state::{AuthState, AuthStatus};
use crate::store::mvi::Reducer;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            AuthAction::Login { .. } => AuthState {
                status: AuthStatus::Authenticating,
                error: None,
                ..state
            },
            AuthAction::LoginSuccess { user } => AuthState {
                status: AuthStatus::Authenticated,
                user: Some(user),
                error: None,
            },
            AuthAction::LoginFailure { error } => AuthState {
                status: AuthStatus::Error,
                user: None,
                error: Some(error),
            },
            AuthAction::Logout => AuthState::default(),
            AuthAction::ClearError => AuthState {
                error: None,
                ..state
            },
        }
    }
}
