use std::sync::Arc;

use serde::Serialize;

use crate::slices::app_metadata::{AppMetadataAction, AppMetadataReducer, AppMetadataState};
use crate::slices::auth::{AuthAction, AuthReducer, AuthState};
use crate::slices::loading::{LoadingAction, LoadingReducer, LoadingState};
use crate::slices::notifications::{NotificationState, NotificationsAction, NotificationsReducer};
use crate::slices::tasks::{TaskAction, TaskReducer, TaskState};
use crate::slices::theme::{ThemeAction, ThemeReducer, ThemeState};
use crate::slices::viewport::{ViewportAction, ViewportReducer, ViewportState};
use crate::slices::widget_registry::{
    WidgetRegistryAction, WidgetRegistryReducer, WidgetRegistryState,
};
use crate::store::mvi::{Action, Reducer};

/// Root action routed to every slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Dispatched once after effects are registered.
    Init,
    Auth(AuthAction),
    Theme(ThemeAction),
    Viewport(ViewportAction),
    Loading(LoadingAction),
    Notifications(NotificationsAction),
    WidgetRegistry(WidgetRegistryAction),
    AppMetadata(AppMetadataAction),
    Task(TaskAction),
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Init => "[Store] Init",
            AppAction::Auth(action) => action.name(),
            AppAction::Theme(action) => action.name(),
            AppAction::Viewport(action) => action.name(),
            AppAction::Loading(action) => action.name(),
            AppAction::Notifications(action) => action.name(),
            AppAction::WidgetRegistry(action) => action.name(),
            AppAction::AppMetadata(action) => action.name(),
            AppAction::Task(action) => action.name(),
        }
    }
}

/// Narrows a root action to the action type of one slice.
pub trait SliceOf: Sized {
    fn slice_of(action: &AppAction) -> Option<&Self>;
}

macro_rules! slice_actions {
    ($($variant:ident => $action:ty),* $(,)?) => {
        $(
            impl From<$action> for AppAction {
                fn from(action: $action) -> Self {
                    AppAction::$variant(action)
                }
            }

            impl SliceOf for $action {
                fn slice_of(action: &AppAction) -> Option<&Self> {
                    match action {
                        AppAction::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

slice_actions! {
    Auth => AuthAction,
    Theme => ThemeAction,
    Viewport => ViewportAction,
    Loading => LoadingAction,
    Notifications => NotificationsAction,
    WidgetRegistry => WidgetRegistryAction,
    AppMetadata => AppMetadataAction,
    Task => TaskAction,
}

/// All slices, composed under their store keys.
///
/// Slices are shared behind `Arc`: a dispatch that leaves a slice unchanged
/// keeps the very same allocation, so `Arc::ptr_eq` tells subscribers and
/// memoized selectors whether anything they depend on moved.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub auth: Arc<AuthState>,
    pub theme: Arc<ThemeState>,
    pub viewport: Arc<ViewportState>,
    pub loading: Arc<LoadingState>,
    pub notifications: Arc<NotificationState>,
    pub widget_registry: Arc<WidgetRegistryState>,
    pub app_metadata: Arc<AppMetadataState>,
    pub tasks: Arc<TaskState>,
}

impl AppState {
    /// Run `action` through every slice reducer.
    pub fn reduce(&self, action: &AppAction) -> AppState {
        AppState {
            auth: reduce_slice::<AuthReducer>(&self.auth, action),
            theme: reduce_slice::<ThemeReducer>(&self.theme, action),
            viewport: reduce_slice::<ViewportReducer>(&self.viewport, action),
            loading: reduce_slice::<LoadingReducer>(&self.loading, action),
            notifications: reduce_slice::<NotificationsReducer>(&self.notifications, action),
            widget_registry: reduce_slice::<WidgetRegistryReducer>(&self.widget_registry, action),
            app_metadata: reduce_slice::<AppMetadataReducer>(&self.app_metadata, action),
            tasks: reduce_slice::<TaskReducer>(&self.tasks, action),
        }
    }

    /// True when every slice is the same allocation as in `other`.
    pub fn same_slices(&self, other: &AppState) -> bool {
        Arc::ptr_eq(&self.auth, &other.auth)
            && Arc::ptr_eq(&self.theme, &other.theme)
            && Arc::ptr_eq(&self.viewport, &other.viewport)
            && Arc::ptr_eq(&self.loading, &other.loading)
            && Arc::ptr_eq(&self.notifications, &other.notifications)
            && Arc::ptr_eq(&self.widget_registry, &other.widget_registry)
            && Arc::ptr_eq(&self.app_metadata, &other.app_metadata)
            && Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

fn reduce_slice<R>(slice: &Arc<R::State>, action: &AppAction) -> Arc<R::State>
where
    R: Reducer,
    R::Action: SliceOf,
{
    let Some(action) = R::Action::slice_of(action) else {
        return Arc::clone(slice);
    };
    let next = R::reduce(R::State::clone(slice), action.clone());
    if next == **slice {
        Arc::clone(slice)
    } else {
        Arc::new(next)
    }
}
