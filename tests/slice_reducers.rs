//! Reducer properties exercised through the root state.

use std::sync::Arc;

use widget_store::models::{Task, TaskPriority, TaskStatus};
use widget_store::slices::loading::{selectors::select_is_loading, LoadingAction, LoadingProcess};
use widget_store::slices::notifications::{
    selectors::{select_able_to_show_toast, select_toast_by_key, select_visible_toasts},
    NotificationKey, NotificationState, NotificationsAction, NotificationsReducer, ToastType,
};
use widget_store::slices::tasks::{selectors::select_task_by_id, TaskAction};
use widget_store::slices::theme::{ResolvedTheme, ThemeAction, ThemePreference};
use widget_store::slices::viewport::{Breakpoint, DeviceType, ViewportAction};
use widget_store::slices::widget_registry::{
    selectors::select_widget_by_id, WidgetRegistryAction, WidgetStatus,
};
use widget_store::store::mvi::Reducer;
use widget_store::store::{AppAction, AppState};

fn show(key: NotificationKey, id: &str, timestamp: i64) -> NotificationsAction {
    NotificationsAction::ShowToast {
        id: id.to_string(),
        toast_type: ToastType::Error,
        message: format!("{:?}", key),
        key,
        duration_ms: None,
        dismissible: None,
        timestamp,
    }
}

fn apply(state: AppState, actions: impl IntoIterator<Item = AppAction>) -> AppState {
    actions
        .into_iter()
        .fold(state, |state, action| state.reduce(&action))
}

fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        status: TaskStatus::Todo,
        priority: TaskPriority::Low,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        assigned_to: None,
    }
}

#[test]
fn unrelated_actions_keep_every_slice_allocation() {
    let state = AppState::default();
    let samples: Vec<AppAction> = vec![
        AppAction::Init,
        LoadingAction::CompleteLoading {
            operation_name: "never-started".to_string(),
        }
        .into(),
        NotificationsAction::DismissToast {
            key: NotificationKey::GenericError,
        }
        .into(),
        WidgetRegistryAction::UnregisterWidget {
            id: "ghost".to_string(),
        }
        .into(),
        ViewportAction::BreakpointChanged {
            breakpoint: Breakpoint::Xl,
        }
        .into(),
    ];

    for action in samples {
        let next = state.reduce(&action);
        assert!(next.same_slices(&state), "{:?} replaced a slice", action);
    }
}

#[test]
fn slice_action_leaves_other_slices_shared() {
    let state = AppState::default();
    let next = state.reduce(&AppAction::from(ViewportAction::WidthChanged { width: 500 }));

    assert!(!Arc::ptr_eq(&state.viewport, &next.viewport));
    assert!(Arc::ptr_eq(&state.auth, &next.auth));
    assert!(Arc::ptr_eq(&state.theme, &next.theme));
    assert!(Arc::ptr_eq(&state.loading, &next.loading));
    assert!(Arc::ptr_eq(&state.notifications, &next.notifications));
    assert!(Arc::ptr_eq(&state.widget_registry, &next.widget_registry));
    assert!(Arc::ptr_eq(&state.app_metadata, &next.app_metadata));
    assert!(Arc::ptr_eq(&state.tasks, &next.tasks));
    assert_eq!(next.viewport.breakpoint, Breakpoint::Xs);
    assert_eq!(next.viewport.device_type, DeviceType::Mobile);
}

#[test]
fn repeated_toast_counts_and_keeps_first_id() {
    let state = apply(
        AppState::default(),
        [
            show(NotificationKey::NetworkError, "first", 1_000).into(),
            show(NotificationKey::NetworkError, "second", 2_000).into(),
        ],
    );

    let toast = select_toast_by_key(&state, NotificationKey::NetworkError).unwrap();
    assert_eq!(toast.count, 2);
    assert_eq!(toast.id, "first");
    assert_eq!(toast.first_occurred_at, 1_000);
    assert_eq!(toast.last_occurred_at, 2_000);
    assert_eq!(state.notifications.visible_keys, vec![NotificationKey::NetworkError]);
}

#[test]
fn visible_toasts_are_capped_but_all_recorded() {
    let keys = [
        NotificationKey::TaskCreateError,
        NotificationKey::TaskUpdateError,
        NotificationKey::TaskDeleteError,
        NotificationKey::NetworkError,
        NotificationKey::AuthError,
    ];
    let state = apply(
        AppState::default(),
        keys.iter()
            .enumerate()
            .map(|(i, key)| AppAction::from(show(*key, &format!("id-{}", i), i as i64))),
    );

    let max_visible = state.notifications.max_visible;
    assert_eq!(state.notifications.visible_keys.len(), max_visible);
    assert_eq!(state.notifications.visible_keys, keys[..max_visible].to_vec());
    assert_eq!(state.notifications.toasts.len(), keys.len());
    assert!(!select_able_to_show_toast(&state));
}

#[test]
fn toast_without_id_is_discarded() {
    let state = NotificationsReducer::reduce(
        NotificationState::default(),
        show(NotificationKey::GenericError, "  ", 5),
    );
    assert!(state.toasts.is_empty());
    assert!(state.visible_keys.is_empty());
}

#[test]
fn dismiss_hides_but_retains_record() {
    let state = apply(
        AppState::default(),
        [
            show(NotificationKey::GenericSuccess, "a", 1).into(),
            NotificationsAction::DismissToast {
                key: NotificationKey::GenericSuccess,
            }
            .into(),
        ],
    );
    assert!(select_visible_toasts(&state).is_empty());
    assert!(select_toast_by_key(&state, NotificationKey::GenericSuccess).is_some());
}

#[test]
fn stale_auto_dismiss_is_ignored() {
    let state = apply(
        AppState::default(),
        [
            show(NotificationKey::GenericError, "a", 100).into(),
            show(NotificationKey::GenericError, "b", 200).into(),
            NotificationsAction::AutoDismissToast {
                key: NotificationKey::GenericError,
                toast_id: "a".to_string(),
                scheduled_at: 100,
            }
            .into(),
        ],
    );
    assert_eq!(state.notifications.visible_keys, vec![NotificationKey::GenericError]);

    let state = state.reduce(
        &NotificationsAction::AutoDismissToast {
            key: NotificationKey::GenericError,
            toast_id: "b".to_string(),
            scheduled_at: 200,
        }
        .into(),
    );
    assert!(state.notifications.visible_keys.is_empty());
}

#[test]
fn repeat_within_same_millisecond_keeps_toast_visible() {
    let state = apply(
        AppState::default(),
        [
            show(NotificationKey::NetworkError, "first", 500).into(),
            show(NotificationKey::NetworkError, "second", 500).into(),
            NotificationsAction::AutoDismissToast {
                key: NotificationKey::NetworkError,
                toast_id: "first".to_string(),
                scheduled_at: 500,
            }
            .into(),
        ],
    );

    assert_eq!(state.notifications.visible_keys, vec![NotificationKey::NetworkError]);
    let toast = &state.notifications.toasts[&NotificationKey::NetworkError];
    assert_eq!(toast.id, "first");
    assert_eq!(toast.last_occurrence_id, "second");
    assert_eq!(toast.count, 2);
}

#[test]
fn blank_id_toast_is_discarded() {
    let action = show(NotificationKey::GenericError, "   ", 1);
    assert!(!action.is_valid());

    let state = AppState::default();
    let next = state.reduce(&action.into());
    assert!(Arc::ptr_eq(&state.notifications, &next.notifications));
}

#[test]
fn explicit_preference_ignores_last_system_theme() {
    let state = apply(
        AppState::default(),
        [
            ThemeAction::SetPreference {
                preference: ThemePreference::System,
            }
            .into(),
            ThemeAction::SystemPreferenceChanged {
                system_theme: ResolvedTheme::Dark,
            }
            .into(),
        ],
    );
    assert_eq!(state.theme.resolved, ResolvedTheme::Dark);

    let state = state.reduce(
        &ThemeAction::SetPreference {
            preference: ThemePreference::Light,
        }
        .into(),
    );
    assert_eq!(state.theme.preference, ThemePreference::Light);
    assert_eq!(state.theme.resolved, ResolvedTheme::Light);
}

#[test]
fn widget_lifecycle_ends_unregistered() {
    let id = "calendar".to_string();
    let state = apply(
        AppState::default(),
        [
            WidgetRegistryAction::RegisterWidget { id: id.clone() }.into(),
            WidgetRegistryAction::WidgetLoading { id: id.clone() }.into(),
            WidgetRegistryAction::WidgetLoaded {
                id: id.clone(),
                loaded_at: 42,
            }
            .into(),
        ],
    );
    let widget = select_widget_by_id(&state, &id).unwrap();
    assert_eq!(widget.status, WidgetStatus::Ready);
    assert_eq!(widget.loaded_at, Some(42));

    let state = state.reduce(&WidgetRegistryAction::UnregisterWidget { id: id.clone() }.into());
    assert!(select_widget_by_id(&state, &id).is_none());
}

#[test]
fn completing_one_operation_leaves_the_other() {
    let state = apply(
        AppState::default(),
        [
            LoadingAction::StartLoading {
                process: LoadingProcess::new("loadTasks", None),
                started_at: 1,
            }
            .into(),
            LoadingAction::StartLoading {
                process: LoadingProcess::new("createTask", Some("Creating".to_string())),
                started_at: 2,
            }
            .into(),
            LoadingAction::CompleteLoading {
                operation_name: "loadTasks".to_string(),
            }
            .into(),
        ],
    );

    let names: Vec<&String> = state.loading.operations.keys().collect();
    assert_eq!(names, vec!["createTask"]);
    assert_eq!(state.loading.operations["createTask"].started_at, 2);
    assert!(select_is_loading(&state));
}

#[test]
fn task_crud_updates_list_and_selection() {
    let state = apply(
        AppState::default(),
        [
            TaskAction::LoadTasks.into(),
            TaskAction::LoadTasksSuccess {
                tasks: vec![task("1", "one"), task("2", "two")],
            }
            .into(),
            TaskAction::SelectTask {
                task: Some(task("2", "two")),
            }
            .into(),
            TaskAction::UpdateTaskSuccess {
                task: task("2", "renamed"),
            }
            .into(),
        ],
    );
    assert!(!state.tasks.loading);
    assert_eq!(select_task_by_id(&state, "2").unwrap().title, "renamed");
    assert_eq!(state.tasks.selected_task.as_ref().unwrap().title, "renamed");

    let state = apply(
        state,
        [
            TaskAction::DeleteTask { id: "2".to_string() }.into(),
            TaskAction::DeleteTaskSuccess { id: "2".to_string() }.into(),
        ],
    );
    assert_eq!(state.tasks.tasks.len(), 1);
    assert!(state.tasks.selected_task.is_none());
}

#[test]
fn task_failure_records_error_and_stops_loading() {
    let state = apply(
        AppState::default(),
        [
            TaskAction::CreateTask {
                input: Default::default(),
            }
            .into(),
            TaskAction::CreateTaskFailure {
                error: "Missing required fields: title".to_string(),
            }
            .into(),
        ],
    );
    assert!(!state.tasks.loading);
    assert_eq!(
        state.tasks.error.as_deref(),
        Some("Missing required fields: title")
    );
}
