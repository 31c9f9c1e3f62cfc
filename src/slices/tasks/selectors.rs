use crate::models::{Task, TaskStatus};
use crate::store::AppState;

pub fn select_tasks(state: &AppState) -> &[Task] {
    &state.tasks.tasks
}

pub fn select_tasks_loading(state: &AppState) -> bool {
    state.tasks.loading
}

pub fn select_tasks_error(state: &AppState) -> Option<&str> {
    state.tasks.error.as_deref()
}

pub fn select_selected_task(state: &AppState) -> Option<&Task> {
    state.tasks.selected_task.as_ref()
}

pub fn select_task_by_id<'a>(state: &'a AppState, id: &str) -> Option<&'a Task> {
    state.tasks.tasks.iter().find(|task| task.id == id)
}

pub fn select_tasks_by_status(state: &AppState, status: TaskStatus) -> Vec<&Task> {
    state
        .tasks
        .tasks
        .iter()
        .filter(|task| task.status == status)
        .collect()
}
