use crate::services::TaskService;
use crate::slices::tasks::TaskAction;
use crate::store::AppAction;

use super::{Effect, LoadingService};

/// CRUD over the GraphQL backend, each call tracked in the loading slice.
pub struct TaskEffect {
    service: TaskService,
    loading: LoadingService,
}

impl TaskEffect {
    pub fn new(service: TaskService, loading: LoadingService) -> Self {
        Self { service, loading }
    }
}

#[async_trait::async_trait]
impl Effect for TaskEffect {
    fn name(&self) -> &'static str {
        "tasks"
    }

    fn accepts(&self, action: &AppAction) -> bool {
        matches!(
            action,
            AppAction::Task(
                TaskAction::LoadTasks
                    | TaskAction::CreateTask { .. }
                    | TaskAction::UpdateTask { .. }
                    | TaskAction::DeleteTask { .. }
            )
        )
    }

    async fn run(&self, action: AppAction) -> Option<AppAction> {
        let AppAction::Task(action) = action else {
            return None;
        };

        let outcome = match action {
            TaskAction::LoadTasks => {
                let result = self
                    .loading
                    .with_loading("loadTasks", Some("Loading tasks"), self.service.get_tasks())
                    .await;
                match result {
                    Ok(tasks) => TaskAction::LoadTasksSuccess { tasks },
                    Err(e) => TaskAction::LoadTasksFailure { error: e.to_string() },
                }
            }
            TaskAction::CreateTask { input } => {
                let result = self
                    .loading
                    .with_loading(
                        "createTask",
                        Some("Creating task"),
                        self.service.create_task(&input),
                    )
                    .await;
                match result {
                    Ok(task) => TaskAction::CreateTaskSuccess { task },
                    Err(e) => TaskAction::CreateTaskFailure { error: e.to_string() },
                }
            }
            TaskAction::UpdateTask { id, changes } => {
                let result = self
                    .loading
                    .with_loading(
                        "updateTask",
                        Some("Updating task"),
                        self.service.update_task(&id, &changes),
                    )
                    .await;
                match result {
                    Ok(task) => TaskAction::UpdateTaskSuccess { task },
                    Err(e) => TaskAction::UpdateTaskFailure { error: e.to_string() },
                }
            }
            TaskAction::DeleteTask { id } => {
                let result = self
                    .loading
                    .with_loading(
                        "deleteTask",
                        Some("Deleting task"),
                        self.service.delete_task(&id),
                    )
                    .await;
                match result {
                    Ok(deleted) => {
                        if !deleted {
                            tracing::warn!(task_id = %id, "Backend reported nothing deleted");
                        }
                        TaskAction::DeleteTaskSuccess { id }
                    }
                    Err(e) => TaskAction::DeleteTaskFailure { error: e.to_string() },
                }
            }
            _ => return None,
        };
        Some(outcome.into())
    }
}
