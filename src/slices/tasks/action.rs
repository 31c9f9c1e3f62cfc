use crate::models::{CreateTaskInput, Task, UpdateTaskInput};
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
    LoadTasks,
    LoadTasksSuccess { tasks: Vec<Task> },
    LoadTasksFailure { error: String },
    CreateTask { input: CreateTaskInput },
    CreateTaskSuccess { task: Task },
    CreateTaskFailure { error: String },
    UpdateTask { id: String, changes: UpdateTaskInput },
    UpdateTaskSuccess { task: Task },
    UpdateTaskFailure { error: String },
    DeleteTask { id: String },
    DeleteTaskSuccess { id: String },
    DeleteTaskFailure { error: String },
    SelectTask { task: Option<Task> },
}

impl Action for TaskAction {
    fn name(&self) -> &'static str {
        match self {
            TaskAction::LoadTasks => "[Task] Load Tasks",
            TaskAction::LoadTasksSuccess { .. } => "[Task] Load Tasks Success",
            TaskAction::LoadTasksFailure { .. } => "[Task] Load Tasks Failure",
            TaskAction::CreateTask { .. } => "[Task] Create Task",
            TaskAction::CreateTaskSuccess { .. } => "[Task] Create Task Success",
            TaskAction::CreateTaskFailure { .. } => "[Task] Create Task Failure",
            TaskAction::UpdateTask { .. } => "[Task] Update Task",
            TaskAction::UpdateTaskSuccess { .. } => "[Task] Update Task Success",
            TaskAction::UpdateTaskFailure { .. } => "[Task] Update Task Failure",
            TaskAction::DeleteTask { .. } => "[Task] Delete Task",
            TaskAction::DeleteTaskSuccess { .. } => "[Task] Delete Task Success",
            TaskAction::DeleteTaskFailure { .. } => "[Task] Delete Task Failure",
            TaskAction::SelectTask { .. } => "[Task] Select Task",
        }
    }
}
