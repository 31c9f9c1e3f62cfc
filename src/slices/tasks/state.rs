use serde::Serialize;

use crate::models::Task;
use crate::store::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskState {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_task: Option<Task>,
}

impl SliceState for TaskState {}
