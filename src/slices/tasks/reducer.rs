use crate::slices::tasks::action::TaskAction;
use crate::slices::tasks::state::TaskState;
use crate::store::mvi::Reducer;

pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = TaskState;
    type Action = TaskAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            TaskAction::LoadTasks
            | TaskAction::CreateTask { .. }
            | TaskAction::UpdateTask { .. }
            | TaskAction::DeleteTask { .. } => TaskState {
                loading: true,
                error: None,
                ..state
            },
            TaskAction::LoadTasksSuccess { tasks } => TaskState {
                tasks,
                loading: false,
                error: None,
                ..state
            },
            TaskAction::CreateTaskSuccess { task } => {
                let mut tasks = state.tasks;
                tasks.push(task);
                TaskState {
                    tasks,
                    loading: false,
                    error: None,
                    ..state
                }
            }
            TaskAction::UpdateTaskSuccess { task } => {
                let selected_task = match state.selected_task {
                    Some(selected) if selected.id == task.id => Some(task.clone()),
                    other => other,
                };
                let tasks = state
                    .tasks
                    .into_iter()
                    .map(|existing| {
                        if existing.id == task.id {
                            task.clone()
                        } else {
                            existing
                        }
                    })
                    .collect();
                TaskState {
                    tasks,
                    loading: false,
                    error: None,
                    selected_task,
                }
            }
            TaskAction::DeleteTaskSuccess { id } => {
                let mut tasks = state.tasks;
                tasks.retain(|task| task.id != id);
                let selected_task = state.selected_task.filter(|task| task.id != id);
                TaskState {
                    tasks,
                    loading: false,
                    error: None,
                    selected_task,
                }
            }
            TaskAction::LoadTasksFailure { error }
            | TaskAction::CreateTaskFailure { error }
            | TaskAction::UpdateTaskFailure { error }
            | TaskAction::DeleteTaskFailure { error } => TaskState {
                loading: false,
                error: Some(error),
                ..state
            },
            TaskAction::SelectTask { task } => TaskState {
                selected_task: task,
                ..state
            },
        }
    }
}
