use crate::slices::loading::action::LoadingAction;
use crate::slices::loading::state::{LoadingProcess, LoadingState};
use crate::store::mvi::Reducer;

pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;
    type Action = LoadingAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            LoadingAction::StartLoading {
                process,
                started_at,
            } => {
                let mut operations = state.operations;
                operations.insert(
                    process.operation_name.clone(),
                    LoadingProcess {
                        started_at,
                        ..process
                    },
                );
                LoadingState {
                    operations,
                    ..state
                }
            }
            LoadingAction::CompleteLoading { operation_name } => {
                let mut operations = state.operations;
                operations.remove(&operation_name);
                LoadingState {
                    operations,
                    ..state
                }
            }
            LoadingAction::ClearAllLoadings => LoadingState {
                operations: Default::default(),
                ..state
            },
        }
    }
}
