use crate::slices::loading::state::LoadingProcess;
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingAction {
    StartLoading { process: LoadingProcess, started_at: i64 },
    CompleteLoading { operation_name: String },
    ClearAllLoadings,
}

impl Action for LoadingAction {
    fn name(&self) -> &'static str {
        match self {
            LoadingAction::StartLoading { .. } => "[Loading] Start Loading",
            LoadingAction::CompleteLoading { .. } => "[Loading] Complete Loading",
            LoadingAction::ClearAllLoadings => "[Loading] Clear All Loadings",
        }
    }
}
