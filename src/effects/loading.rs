use std::future::Future;

use crate::slices::loading::{LoadingAction, LoadingProcess};
use crate::store::StoreHandle;

/// Brackets a future with `StartLoading` / `CompleteLoading`.
#[derive(Clone)]
pub struct LoadingService {
    store: StoreHandle,
}

impl LoadingService {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Run `work` while `operation_name` is marked as loading.
    ///
    /// `CompleteLoading` is dispatched when `work` finishes, fails or is
    /// dropped mid-flight.
    pub async fn with_loading<F, T>(
        &self,
        operation_name: &str,
        message: Option<&str>,
        work: F,
    ) -> T
    where
        F: Future<Output = T>,
    {
        let process = LoadingProcess::new(operation_name, message.map(str::to_string));
        let started_at = chrono::Utc::now().timestamp_millis();
        if let Err(e) = self.store.dispatch(LoadingAction::StartLoading {
            process,
            started_at,
        }) {
            tracing::warn!(operation = operation_name, error = %e, "Loading not tracked");
        }

        let _complete = scopeguard::guard(operation_name.to_string(), |operation_name| {
            let _ = self
                .store
                .dispatch(LoadingAction::CompleteLoading { operation_name });
        });

        work.await
    }
}
