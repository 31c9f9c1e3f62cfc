use std::sync::Arc;

use parking_lot::Mutex;

/// Selector that recomputes only when its input slice is a new allocation.
///
/// The store replaces a slice's `Arc` only when the slice actually changed,
/// so pointer identity is a sound cache key.
pub struct MemoizedSelector<I, O, F> {
    project: F,
    cache: Mutex<Memo<I, O>>,
}

struct Memo<I, O> {
    last: Option<(Arc<I>, O)>,
    recomputations: usize,
}

impl<I, O, F> MemoizedSelector<I, O, F>
where
    O: Clone,
    F: Fn(&I) -> O,
{
    pub fn new(project: F) -> Self {
        Self {
            project,
            cache: Mutex::new(Memo {
                last: None,
                recomputations: 0,
            }),
        }
    }

    pub fn select(&self, input: &Arc<I>) -> O {
        let mut memo = self.cache.lock();
        if let Some((cached_input, output)) = &memo.last {
            if Arc::ptr_eq(cached_input, input) {
                return output.clone();
            }
        }
        let output = (self.project)(input);
        memo.last = Some((Arc::clone(input), output.clone()));
        memo.recomputations += 1;
        output
    }

    /// How many times the projection has actually run.
    pub fn recomputations(&self) -> usize {
        self.cache.lock().recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::widget_registry::{WidgetRegistryAction, WidgetRegistryState};
    use crate::store::{AppAction, AppState};

    #[test]
    fn recomputes_only_when_slice_changes() {
        let ready_count = MemoizedSelector::new(|registry: &WidgetRegistryState| {
            registry.widgets.len()
        });
        let state = AppState::default();
        assert_eq!(ready_count.select(&state.widget_registry), 0);

        let state = state.reduce(&AppAction::Init);
        assert_eq!(ready_count.select(&state.widget_registry), 0);
        assert_eq!(ready_count.recomputations(), 1);

        let state = state.reduce(&AppAction::WidgetRegistry(
            WidgetRegistryAction::RegisterWidget { id: "clock".into() },
        ));
        assert_eq!(ready_count.select(&state.widget_registry), 1);
        assert_eq!(ready_count.recomputations(), 2);
    }
}
