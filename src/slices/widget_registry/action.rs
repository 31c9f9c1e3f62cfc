use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetRegistryAction {
    RegisterWidget { id: String },
    WidgetLoading { id: String },
    WidgetLoaded { id: String, loaded_at: i64 },
    WidgetError { id: String, error_message: String },
    UnregisterWidget { id: String },
}

impl Action for WidgetRegistryAction {
    fn name(&self) -> &'static str {
        match self {
            WidgetRegistryAction::RegisterWidget { .. } => "[Widget Registry] Register Widget",
            WidgetRegistryAction::WidgetLoading { .. } => "[Widget Registry] Widget Loading",
            WidgetRegistryAction::WidgetLoaded { .. } => "[Widget Registry] Widget Loaded",
            WidgetRegistryAction::WidgetError { .. } => "[Widget Registry] Widget Error",
            WidgetRegistryAction::UnregisterWidget { .. } => "[Widget Registry] Unregister Widget",
        }
    }
}
