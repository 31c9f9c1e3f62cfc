use crate::slices::viewport::action::ViewportAction;
use crate::slices::viewport::state::{Breakpoint, ViewportState};
use crate::store::mvi::Reducer;

pub struct ViewportReducer;

impl Reducer for ViewportReducer {
    type State = ViewportState;
    type Action = ViewportAction;

    fn reduce(_state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ViewportAction::BreakpointChanged { breakpoint } => ViewportState::at(breakpoint),
            ViewportAction::WidthChanged { width } => {
                ViewportState::at(Breakpoint::from_width(width))
            }
        }
    }
}
