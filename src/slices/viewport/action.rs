use crate::slices::viewport::state::Breakpoint;
use crate::store::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportAction {
    BreakpointChanged { breakpoint: Breakpoint },
    /// Raw window width in CSS pixels; the reducer derives the breakpoint.
    WidthChanged { width: u32 },
}

impl Action for ViewportAction {
    fn name(&self) -> &'static str {
        match self {
            ViewportAction::BreakpointChanged { .. } => "[Viewport] Breakpoint Changed",
            ViewportAction::WidthChanged { .. } => "[Viewport] Width Changed",
        }
    }
}
