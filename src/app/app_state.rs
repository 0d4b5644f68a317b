use super::terminal_view::TerminalView;
use crate::layout::LayoutRegions;
use crate::scroll::ScrollState;
use crate::widget::SearchWidget;

/// Which component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    SearchButton,
}

/// Application state
pub struct App {
    pub view: TerminalView,
    pub widget: SearchWidget,
    pub focus: Focus,
    pub results_scroll: ScrollState,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    pub fn new(widget: SearchWidget) -> Self {
        let view = TerminalView::new(widget.ids().clone());

        Self {
            view,
            widget,
            focus: Focus::InputField,
            results_scroll: ScrollState::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::InputField => Focus::SearchButton,
            Focus::SearchButton => Focus::InputField,
        };
    }

    /// Render any response that arrived since the last tick
    pub fn poll_search(&mut self) {
        if self.widget.poll_responses(&mut self.view) {
            self.results_scroll.reset();
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
