//! Terminal-side elements the widget binds to

use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::results::ResultNode;
use crate::widget::{UiBinding, WidgetIds};

/// Text input plus results container, addressed by widget ids
pub struct TerminalView {
    ids: WidgetIds,
    pub input: TextArea<'static>,
    results: Vec<ResultNode>,
}

fn create_input_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

impl TerminalView {
    pub fn new(ids: WidgetIds) -> Self {
        Self {
            ids,
            input: create_input_textarea(),
            results: Vec::new(),
        }
    }

    pub fn ids(&self) -> &WidgetIds {
        &self.ids
    }

    /// Children of the results container
    pub fn results(&self) -> &[ResultNode] {
        &self.results
    }

    /// Current single-line query text
    pub fn query(&self) -> &str {
        self.input.lines().first().map(String::as_str).unwrap_or("")
    }
}

impl UiBinding for TerminalView {
    fn value(&self, id: &str) -> String {
        if id == self.ids.input {
            self.query().to_string()
        } else {
            String::new()
        }
    }

    fn clear(&mut self, id: &str) {
        if id == self.ids.results {
            self.results.clear();
        }
    }

    fn append_child(&mut self, id: &str, node: ResultNode) {
        if id == self.ids.results {
            self.results.push(node);
        } else {
            log::debug!("No container '{}' to append to", id);
        }
    }
}
