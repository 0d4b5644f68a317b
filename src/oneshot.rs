//! Non-interactive mode
//!
//! Drives the same widget as the terminal UI through a plain in-memory view,
//! waits for the response and prints the container's children as text.

use std::io::{self, Write};
use std::thread::sleep;
use std::time::Duration;

use crate::results::ResultNode;
use crate::widget::{EventOutcome, SearchWidget, UiBinding, UiEvent, WidgetIds};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Input prefilled with the query, results collected in memory
pub struct PrintView {
    ids: WidgetIds,
    input: String,
    results: Vec<ResultNode>,
}

impl PrintView {
    pub fn new(ids: WidgetIds, input: &str) -> Self {
        Self {
            ids,
            input: input.to_string(),
            results: Vec::new(),
        }
    }

    pub fn results(&self) -> &[ResultNode] {
        &self.results
    }
}

impl UiBinding for PrintView {
    fn value(&self, id: &str) -> String {
        if id == self.ids.input {
            self.input.clone()
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
        }
    }
}

/// Search for `query` and write one line per rendered line to `out`
///
/// Blank queries print nothing. Failed searches print nothing either; the
/// failure is only logged.
pub fn run_query<W: Write>(widget: &mut SearchWidget, query: &str, out: &mut W) -> io::Result<()> {
    let mut view = PrintView::new(widget.ids().clone(), query);
    let button = widget.ids().button.clone();

    if widget.handle_event(&mut view, UiEvent::Click(&button)) == EventOutcome::Ignored {
        return Ok(());
    }

    while widget.is_pending() {
        if widget.poll_responses(&mut view) {
            break;
        }
        sleep(POLL_INTERVAL);
    }

    for node in view.results() {
        for line in node.plain_lines() {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}
