use reqwest::Url;

use super::ui_binding::{EventOutcome, Key, UiBinding, UiEvent, WidgetIds};
use crate::query::{Query, build_search_url, is_blank};
use crate::results::ResultRenderer;
use crate::search::SearchState;

/// Search box wired to an input, a button and a results container
pub struct SearchWidget {
    ids: WidgetIds,
    endpoint: Url,
    dir: String,
    renderer: Box<dyn ResultRenderer>,
    search: SearchState,
}

impl SearchWidget {
    pub fn new(
        ids: WidgetIds,
        endpoint: Url,
        dir: impl Into<String>,
        renderer: Box<dyn ResultRenderer>,
        search: SearchState,
    ) -> Self {
        Self {
            ids,
            endpoint,
            dir: dir.into(),
            renderer,
            search,
        }
    }

    pub fn ids(&self) -> &WidgetIds {
        &self.ids
    }

    /// Route a host event to the matching trigger
    ///
    /// A click on the button or Enter in the input submits the input's
    /// current value. Blank input is a silent no-op.
    pub fn handle_event<U: UiBinding + ?Sized>(
        &mut self,
        ui: &mut U,
        event: UiEvent<'_>,
    ) -> EventOutcome {
        let triggered = match event {
            UiEvent::Click(id) => id == self.ids.button,
            UiEvent::KeyDown { id, key } => key == Key::Enter && id == self.ids.input,
        };
        if !triggered {
            return EventOutcome::Ignored;
        }

        let raw = ui.value(&self.ids.input);
        if is_blank(&raw) {
            return EventOutcome::Ignored;
        }

        self.do_search(ui, &raw);
        EventOutcome::Consumed
    }

    /// Clear the results container and dispatch a search for `query_str`
    ///
    /// Returns the request ID, or `None` (touching nothing) for blank input.
    pub fn do_search<U: UiBinding + ?Sized>(&mut self, ui: &mut U, query_str: &str) -> Option<u64> {
        let Some(query) = Query::parse(query_str) else {
            log::debug!("Ignoring blank query");
            return None;
        };

        ui.clear(&self.ids.results);

        let url = build_search_url(&self.endpoint, &self.dir, &query);
        Some(self.search.start_request(url))
    }

    /// Render the latest response if it has arrived
    ///
    /// The container is cleared again right before the new nodes go in, so it
    /// only ever holds one response's entries. Failed searches are logged and
    /// leave the container empty. Returns true when the container changed.
    pub fn poll_responses<U: UiBinding + ?Sized>(&mut self, ui: &mut U) -> bool {
        let results = match self.search.poll_response() {
            None => return false,
            Some(Ok(results)) => results,
            Some(Err(e)) => {
                log::warn!("Search failed: {}", e);
                return false;
            }
        };

        let nodes = match self.renderer.render_all(&results) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!("Search failed: {}", e);
                return false;
            }
        };

        ui.clear(&self.ids.results);
        for node in nodes {
            ui.append_child(&self.ids.results, node);
        }
        true
    }

    pub fn is_pending(&self) -> bool {
        self.search.is_pending()
    }
}

#[cfg(test)]
#[path = "search_widget_tests.rs"]
mod search_widget_tests;
