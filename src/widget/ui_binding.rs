use crate::results::ResultNode;

/// Element ids the widget is wired to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetIds {
    pub input: String,
    pub button: String,
    pub results: String,
}

impl Default for WidgetIds {
    fn default() -> Self {
        Self {
            input: "search_text".to_string(),
            button: "search_button".to_string(),
            results: "res_list".to_string(),
        }
    }
}

/// Surface the widget renders into
pub trait UiBinding {
    /// Current text of the element, empty if it has none
    fn value(&self, id: &str) -> String;

    /// Remove every child of the element
    fn clear(&mut self, id: &str);

    /// Append a rendered node to the element
    fn append_child(&mut self, id: &str, node: ResultNode);
}

/// Keys the widget distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Events a host forwards to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent<'a> {
    Click(&'a str),
    KeyDown { id: &'a str, key: Key },
}

/// Whether the widget took the event
///
/// `Consumed` tells the host to skip its default handling (e.g. inserting a
/// newline on Enter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Consumed,
    Ignored,
}
