//! Host-agnostic search widget
//!
//! The widget reads the query from an input element, issues the search and
//! fills the results container once the latest response arrives. It only
//! talks to the host through [`UiBinding`], so the terminal UI and the
//! one-shot stdout mode share the same logic.

mod search_widget;
mod ui_binding;

pub use search_widget::SearchWidget;
pub use ui_binding::{EventOutcome, Key, UiBinding, UiEvent, WidgetIds};
