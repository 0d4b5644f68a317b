mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod terminal_view;

// Re-export public types
pub use app_state::{App, Focus};
pub use terminal_view::TerminalView;
