//! Mouse click handling
//!
//! Handles click events to change focus and press the search button.

use super::app_state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::InputField) => app.focus = Focus::InputField,
        Some(Region::SearchButton) => {
            app.focus = Focus::SearchButton;
            app.click_search_button();
        }
        // Results pane has no click behavior
        _ => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
