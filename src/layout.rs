//! Layout module for tracking UI component regions
//!
//! Render records where each component landed; mouse handling asks
//! `region_at()` which component sits under the pointer.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ResultsPane,
    InputField,
    SearchButton,
}

/// Screen areas from the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub results_pane: Option<Rect>,
    pub input_field: Option<Rect>,
    pub search_button: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Which region contains the given screen cell
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let hit = |area: Option<Rect>| area.is_some_and(|rect| rect.contains(position));

    if hit(regions.search_button) {
        Some(Region::SearchButton)
    } else if hit(regions.input_field) {
        Some(Region::InputField)
    } else if hit(regions.results_pane) {
        Some(Region::ResultsPane)
    } else {
        None
    }
}
