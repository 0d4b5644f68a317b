use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click::handle_click;
use crate::layout::{Region, region_at};
use crate::widget::{EventOutcome, Key, UiEvent};

/// How long to wait for input before checking for search responses
const TICK: Duration = Duration::from_millis(50);

/// Lines moved per mouse wheel notch
const WHEEL_LINES: u16 = 3;

impl App {
    /// Handle pending terminal events, then pick up search responses
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(TICK)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                _ => {}
            }
        }

        self.poll_search();
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::SearchButton => self.handle_search_button_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                true
            }
            KeyCode::Up => {
                self.results_scroll.scroll_up(1);
                true
            }
            KeyCode::Down => {
                self.results_scroll.scroll_down(1);
                true
            }
            KeyCode::PageUp => {
                self.results_scroll.page_up();
                true
            }
            KeyCode::PageDown => {
                self.results_scroll.page_down();
                true
            }
            _ => false,
        }
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let widget_key = if key.code == KeyCode::Enter {
            Key::Enter
        } else {
            Key::Other
        };
        let input_id = self.view.ids().input.clone();
        let outcome = self.widget.handle_event(
            &mut self.view,
            UiEvent::KeyDown {
                id: &input_id,
                key: widget_key,
            },
        );

        // The input is single-line, so Enter never reaches the textarea
        if outcome == EventOutcome::Ignored && key.code != KeyCode::Enter {
            self.view.input.input(key);
        }
    }

    fn handle_search_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.click_search_button();
        }
    }

    pub fn click_search_button(&mut self) {
        let button_id = self.view.ids().button.clone();
        self.widget
            .handle_event(&mut self.view, UiEvent::Click(&button_id));
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => handle_click(self, region),
            MouseEventKind::ScrollDown if region == Some(Region::ResultsPane) => {
                self.results_scroll.scroll_down(WHEEL_LINES);
            }
            MouseEventKind::ScrollUp if region == Some(Region::ResultsPane) => {
                self.results_scroll.scroll_up(WHEEL_LINES);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
