use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Focus};

/// Width of the search button including borders
const BUTTON_WIDTH: u16 = 12;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (results_area, search_row, help_area) = (layout[0], layout[1], layout[2]);

        let row = Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(search_row);
        let (input_area, button_area) = (row[0], row[1]);

        self.layout_regions.results_pane = Some(results_area);
        self.layout_regions.input_field = Some(input_area);
        self.layout_regions.search_button = Some(button_area);

        crate::results::results_render::render_pane(self, frame, results_area);
        self.render_input_field(frame, input_area);
        self.render_search_button(frame, button_area);
        render_help_line(frame, help_area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.view.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.view.input, area);
    }

    fn render_search_button(&self, frame: &mut Frame, area: Rect) {
        let (border_style, label_style) = if self.focus == Focus::SearchButton {
            (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::White),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(" Go ", label_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

        frame.render_widget(button, area);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(" Enter", key_style),
        Span::styled(" search  ", text_style),
        Span::styled("Tab", key_style),
        Span::styled(" focus button  ", text_style),
        Span::styled("↑↓", key_style),
        Span::styled(" scroll  ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" quit", text_style),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
