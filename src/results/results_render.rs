//! Results pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::result_node::ResultNode;
use crate::app::App;

/// Render the results container (top pane)
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let nodes = app.view.results();
    let lines = node_lines(nodes);

    // Inside borders
    let viewport_height = area.height.saturating_sub(2);
    app.results_scroll
        .update_bounds(lines.len() as u32, viewport_height);

    let title = if nodes.is_empty() {
        " Results ".to_string()
    } else {
        format!(" Results ({}) ", nodes.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    let content = Paragraph::new(lines)
        .block(block)
        .scroll((app.results_scroll.offset, 0));

    frame.render_widget(content, area);
}

/// Styled lines for the container's children, in order
pub fn node_lines(nodes: &[ResultNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            ResultNode::Item { text } => {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::DarkGray)),
                    Span::raw(text.clone()),
                ]));
            }
            ResultNode::Link { text, href, desc } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        text.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ),
                    Span::styled(format!("  {}", href), Style::default().fg(Color::DarkGray)),
                ]));
                lines.push(Line::from(Span::raw(format!("  {}", desc))));
            }
        }
    }
    lines
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
