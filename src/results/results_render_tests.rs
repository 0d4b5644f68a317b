use super::*;
use crate::config::RenderStyle;
use crate::search::SearchResponse;
use crate::search::SearchResult;
use crate::test_utils::test_helpers::{test_app, titled};
use crate::widget::UiBinding;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

/// Helper to render app to string
fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_node_lines_items() {
    let nodes = vec![
        ResultNode::Item {
            text: "A".to_string(),
        },
        ResultNode::Item {
            text: "B".to_string(),
        },
    ];
    let texts: Vec<String> = node_lines(&nodes).iter().map(line_text).collect();
    assert_eq!(texts, vec!["• A", "• B"]);
}

#[test]
fn test_node_lines_link_block() {
    let nodes = vec![ResultNode::Link {
        text: "A".to_string(),
        href: "a.html".to_string(),
        desc: "d1".to_string(),
    }];
    let lines = node_lines(&nodes);
    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[0]), "A  a.html");
    assert_eq!(line_text(&lines[1]), "  d1");
    assert!(
        lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::UNDERLINED)
    );
}

#[test]
fn test_render_title_results() {
    let (mut app, _request_rx, response_tx) = test_app(RenderStyle::Title);
    app.view.input.insert_str("rust");
    app.click_search_button();
    response_tx
        .send(SearchResponse::Results {
            request_id: 1,
            results: vec![titled("Alpha"), titled("Beta")],
        })
        .unwrap();
    app.poll_search();

    let output = render_to_string(&mut app, 60, 12);

    assert!(output.contains("Results (2)"));
    let alpha = output.find("• Alpha").unwrap();
    let beta = output.find("• Beta").unwrap();
    assert!(alpha < beta);
}

#[test]
fn test_render_link_results() {
    let (mut app, _request_rx, response_tx) = test_app(RenderStyle::Link);
    app.view.input.insert_str("rust");
    app.click_search_button();
    response_tx
        .send(SearchResponse::Results {
            request_id: 1,
            results: vec![SearchResult {
                title: Some("Guide".to_string()),
                file: Some("guide.html".to_string()),
                desc: Some("getting started".to_string()),
            }],
        })
        .unwrap();
    app.poll_search();

    let output = render_to_string(&mut app, 60, 12);

    assert!(output.contains("Guide  guide.html"));
    assert!(output.contains("getting started"));
}

#[test]
fn test_render_empty_results_pane() {
    let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);

    let output = render_to_string(&mut app, 60, 12);

    assert!(output.contains(" Results "));
    assert!(!output.contains("Results ("));
}

#[test]
fn test_scroll_bounds_follow_content() {
    let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);
    let results_id = app.view.ids().results.clone();
    for i in 0..30 {
        app.view.append_child(
            &results_id,
            ResultNode::Item {
                text: format!("item {}", i),
            },
        );
    }

    // 12 rows: 8 for results (6 inside borders), 3 search row, 1 help line
    render_to_string(&mut app, 60, 12);

    assert_eq!(app.results_scroll.viewport_height, 6);
    assert_eq!(app.results_scroll.max_offset, 24);
}
