use super::*;
use crate::config::RenderStyle;
use crate::search::SearchResponse;
use crate::test_utils::test_helpers::{test_app, titled};

#[test]
fn test_app_initialization() {
    let (app, _request_rx, _response_tx) = test_app(RenderStyle::Title);

    assert_eq!(app.focus, Focus::InputField);
    assert_eq!(app.results_scroll.offset, 0);
    assert!(!app.should_quit());
    assert_eq!(app.view.query(), "");
    assert!(app.view.results().is_empty());
}

#[test]
fn test_toggle_focus() {
    let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);

    app.toggle_focus();
    assert_eq!(app.focus, Focus::SearchButton);

    app.toggle_focus();
    assert_eq!(app.focus, Focus::InputField);
}

#[test]
fn test_poll_search_renders_and_resets_scroll() {
    let (mut app, _request_rx, response_tx) = test_app(RenderStyle::Title);
    app.view.input.insert_str("rust");
    let ids = app.widget.ids().clone();
    app.widget.do_search(&mut app.view, "rust");
    app.results_scroll.update_bounds(50, 10);
    app.results_scroll.scroll_down(5);

    response_tx
        .send(SearchResponse::Results {
            request_id: 1,
            results: vec![titled("A")],
        })
        .unwrap();
    app.poll_search();

    assert_eq!(app.view.results().len(), 1);
    assert_eq!(app.results_scroll.offset, 0);
    assert_eq!(ids.results, "res_list");
}

#[test]
fn test_poll_search_with_nothing_pending() {
    let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);
    app.results_scroll.update_bounds(50, 10);
    app.results_scroll.scroll_down(3);

    app.poll_search();

    assert_eq!(app.results_scroll.offset, 3);
}
