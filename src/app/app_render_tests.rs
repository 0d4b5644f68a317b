use super::*;
use crate::config::RenderStyle;
use crate::test_utils::test_helpers::test_app;
use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_render_shows_all_components() {
    let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);
    app.view.input.insert_str("hello");

    let output = render_to_string(&mut app, 80, 24);

    assert!(output.contains("Results"));
    assert!(output.contains("Search"));
    assert!(output.contains("hello"));
    assert!(output.contains(" Go "));
    assert!(output.contains("Esc quit"));
}

#[test]
fn test_render_records_layout_regions() {
    let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);

    render_to_string(&mut app, 80, 24);

    assert_eq!(
        app.layout_regions.results_pane,
        Some(Rect::new(0, 0, 80, 20))
    );
    assert_eq!(app.layout_regions.input_field, Some(Rect::new(0, 20, 68, 3)));
    assert_eq!(
        app.layout_regions.search_button,
        Some(Rect::new(68, 20, 12, 3))
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Rendering never panics and the button always sits right of the input.
    #[test]
    fn prop_layout_regions_consistent(width in 30u16..160, height in 6u16..60) {
        let (mut app, _request_rx, _response_tx) = test_app(RenderStyle::Title);

        render_to_string(&mut app, width, height);

        let input = app.layout_regions.input_field.unwrap();
        let button = app.layout_regions.search_button.unwrap();
        prop_assert_eq!(input.y, button.y);
        prop_assert_eq!(input.right(), button.x);
        prop_assert_eq!(button.right(), width);
    }
}
