//! Result rendering strategies
//!
//! Turns parsed `SearchResult`s into `ResultNode`s. Which strategy is used is
//! chosen by `[render] style` in the config.

use super::result_node::ResultNode;
use crate::config::RenderStyle;
use crate::error::SearchError;
use crate::search::SearchResult;

pub trait ResultRenderer: Send {
    /// Render the result at `index` of the response array
    fn render(&self, index: usize, result: &SearchResult) -> Result<ResultNode, SearchError>;

    /// Render a whole response, failing on the first unusable element
    fn render_all(&self, results: &[SearchResult]) -> Result<Vec<ResultNode>, SearchError> {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| self.render(index, result))
            .collect()
    }
}

/// Title-only list items
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleRenderer;

impl ResultRenderer for TitleRenderer {
    fn render(&self, index: usize, result: &SearchResult) -> Result<ResultNode, SearchError> {
        Ok(ResultNode::Item {
            text: required(index, "title", &result.title)?,
        })
    }
}

/// Titled link to the result's file with its description underneath
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkRenderer;

impl ResultRenderer for LinkRenderer {
    fn render(&self, index: usize, result: &SearchResult) -> Result<ResultNode, SearchError> {
        Ok(ResultNode::Link {
            text: required(index, "title", &result.title)?,
            href: required(index, "file", &result.file)?,
            desc: required(index, "desc", &result.desc)?,
        })
    }
}

fn required(
    index: usize,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, SearchError> {
    value
        .clone()
        .ok_or(SearchError::MissingField { index, field })
}

pub fn renderer_for(style: RenderStyle) -> Box<dyn ResultRenderer> {
    match style {
        RenderStyle::Title => Box::new(TitleRenderer),
        RenderStyle::Link => Box::new(LinkRenderer),
    }
}
