//! Command-line arguments and startup wiring

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, RenderStyle};
use crate::error::SearchboxError;
use crate::query::parse_endpoint;
use crate::results::renderer_for;
use crate::search::{SearchClient, SearchState};
use crate::widget::{SearchWidget, WidgetIds};

/// Search a local search endpoint from the terminal
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Search endpoint URL (default: http://127.0.0.1:8000/search)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Value of the `dir` query parameter (default: test)
    #[arg(long)]
    pub dir: Option<String>,

    /// How results are rendered
    #[arg(long, value_enum)]
    pub style: Option<RenderStyle>,

    /// Run one search, print the results and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Config file (default: ~/.config/searchbox/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Command-line flags take precedence over the config file
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = endpoint.clone();
        }
        if let Some(dir) = &self.dir {
            config.search.dir = dir.clone();
        }
        if let Some(style) = self.style {
            config.render.style = style;
        }
        config
    }
}

/// Build a widget with a live HTTP worker behind it
pub fn build_widget(config: &Config) -> Result<SearchWidget, SearchboxError> {
    let endpoint = parse_endpoint(&config.search.endpoint)?;
    let client = SearchClient::from_config(&config.transport)?;

    log::debug!(
        "Searching {} (dir={}, style={:?})",
        endpoint,
        config.search.dir,
        config.render.style
    );

    Ok(SearchWidget::new(
        WidgetIds::default(),
        endpoint,
        config.search.dir.clone(),
        renderer_for(config.render.style),
        SearchState::spawn(client),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DIR, DEFAULT_ENDPOINT};

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "searchbox",
            "--endpoint",
            "http://localhost:9000/find",
            "--dir",
            "docs",
            "--style",
            "link",
            "-q",
            "rust book",
        ])
        .unwrap();

        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:9000/find"));
        assert_eq!(args.dir.as_deref(), Some("docs"));
        assert_eq!(args.style, Some(RenderStyle::Link));
        assert_eq!(args.query.as_deref(), Some("rust book"));
    }

    #[test]
    fn test_invalid_style_rejected() {
        assert!(Args::try_parse_from(["searchbox", "--style", "fancy"]).is_err());
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = Args::default().apply_overrides(Config::default());
        assert_eq!(config.search.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.search.dir, DEFAULT_DIR);
        assert_eq!(config.render.style, RenderStyle::Title);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args {
            dir: Some("docs".to_string()),
            style: Some(RenderStyle::Link),
            ..Default::default()
        };
        let config = args.apply_overrides(Config::default());
        assert_eq!(config.search.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.search.dir, "docs");
        assert_eq!(config.render.style, RenderStyle::Link);
    }

    #[test]
    fn test_build_widget_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.search.endpoint = "nonsense".to_string();
        assert!(matches!(
            build_widget(&config),
            Err(SearchboxError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_build_widget_with_defaults() {
        let widget = build_widget(&Config::default()).unwrap();
        assert_eq!(widget.ids(), &WidgetIds::default());
        assert!(!widget.is_pending());
    }
}
