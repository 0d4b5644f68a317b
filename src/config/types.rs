// Configuration type definitions

use serde::Deserialize;

/// Endpoint the widget queries when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/search";

/// Value of the `dir` query parameter sent with every search
pub const DEFAULT_DIR: &str = "test";

/// How each search result is rendered into the results container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One plain item per result showing its title
    #[default]
    Title,
    /// Titled link to the result's file, line break, then its description
    Link,
}

/// Search endpoint section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub dir: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dir: DEFAULT_DIR.to_string(),
        }
    }
}

/// Rendering section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub style: RenderStyle,
}

/// Transport section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Keep a cookie store so session cookies ride along with each search
    pub include_credentials: bool,
    /// Extra `Cookie` header value sent with every search
    pub cookie: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            include_credentials: true,
            cookie: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}
