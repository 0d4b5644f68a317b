use thiserror::Error;

/// Startup errors for searchbox
#[derive(Debug, Error)]
pub enum SearchboxError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid search endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while a single search is in flight
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Transport failure (connection refused, DNS, reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Search endpoint returned status {code}")]
    Status { code: u16 },

    /// Body was not JSON
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    /// Body was JSON but not an array
    #[error("Expected a JSON array of results, got {0}")]
    NotAnArray(String),

    /// A result object lacks a field the renderer needs
    #[error("Result {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
