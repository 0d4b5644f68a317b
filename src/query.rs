pub mod request_url;
pub mod terms;

// Re-export public types
pub use request_url::{build_search_url, parse_endpoint};
pub use terms::{Query, is_blank};
