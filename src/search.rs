//! Search request lifecycle
//!
//! `SearchState` lives on the UI thread and hands requests to a worker
//! thread over a channel. The worker performs the HTTP GET through a
//! `SearchTransport` and sends back results tagged with their request id.

pub mod client;
pub mod search_result;
pub mod search_state;
pub mod worker;

pub use client::{SearchClient, SearchTransport};
pub use search_result::{SearchResult, parse_results};
pub use search_state::{SearchRequest, SearchResponse, SearchState};
