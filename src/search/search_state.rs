//! UI-side search request tracking
//!
//! Every outbound search gets a fresh request id. Only the response carrying
//! the latest id is surfaced by `poll_response`; anything older was
//! superseded and is dropped, so two overlapping searches never both render.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use reqwest::Url;
use tokio::sync::mpsc::UnboundedSender;

use super::client::SearchTransport;
use super::search_result::SearchResult;
use super::worker::spawn_worker;
use crate::error::SearchError;

/// Messages sent to the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// GET the given URL
    Fetch {
        url: Url,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Abort the request with the given ID if it is still running
    Cancel { request_id: u64 },
}

/// Messages received from the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    Results {
        request_id: u64,
        results: Vec<SearchResult>,
    },
    Failed {
        request_id: u64,
        error: SearchError,
    },
    Cancelled {
        request_id: u64,
    },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Results { request_id, .. }
            | SearchResponse::Failed { request_id, .. }
            | SearchResponse::Cancelled { request_id } => *request_id,
        }
    }
}

pub struct SearchState {
    request_tx: UnboundedSender<SearchRequest>,
    response_rx: Receiver<SearchResponse>,
    /// Most recently issued request ID
    request_id: u64,
    /// ID of the request still awaiting a response, if any
    in_flight_request_id: Option<u64>,
}

impl SearchState {
    pub fn new(
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Create the channels and start a worker thread driving `transport`
    pub fn spawn<T: SearchTransport>(transport: T) -> Self {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(transport, request_rx, response_tx);
        Self::new(request_tx, response_rx)
    }

    /// Issue a search for `url`, cancelling whatever is still in flight
    ///
    /// Returns the new request ID.
    pub fn start_request(&mut self, url: Url) -> u64 {
        if let Some(previous) = self.in_flight_request_id.take() {
            self.send(SearchRequest::Cancel {
                request_id: previous,
            });
            log::debug!("Sent cancel for request {}", previous);
        }

        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.send(SearchRequest::Fetch {
            url,
            request_id: self.request_id,
        });
        self.request_id
    }

    fn send(&self, request: SearchRequest) {
        if self.request_tx.send(request).is_err() {
            log::warn!("Search worker is gone, request dropped");
        }
    }

    /// Drain the response channel and return the outcome of the latest request
    ///
    /// Returns `None` while the latest request is still pending, or when only
    /// stale responses arrived.
    pub fn poll_response(&mut self) -> Option<Result<Vec<SearchResult>, SearchError>> {
        loop {
            let response = match self.response_rx.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    // Worker is gone, nothing will ever resolve
                    self.in_flight_request_id = None;
                    return None;
                }
            };

            if response.request_id() != self.request_id {
                log::debug!(
                    "Dropping stale response for request {} (latest: {})",
                    response.request_id(),
                    self.request_id
                );
                continue;
            }

            match response {
                SearchResponse::Results { results, .. } => {
                    self.in_flight_request_id = None;
                    return Some(Ok(results));
                }
                SearchResponse::Failed { error, .. } => {
                    self.in_flight_request_id = None;
                    return Some(Err(error));
                }
                SearchResponse::Cancelled { request_id } => {
                    log::debug!("Request {} cancelled", request_id);
                    self.in_flight_request_id = None;
                }
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
