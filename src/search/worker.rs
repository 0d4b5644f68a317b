//! Search Worker Thread
//!
//! Runs a single-threaded tokio runtime off the UI thread. Each fetch is
//! spawned as its own task guarded by a `CancellationToken`, so the UI never
//! blocks on the network and a superseded request can be aborted mid-flight.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use reqwest::Url;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::SearchTransport;
use super::search_result::parse_results;
use super::search_state::{SearchRequest, SearchResponse};

/// Spawn the search worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker<T: SearchTransport>(
    transport: T,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::warn!("Failed to start search runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(Arc::new(transport), request_rx, response_tx));
    });
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop<T: SearchTransport>(
    transport: Arc<T>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let mut in_flight: Option<(u64, CancellationToken)> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            SearchRequest::Fetch { url, request_id } => {
                let token = CancellationToken::new();
                in_flight = Some((request_id, token.clone()));
                tokio::spawn(run_search(
                    Arc::clone(&transport),
                    url,
                    request_id,
                    token,
                    response_tx.clone(),
                ));
            }
            SearchRequest::Cancel { request_id } => match in_flight.take() {
                Some((active_id, token)) if active_id == request_id => {
                    token.cancel();
                    log::debug!("Cancelled request {}", request_id);
                }
                other => {
                    // Already finished or never started; tell the UI anyway
                    in_flight = other;
                    let _ = response_tx.send(SearchResponse::Cancelled { request_id });
                }
            },
        }
    }

    log::debug!("Search worker shutting down");
}

/// Fetch one URL and report the outcome, unless cancelled first
async fn run_search<T: SearchTransport>(
    transport: Arc<T>,
    url: Url,
    request_id: u64,
    token: CancellationToken,
    response_tx: Sender<SearchResponse>,
) {
    log::debug!("Request {}: GET {}", request_id, url);

    let response = tokio::select! {
        _ = token.cancelled() => SearchResponse::Cancelled { request_id },
        body = transport.fetch(url) => match body.and_then(|body| parse_results(&body)) {
            Ok(results) => {
                log::debug!("Request {}: {} results", request_id, results.len());
                SearchResponse::Results { request_id, results }
            }
            Err(error) => SearchResponse::Failed { request_id, error },
        },
    };

    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
