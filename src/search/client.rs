//! HTTP transport for search requests

use std::future::Future;

use reqwest::{Client, Url, header};

use crate::config::TransportConfig;
use crate::error::{SearchError, SearchboxError};

/// Performs the GET for a search and yields the raw response body
///
/// The worker is generic over this so it can be driven without a network.
pub trait SearchTransport: Send + Sync + 'static {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<String, SearchError>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    cookie: Option<String>,
}

impl SearchClient {
    /// Build a client from the `[transport]` config section
    ///
    /// With `include_credentials` the client keeps a cookie store, so cookies
    /// set by the endpoint are sent back on later searches.
    pub fn from_config(config: &TransportConfig) -> Result<Self, SearchboxError> {
        let http = Client::builder()
            .cookie_store(config.include_credentials)
            .build()
            .map_err(|e| SearchboxError::HttpClient(e.to_string()))?;

        let cookie = config
            .cookie
            .as_ref()
            .filter(|c| !c.trim().is_empty())
            .cloned();

        Ok(Self { http, cookie })
    }

    async fn get(&self, url: Url) -> Result<String, SearchError> {
        let mut request = self.http.get(url);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                code: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))
    }
}

impl SearchTransport for SearchClient {
    async fn fetch(&self, url: Url) -> Result<String, SearchError> {
        self.get(url).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
