//! Search request URL construction
//!
//! `<endpoint>?dir=<dir>&word=<t1>&word=<t2>...`, one `word` pair per term.
//! Terms are form-urlencoded so arbitrary input produces a valid URL.

use reqwest::Url;

use super::terms::Query;
use crate::error::SearchboxError;

/// Parse and validate the configured endpoint
pub fn parse_endpoint(endpoint: &str) -> Result<Url, SearchboxError> {
    let url =
        Url::parse(endpoint).map_err(|_| SearchboxError::InvalidEndpoint(endpoint.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(SearchboxError::InvalidEndpoint(endpoint.to_string())),
    }
}

/// Build the GET URL for `query`
pub fn build_search_url(endpoint: &Url, dir: &str, query: &Query) -> Url {
    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("dir", dir);
        for term in query.terms() {
            pairs.append_pair("word", term);
        }
    }
    url
}
