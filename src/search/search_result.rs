use serde::Deserialize;
use serde_json::Value;

use crate::error::SearchError;

/// One element of the endpoint's JSON array
///
/// The server owns this schema. Fields are optional here so that each
/// renderer can decide which ones it requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    /// Link target
    #[serde(default)]
    pub file: Option<String>,
    /// Short description
    #[serde(default)]
    pub desc: Option<String>,
}

/// Parse a response body into results, preserving array order
pub fn parse_results(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| SearchError::InvalidJson(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => return Err(SearchError::NotAnArray(json_type_name(&other).to_string())),
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| SearchError::InvalidJson(e.to_string()))
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
