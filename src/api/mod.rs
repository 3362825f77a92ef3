/// Remote Habitica API access
///
/// This module owns the single HTTP client the adapter talks through and the
/// typed errors every remote call can produce. The adapter keeps no state of
/// its own: Habitica is the storage layer, reached one request at a time.

pub mod client;

// Re-export the main client type
pub use client::HabiticaClient;

use serde_json::Value;
use thiserror::Error;

/// Errors produced by remote Habitica calls
///
/// `Api` carries the HTTP status and Habitica's error code string as
/// structured fields so the dispatch layer can classify failures without
/// inspecting message text.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Habitica returned HTTP {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed JSON in Habitica response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected Habitica response shape: {0}")]
    Shape(String),

    #[error("Credential contains characters not allowed in an HTTP header")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

/// Extract the `data` payload from a Habitica response envelope
pub fn data(envelope: &Value) -> Result<&Value, ApiError> {
    envelope
        .get("data")
        .ok_or_else(|| ApiError::Shape("missing 'data' field in response envelope".to_string()))
}

/// Read a required string field out of a response payload
pub fn str_field<'a>(value: &'a Value, key: &str) -> Result<&'a str, ApiError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Shape(format!("missing '{key}' string field")))
}

/// Walk a nested path inside a response payload
///
/// Used for the /user subtrees (stats, items, items.pets, items.mounts).
pub fn subtree<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, ApiError> {
    let mut current = value;
    for key in path {
        current = current
            .get(key)
            .ok_or_else(|| ApiError::Shape(format!("missing '{}' field", path.join("."))))?;
    }
    Ok(current)
}
