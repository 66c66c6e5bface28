//! Upstream payload types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One record from the upstream item list.
///
/// Fields beyond `id` and `title` are kept so the payload embedded in the
/// page re-parses to exactly what the upstream returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub title: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Errors that can occur while fetching upstream data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or transport failure.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body was not the expected JSON shape.
    #[error("upstream payload could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Result type for upstream operations.
pub type FetchResult<T> = Result<T, FetchError>;
