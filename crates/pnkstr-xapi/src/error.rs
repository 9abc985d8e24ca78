use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the X API client.
#[derive(Debug, Error)]
pub enum XApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status, or with a problem payload and no data.
    #[error("X API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("max_results must be between 10 and 100, got {0}")]
    InvalidMaxResults(u32),
}

/// Failure to append to the API call log.
#[derive(Debug, Error)]
pub enum CallLogError {
    #[error("call log I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A post that cannot be turned into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("post at index {index} has no id")]
    MissingId { index: usize },
}
