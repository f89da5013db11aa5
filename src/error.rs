//! Error types for the prospects API client and result exports

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single fetch/parse cycle against the prospects API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid API base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("prospects API returned {status}")]
    Status { status: StatusCode },

    #[error("response is not a list of prospects: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while writing search results in the headless mode
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a headless search, from runtime setup to the written output
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to create tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
