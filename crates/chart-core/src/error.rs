// File: crates/chart-core/src/error.rs
// Summary: Error type shared by acquisition, parsing, scale and render stages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid endpoint url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("payload must be a JSON array of records, found {found}")]
    InvalidPayload { found: &'static str },

    #[error("record {index}: field '{field}' is missing or not a finite number")]
    MalformedRecord { index: usize, field: String },

    #[error("scale domain is not set")]
    ScaleDomainUnset,

    #[error("scale domain can only be set once")]
    ScaleDomainAlreadySet,
}

pub type Result<T> = std::result::Result<T, ChartError>;
