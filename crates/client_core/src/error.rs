use thiserror::Error;

/// Failures that keep a submission from producing a server verdict.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        source: serde_json::Error,
    },
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("server url cannot carry a path: {0}")]
    InvalidBaseUrl(String),
}
