use thiserror::Error;

/// Errors surfaced by the remote data gateway.
///
/// Each variant carries the logical endpoint name ("products",
/// "categories", "exchange") so the caller can log which of the three
/// concurrent reads broke the fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request to {endpoint} endpoint failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} endpoint returned {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Logical endpoint the failure belongs to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Request { endpoint, .. } => endpoint,
            ApiError::Status { endpoint, .. } => endpoint,
            ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
