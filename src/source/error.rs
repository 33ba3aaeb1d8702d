//! Error types for fetching readings.

use thiserror::Error;

/// Errors that can occur when fetching from the LibreLinkUp API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with something other than 200 OK.
    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}
