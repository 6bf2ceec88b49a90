//! Error types for barkedlogy-core.
//!
//! API errors are never shown to the user. Page components log them and
//! leave the current view untouched.

use thiserror::Error;

/// Errors that can occur while talking to the search API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Could not build a request URL from the configured base
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Network failure before a response arrived
    #[error("Request failed: {0}")]
    Request(String),
    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

/// Errors that can occur during key-value storage operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Storage is not available (private mode, no window, quota disabled)
    #[error("Storage unavailable")]
    Unavailable,
    /// Backend rejected the operation
    #[error("Storage error: {0}")]
    Backend(String),
    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            status: 503,
            url: "https://api.example/articles".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 503 from https://api.example/articles"
        );
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(ApiError::from(json_err), ApiError::Decode(_)));
    }
}
