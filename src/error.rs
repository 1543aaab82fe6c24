//! Error types for the webcast reporting client
//!
//! All public APIs return `Result<T, Error>` where `Error` is defined here.
//! The taxonomy is a single tagged union: validation failures surface
//! synchronously before any request is made, transport failures come from the
//! HTTP layer, and `Http` carries the full diagnostic envelope of a failed
//! exchange (including the structured API error when one could be extracted).

use crate::http::{ApiError, ErrorEnvelope};
use thiserror::Error;

/// The main error type for the webcast reporting client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid next page link: {message}")]
    InvalidPageLink { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // ============================================================================
    // HTTP Error Responses
    // ============================================================================
    #[error("{0}")]
    Http(Box<ErrorEnvelope>),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid page link error
    pub fn invalid_page_link(message: impl Into<String>) -> Self {
        Self::InvalidPageLink {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Wrap a failed HTTP exchange
    pub fn http(envelope: ErrorEnvelope) -> Self {
        Self::Http(Box::new(envelope))
    }

    /// The HTTP status code of a failed exchange, if this is an HTTP error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(envelope) => Some(envelope.status_code),
            _ => None,
        }
    }

    /// The structured API error, if the failed response body contained one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(envelope) => envelope.api_error.as_ref(),
            _ => None,
        }
    }

    /// The full error envelope of a failed exchange
    pub fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Http(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// Check if this error was raised by argument validation (never retryable)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::InvalidPageLink { .. } | Self::InvalidUrl(_)
        )
    }
}

/// Result type alias for the webcast reporting client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::header::HeaderMap;

    fn envelope(status: u16) -> ErrorEnvelope {
        ErrorEnvelope {
            status_code: status,
            status_text: "Not Found".to_string(),
            headers: HeaderMap::new(),
            charset: "ISO-8859-1".to_string(),
            raw_body: Bytes::new(),
            api_error: None,
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("page size must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid argument: page size must be greater than zero"
        );

        let err = Error::invalid_page_link("no cursor parameter");
        assert_eq!(
            err.to_string(),
            "Invalid next page link: no cursor parameter"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::invalid_argument("bad").is_validation());
        assert!(Error::invalid_page_link("bad").is_validation());
        assert!(!Error::decode("bad").is_validation());
        assert!(!Error::http(envelope(500)).is_validation());
    }

    #[test]
    fn test_http_accessors() {
        let err = Error::http(envelope(404));
        assert_eq!(err.status_code(), Some(404));
        assert!(err.api_error().is_none());
        assert!(err.envelope().is_some());

        let err = Error::invalid_argument("bad");
        assert_eq!(err.status_code(), None);
        assert!(err.envelope().is_none());
    }

    #[test]
    fn test_http_with_api_error() {
        let mut env = envelope(409);
        env.api_error = Some(ApiError {
            code: "DuplicateResource".to_string(),
            message: "Resource already exists".to_string(),
        });
        let err = Error::http(env);
        assert_eq!(err.api_error().unwrap().code, "DuplicateResource");
    }
}
