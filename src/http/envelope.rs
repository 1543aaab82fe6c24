//! Error response envelope types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Charset assumed when an error response declares none
pub const DEFAULT_CHARSET: &str = "ISO-8859-1";

/// A structured error entity returned by the API service itself.
///
/// Intermediate proxies and gateways never return this shape, so its presence
/// distinguishes API-originated failures from infrastructure failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// The complete, lossless record of a failed HTTP exchange.
///
/// Always carries the status, status text, headers, declared charset and raw
/// body bytes, regardless of whether a structured [`ApiError`] could be
/// recovered from the body.
#[derive(Debug, Clone)]
pub struct ErrorEnvelope {
    /// HTTP status code (4xx or 5xx)
    pub status_code: u16,
    /// Canonical status reason phrase
    pub status_text: String,
    /// Response headers, order and duplicates preserved
    pub headers: HeaderMap,
    /// Declared body charset, or [`DEFAULT_CHARSET`]
    pub charset: String,
    /// Raw response body bytes, untouched
    pub raw_body: Bytes,
    /// Structured API error, when the body contained one
    pub api_error: Option<ApiError>,
}

impl ErrorEnvelope {
    /// The raw body as text, with invalid sequences replaced
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_body)
    }

    /// Whether the body contained a structured API error
    pub fn has_api_error(&self) -> bool {
        self.api_error.is_some()
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status_code, self.status_text)?;
        match &self.api_error {
            Some(api_error) => write!(
                f,
                ": API error {} - {}",
                api_error.code, api_error.message
            ),
            None => write!(f, " ({} byte body)", self.raw_body.len()),
        }
    }
}
