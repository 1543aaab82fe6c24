//! Error classification and structured-error extraction
//!
//! Classifies responses by status code and, for error responses, attempts to
//! recover a structured [`ApiError`] from the body. Extraction failures are
//! never fatal: an unsupported media type (e.g. an HTML page from a proxy) or
//! a wrong-shaped body demotes to "no structured error available" and is
//! logged at low severity. Only an I/O failure while reading the body itself
//! escalates, because no complete envelope can be constructed without it.

use super::envelope::{ApiError, ErrorEnvelope, DEFAULT_CHARSET};
use crate::decode::DecoderRegistry;
use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use tracing::{debug, warn};

/// Decide from the status code alone whether a response is an error.
///
/// 2xx is success; 4xx and 5xx are errors. Redirects are the transport's
/// concern and never reach this layer.
pub fn is_error_status(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

/// Classifies error responses and extracts structured API errors.
///
/// The decoder registry is fixed at construction time; a handler holds no
/// per-call state and is safe to share across concurrent requests.
#[derive(Debug, Default)]
pub struct ErrorHandler {
    decoders: DecoderRegistry,
}

impl ErrorHandler {
    /// Create a handler with the default XML + JSON decoders
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler with a custom decoder registry
    pub fn with_registry(decoders: DecoderRegistry) -> Self {
        Self { decoders }
    }

    /// Pass a successful response through unchanged, or turn an error
    /// response into a typed failure carrying the full envelope.
    pub async fn check(&self, response: Response) -> Result<Response> {
        if !is_error_status(response.status()) {
            return Ok(response);
        }

        let status = response.status();
        let headers = response.headers().clone();
        // Body-read failure is the one fatal path: without the bytes there is
        // no complete envelope to return.
        let raw_body = response.bytes().await.map_err(Error::Transport)?;

        let envelope = self.envelope_from_parts(status, headers, raw_body);
        warn!(
            status = envelope.status_code,
            api_error = envelope.has_api_error(),
            "request failed: {envelope}"
        );
        Err(Error::http(envelope))
    }

    /// Build the lossless envelope for an error response from its parts.
    pub fn envelope_from_parts(
        &self,
        status: StatusCode,
        headers: HeaderMap,
        raw_body: Bytes,
    ) -> ErrorEnvelope {
        let (media_type, charset) = parse_content_type(&headers);
        let api_error = self.extract(media_type.as_deref(), &raw_body);

        ErrorEnvelope {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            charset,
            raw_body,
            api_error,
        }
    }

    /// Attempt to extract a structured API error from an error response body.
    ///
    /// Returns `None` for empty bodies, unsupported media types and bodies
    /// that do not contain the expected entity shape; all of these are
    /// non-fatal and logged at debug level.
    pub fn extract(&self, media_type: Option<&str>, body: &[u8]) -> Option<ApiError> {
        if body.is_empty() {
            return None;
        }

        let Some(media_type) = media_type else {
            debug!("error response declared no content type; skipping extraction");
            return None;
        };

        let Some(decoder) = self.decoders.find(media_type) else {
            debug!("no decoder supports media type '{media_type}'; skipping extraction");
            return None;
        };

        let text = String::from_utf8_lossy(body);
        match decoder.decode(&text) {
            Ok(api_error) => Some(api_error),
            Err(e) => {
                debug!("failed to extract structured API error from '{media_type}' body: {e}");
                None
            }
        }
    }
}

/// Resolve the media type essence and charset from the response headers.
///
/// The media type is lowercased; the charset defaults to [`DEFAULT_CHARSET`]
/// when the response declares none.
pub(crate) fn parse_content_type(headers: &HeaderMap) -> (Option<String>, String) {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return (None, DEFAULT_CHARSET.to_string());
    };

    let mut parts = value.split(';');
    let media_type = parts
        .next()
        .map(|essence| essence.trim().to_ascii_lowercase())
        .filter(|essence| !essence.is_empty());

    let charset = parts
        .filter_map(|param| param.trim().split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .unwrap_or_else(|| DEFAULT_CHARSET.to_string());

    (media_type, charset)
}
