//! HTTP plumbing: URL building, transport, error classification
//!
//! # Overview
//!
//! [`build_request_url`] assembles a request URL from a base authority, a
//! path template and ordered query parameters. [`HttpClient`] executes the
//! request, and [`ErrorHandler`] classifies the response: 2xx passes through
//! unchanged, 4xx/5xx becomes a typed failure carrying an [`ErrorEnvelope`]
//! with full diagnostic context.

mod client;
mod envelope;
mod handler;
mod url;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use envelope::{ApiError, ErrorEnvelope, DEFAULT_CHARSET};
pub use handler::{is_error_status, ErrorHandler};
pub use url::{build_request_url, expand_path};

#[cfg(test)]
mod tests;
