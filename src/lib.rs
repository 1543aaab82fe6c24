//! # webcast-reports
//!
//! Typed Rust client for a cursor-paginated webcast reporting API.
//!
//! ## Features
//!
//! - **Cursor pagination**: re-derive the opaque cursor from a `rel="next"`
//!   link and resubmit it verbatim, wherever it sits in the query string
//! - **Typed query filters**: per-endpoint filter encoders with a fixed,
//!   test-verifiable parameter order
//! - **Lossless error envelopes**: every 4xx/5xx response surfaces with its
//!   status, headers, charset and raw body, plus the structured API error
//!   when one could be extracted
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use webcast_reports::{ApiClient, PageCriteria, SubscriberFilters, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::new("https://api.example.com");
//!
//!     let page = PageCriteria::with_size(50)?;
//!     let mut subscribers = client
//!         .channel_subscribers(123, &SubscriberFilters::new().subscribed(true), Some(&page))
//!         .await?;
//!
//!     while let Some(link) = subscribers.next_page_link() {
//!         let next = PageCriteria::with_next_page(link)?;
//!         subscribers = client
//!             .channel_subscribers(123, &SubscriberFilters::new().subscribed(true), Some(&next))
//!             .await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy for the client
pub mod error;

/// Ordered query parameters
pub mod params;

/// Date/time wire formatting
pub mod format;

/// Cursor-based pagination
pub mod pagination;

/// Query filters and their parameter encoders
pub mod query;

/// HTTP plumbing: URL building, transport, error classification
pub mod http;

/// Structured API error decoders
pub mod decode;

/// Resource DTOs and page wrappers
pub mod resources;

/// The reporting API client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::ApiClient;
pub use error::{Error, Result};
pub use http::{ApiError, ErrorEnvelope, HttpClientConfig};
pub use pagination::{Link, NextPageCursor, PageCriteria};
pub use params::OrderedParams;
pub use query::{
    SubscriberFilters, SurveyResponseFilters, WebcastRegistrationFilters, WebcastStatus,
    WebcastViewingFilters,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
