//! Webcast status enumeration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a webcast.
///
/// A closed, string-backed enumeration. Individual query endpoints accept
/// only a subset of these values, so subset membership is checked explicitly
/// per call site rather than relying on exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebcastStatus {
    /// Scheduled but not yet started
    Upcoming,
    /// Currently being broadcast
    Live,
    /// Finished and available as a recording
    Recorded,
}

impl WebcastStatus {
    /// The lowercase wire literal used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Live => "live",
            Self::Recorded => "recorded",
        }
    }

    /// The constant-style name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Live => "LIVE",
            Self::Recorded => "RECORDED",
        }
    }
}

impl fmt::Display for WebcastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate a status against the subset an endpoint accepts.
///
/// The failure message names the offending value and enumerates the allowed
/// set, so callers can tell a per-endpoint restriction from a typo.
pub fn check_status_allowed(value: WebcastStatus, allowed: &[WebcastStatus]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let allowed_names = allowed
        .iter()
        .map(|status| status.name())
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::invalid_argument(format!(
        "unsupported webcast status {value} for this query; supported values are [{allowed_names}]"
    )))
}
