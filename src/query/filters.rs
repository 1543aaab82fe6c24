//! Per-endpoint filter parameter encoders
//!
//! Each query endpoint takes its own set of nullable, typed filters. A filter
//! encodes as exactly one query parameter using the endpoint's fixed name,
//! appended in the endpoint's declared order, before any pagination
//! parameters.

use super::status::{check_status_allowed, WebcastStatus};
use crate::error::Result;
use crate::format::format_timestamp;
use crate::pagination::{page_params, PageCriteria};
use crate::params::OrderedParams;
use chrono::{DateTime, Utc};

/// Query parameter for the subscriber active/inactive filter
pub const SUBSCRIBED_PARAM: &str = "subscribed";

/// Query parameter for the earliest subscription time
pub const SUBSCRIBED_SINCE_PARAM: &str = "subscribedSince";

/// Query parameter for the earliest unsubscription time
pub const UNSUBSCRIBED_SINCE_PARAM: &str = "unsubscribedSince";

/// Query parameter for the earliest event time
pub const SINCE_PARAM: &str = "since";

/// Query parameter for the registration viewed filter
pub const VIEWED_PARAM: &str = "viewed";

/// Query parameter for the webcast status filter
pub const WEBCAST_STATUS_PARAM: &str = "webcastStatus";

/// Statuses accepted by the webcast viewings query
pub const VIEWING_STATUSES: &[WebcastStatus] = &[WebcastStatus::Live, WebcastStatus::Recorded];

fn bool_literal(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ============================================================================
// Channel Subscribers
// ============================================================================

/// Filters for the channel subscribers query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberFilters {
    /// Restrict to currently subscribed (true) or unsubscribed (false) users
    pub subscribed: Option<bool>,
    /// Restrict to users subscribed at or after this time
    pub subscribed_since: Option<DateTime<Utc>>,
    /// Restrict to users unsubscribed at or after this time
    pub unsubscribed_since: Option<DateTime<Utc>>,
}

impl SubscriberFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on subscription state
    #[must_use]
    pub fn subscribed(mut self, value: bool) -> Self {
        self.subscribed = Some(value);
        self
    }

    /// Filter on subscription time
    #[must_use]
    pub fn subscribed_since(mut self, value: DateTime<Utc>) -> Self {
        self.subscribed_since = Some(value);
        self
    }

    /// Filter on unsubscription time
    #[must_use]
    pub fn unsubscribed_since(mut self, value: DateTime<Utc>) -> Self {
        self.unsubscribed_since = Some(value);
        self
    }

    /// Encode the filters followed by any pagination parameters
    pub fn to_params(&self, page: Option<&PageCriteria>) -> OrderedParams {
        let mut params = OrderedParams::new();
        if let Some(value) = self.subscribed {
            params.push(SUBSCRIBED_PARAM, bool_literal(value));
        }
        if let Some(value) = &self.subscribed_since {
            params.push(SUBSCRIBED_SINCE_PARAM, format_timestamp(value));
        }
        if let Some(value) = &self.unsubscribed_since {
            params.push(UNSUBSCRIBED_SINCE_PARAM, format_timestamp(value));
        }
        params.extend(page_params(page));
        params
    }
}

// ============================================================================
// Survey Responses
// ============================================================================

/// Filters for the survey responses query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyResponseFilters {
    /// Restrict to responses submitted at or after this time
    pub since: Option<DateTime<Utc>>,
}

impl SurveyResponseFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on submission time
    #[must_use]
    pub fn since(mut self, value: DateTime<Utc>) -> Self {
        self.since = Some(value);
        self
    }

    /// Encode the filters followed by any pagination parameters
    pub fn to_params(&self, page: Option<&PageCriteria>) -> OrderedParams {
        let mut params = OrderedParams::new();
        if let Some(value) = &self.since {
            params.push(SINCE_PARAM, format_timestamp(value));
        }
        params.extend(page_params(page));
        params
    }
}

// ============================================================================
// Webcast Registrations
// ============================================================================

/// Filters for the webcast registrations query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebcastRegistrationFilters {
    /// Restrict to registrations created at or after this time
    pub since: Option<DateTime<Utc>>,
    /// Restrict to registrants who did (true) or did not (false) view
    pub viewed: Option<bool>,
}

impl WebcastRegistrationFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on registration time
    #[must_use]
    pub fn since(mut self, value: DateTime<Utc>) -> Self {
        self.since = Some(value);
        self
    }

    /// Filter on whether the registrant viewed the webcast
    #[must_use]
    pub fn viewed(mut self, value: bool) -> Self {
        self.viewed = Some(value);
        self
    }

    /// Encode the filters followed by any pagination parameters
    pub fn to_params(&self, page: Option<&PageCriteria>) -> OrderedParams {
        let mut params = OrderedParams::new();
        if let Some(value) = &self.since {
            params.push(SINCE_PARAM, format_timestamp(value));
        }
        if let Some(value) = self.viewed {
            params.push(VIEWED_PARAM, bool_literal(value));
        }
        params.extend(page_params(page));
        params
    }
}

// ============================================================================
// Webcast Viewings
// ============================================================================

/// Filters for the webcast viewings query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebcastViewingFilters {
    /// Restrict to viewings that started at or after this time
    pub since: Option<DateTime<Utc>>,
    /// Restrict to viewings of webcasts in this status.
    /// Only `Live` and `Recorded` are accepted for this query.
    pub webcast_status: Option<WebcastStatus>,
}

impl WebcastViewingFilters {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on viewing start time
    #[must_use]
    pub fn since(mut self, value: DateTime<Utc>) -> Self {
        self.since = Some(value);
        self
    }

    /// Filter on webcast status
    #[must_use]
    pub fn webcast_status(mut self, value: WebcastStatus) -> Self {
        self.webcast_status = Some(value);
        self
    }

    /// Encode the filters followed by any pagination parameters.
    ///
    /// Fails with `InvalidArgument` if the status is outside the subset this
    /// endpoint accepts.
    pub fn to_params(&self, page: Option<&PageCriteria>) -> Result<OrderedParams> {
        let mut params = OrderedParams::new();
        if let Some(value) = &self.since {
            params.push(SINCE_PARAM, format_timestamp(value));
        }
        if let Some(status) = self.webcast_status {
            check_status_allowed(status, VIEWING_STATUSES)?;
            params.push(WEBCAST_STATUS_PARAM, status.as_str());
        }
        params.extend(page_params(page));
        Ok(params)
    }
}
