//! Query filters and their parameter encoders
//!
//! One filter set per query endpoint (subscribers, survey responses, webcast
//! registrations, webcast viewings). Filter parameters are emitted in each
//! endpoint's declared order, followed by the pagination parameters.

mod filters;
mod status;

pub use filters::{
    SubscriberFilters, SurveyResponseFilters, WebcastRegistrationFilters, WebcastViewingFilters,
    SINCE_PARAM, SUBSCRIBED_PARAM, SUBSCRIBED_SINCE_PARAM, UNSUBSCRIBED_SINCE_PARAM, VIEWED_PARAM,
    VIEWING_STATUSES, WEBCAST_STATUS_PARAM,
};
pub use status::{check_status_allowed, WebcastStatus};
