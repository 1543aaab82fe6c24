//! Resource DTOs and page wrappers
//!
//! Thin data carriers for the reporting resources. Schema completeness is not
//! a goal here; each type keeps the identifying fields plus whatever the
//! filter encoders and pagination need. Every page wrapper exposes its
//! `rel="next"` link so the caller can build the criteria for the following
//! request.

use crate::pagination::{find_next_link, Link};
use crate::query::WebcastStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A webcast channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier
    pub id: u64,
    /// Channel name
    pub name: String,
    /// Channel strapline, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strapline: Option<String>,
}

/// One page of channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelsPage {
    /// Channels in this page
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Page-level links; `rel="next"` marks the next page
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A user subscribed to a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSubscriber {
    /// Subscription identifier
    pub id: u64,
    /// Subscriber email, when disclosed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// When the user last subscribed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_subscribed: Option<DateTime<Utc>>,
    /// When the user unsubscribed, for inactive subscriptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribed: Option<DateTime<Utc>>,
}

/// One page of channel subscribers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribersPage {
    /// Subscribers in this page
    #[serde(default)]
    pub subscribers: Vec<ChannelSubscriber>,
    /// Page-level links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A single user's response to a survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    /// Response identifier
    pub id: u64,
    /// When the response was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<DateTime<Utc>>,
    /// Question/answer pairs as returned by the service
    #[serde(default)]
    pub answers: Vec<SurveyAnswer>,
}

/// One answered survey question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswer {
    /// Question text
    pub question: String,
    /// Answer text
    pub answer: String,
}

/// One page of survey responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponsesPage {
    /// Responses in this page
    #[serde(default)]
    pub responses: Vec<SurveyResponse>,
    /// Page-level links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A user's registration for a webcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebcastRegistration {
    /// Registration identifier
    pub id: u64,
    /// When the user registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<DateTime<Utc>>,
    /// Whether the registrant went on to view the webcast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewed: Option<bool>,
}

/// One page of webcast registrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationsPage {
    /// Registrations in this page
    #[serde(default)]
    pub registrations: Vec<WebcastRegistration>,
    /// Page-level links
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A user's viewing of a webcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebcastViewing {
    /// Viewing identifier
    pub id: u64,
    /// The webcast that was viewed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webcast_id: Option<u64>,
    /// Status of the webcast at viewing time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WebcastStatus>,
    /// Total viewing duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
}

/// One page of webcast viewings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewingsPage {
    /// Viewings in this page
    #[serde(default)]
    pub viewings: Vec<WebcastViewing>,
    /// Page-level links
    #[serde(default)]
    pub links: Vec<Link>,
}

macro_rules! impl_next_page_link {
    ($($page:ty),+ $(,)?) => {
        $(
            impl $page {
                /// The `rel="next"` link, when more pages are available
                pub fn next_page_link(&self) -> Option<&Link> {
                    find_next_link(&self.links)
                }
            }
        )+
    };
}

impl_next_page_link!(
    ChannelsPage,
    SubscribersPage,
    SurveyResponsesPage,
    RegistrationsPage,
    ViewingsPage,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_links_and_items() {
        let page: SubscribersPage = serde_json::from_str(
            r#"{
                "subscribers": [
                    {"id": 1, "email": "a@example.com", "last_subscribed": "2014-04-30T21:32:21Z"}
                ],
                "links": [
                    {"href": "https://api.example.com/subscribers?cursor=99", "rel": "next"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.subscribers.len(), 1);
        assert_eq!(page.subscribers[0].id, 1);
        assert!(page.subscribers[0].last_subscribed.is_some());
        assert_eq!(
            page.next_page_link().unwrap().href,
            "https://api.example.com/subscribers?cursor=99"
        );
    }

    #[test]
    fn test_page_without_links_has_no_next() {
        let page: ViewingsPage = serde_json::from_str(r#"{"viewings": []}"#).unwrap();
        assert!(page.next_page_link().is_none());
        assert!(page.viewings.is_empty());
    }

    #[test]
    fn test_viewing_status_deserializes_lowercase() {
        let viewing: WebcastViewing =
            serde_json::from_str(r#"{"id": 5, "status": "recorded"}"#).unwrap();
        assert_eq!(viewing.status, Some(WebcastStatus::Recorded));
    }
}
