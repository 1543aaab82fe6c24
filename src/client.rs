//! The reporting API client
//!
//! Wires the pieces together per request: filter encoder + pagination encoder
//! build the ordered parameters, the URL builder produces the request URL,
//! the transport executes it, and the error handler classifies the response.
//! The client holds no per-call state and is safe to share across tasks.

use crate::error::Result;
use crate::http::{build_request_url, expand_path, ErrorHandler, HttpClient, HttpClientConfig};
use crate::pagination::{page_params, PageCriteria};
use crate::params::OrderedParams;
use crate::query::{
    SubscriberFilters, SurveyResponseFilters, WebcastRegistrationFilters, WebcastViewingFilters,
};
use crate::resources::{
    ChannelsPage, RegistrationsPage, SubscribersPage, SurveyResponsesPage, ViewingsPage,
};
use serde::de::DeserializeOwned;

const MY_CHANNELS_PATH: &str = "/channels";
const SUBSCRIBERS_PATH: &str = "/channels/{channelId}/subscribers";
const SURVEY_RESPONSES_PATH: &str = "/surveys/{surveyId}/responses";
const REGISTRATIONS_PATH: &str = "/channels/{channelId}/webcasts/{webcastId}/registrations";
const VIEWINGS_PATH: &str = "/channels/{channelId}/viewings";

/// Typed client for the webcast reporting API
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    error_handler: ErrorHandler,
}

impl ApiClient {
    /// Create a client for the given base URL with default configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(HttpClientConfig::builder().base_url(base_url).build())
    }

    /// Create a client with custom transport configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self {
            http: HttpClient::with_config(config),
            error_handler: ErrorHandler::new(),
        }
    }

    /// Create a client with a custom error handler (e.g. extra decoders)
    pub fn with_error_handler(config: HttpClientConfig, error_handler: ErrorHandler) -> Self {
        Self {
            http: HttpClient::with_config(config),
            error_handler,
        }
    }

    /// List the channels owned by the authenticated user
    pub async fn my_channels(&self, page: Option<&PageCriteria>) -> Result<ChannelsPage> {
        self.get_resource(MY_CHANNELS_PATH, &[], &page_params(page))
            .await
    }

    /// List the subscribers of a channel
    pub async fn channel_subscribers(
        &self,
        channel_id: u64,
        filters: &SubscriberFilters,
        page: Option<&PageCriteria>,
    ) -> Result<SubscribersPage> {
        self.get_resource(
            SUBSCRIBERS_PATH,
            &[("channelId", &channel_id.to_string())],
            &filters.to_params(page),
        )
        .await
    }

    /// List the responses to a survey
    pub async fn survey_responses(
        &self,
        survey_id: u64,
        filters: &SurveyResponseFilters,
        page: Option<&PageCriteria>,
    ) -> Result<SurveyResponsesPage> {
        self.get_resource(
            SURVEY_RESPONSES_PATH,
            &[("surveyId", &survey_id.to_string())],
            &filters.to_params(page),
        )
        .await
    }

    /// List the registrations for a webcast
    pub async fn webcast_registrations(
        &self,
        channel_id: u64,
        webcast_id: u64,
        filters: &WebcastRegistrationFilters,
        page: Option<&PageCriteria>,
    ) -> Result<RegistrationsPage> {
        self.get_resource(
            REGISTRATIONS_PATH,
            &[
                ("channelId", &channel_id.to_string()),
                ("webcastId", &webcast_id.to_string()),
            ],
            &filters.to_params(page),
        )
        .await
    }

    /// List the webcast viewings within a channel.
    ///
    /// Fails with `InvalidArgument` before any request is made if the status
    /// filter is outside the subset this query accepts.
    pub async fn webcast_viewings(
        &self,
        channel_id: u64,
        filters: &WebcastViewingFilters,
        page: Option<&PageCriteria>,
    ) -> Result<ViewingsPage> {
        let params = filters.to_params(page)?;
        self.get_resource(
            VIEWINGS_PATH,
            &[("channelId", &channel_id.to_string())],
            &params,
        )
        .await
    }

    /// Execute one GET request: build the URL from the template, substitute
    /// path variables, dispatch, classify, and deserialize the 2xx body.
    async fn get_resource<T: DeserializeOwned>(
        &self,
        path_template: &str,
        path_vars: &[(&str, &str)],
        params: &OrderedParams,
    ) -> Result<T> {
        let url = build_request_url(self.http.base_url(), path_template, params);
        let url = expand_path(&url, path_vars);

        let response = self.http.get(&url).await?;
        let response = self.error_handler.check(response).await?;
        let body = response.json::<T>().await?;
        Ok(body)
    }
}
