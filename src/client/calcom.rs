//! Cal.com v2 REST client.

use super::RestClient;
use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{CalcomEventType, CalcomOrganization, CalcomUser, CalcomUserId, DataEnvelope};
use std::time::Duration;

/// Read-only client for the Cal.com v2 API.
#[derive(Clone)]
pub struct CalcomClient {
    rest: RestClient,
}

impl CalcomClient {
    /// Create a CalcomClient using the search request timeout.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config, config.request_timeout)
    }

    /// Create a CalcomClient with an explicit timeout in seconds.
    pub fn with_timeout(config: &Config, timeout_secs: u64) -> Self {
        Self {
            rest: RestClient::new(
                config.calcom_api_url.clone(),
                Duration::from_secs(timeout_secs),
            ),
        }
    }

    /// Create a CalcomClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            rest: RestClient::new(base_url, Duration::from_secs(10)),
        }
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// List the organizations visible to the API key.
    pub fn list_organizations(&self, api_key: &str) -> ApiResult<Vec<CalcomOrganization>> {
        let envelope: DataEnvelope<CalcomOrganization> =
            self.rest.get_json("/v2/organizations", api_key)?;
        Ok(envelope.data)
    }

    /// List the users of an organization (first page only).
    pub fn list_organization_users(
        &self,
        api_key: &str,
        org_id: &str,
    ) -> ApiResult<Vec<CalcomUser>> {
        let path = format!("/v2/organizations/{}/users", urlencoding::encode(org_id));
        let envelope: DataEnvelope<CalcomUser> = self.rest.get_json(&path, api_key)?;

        self.rest.metrics().record_users_listed(envelope.data.len());
        Ok(envelope.data)
    }

    /// List the event types owned by a user.
    pub fn list_event_types(
        &self,
        api_key: &str,
        user_id: &CalcomUserId,
    ) -> ApiResult<Vec<CalcomEventType>> {
        let path = format!(
            "/v2/event-types?userId={}",
            urlencoding::encode(&user_id.to_string())
        );
        let envelope: DataEnvelope<CalcomEventType> = self.rest.get_json(&path, api_key)?;

        self.rest
            .metrics()
            .record_event_types_fetched(envelope.data.len());
        Ok(envelope.data)
    }
}
