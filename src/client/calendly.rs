//! Calendly v2 REST client.

use super::RestClient;
use crate::config::Config;
use crate::error::ApiResult;
use crate::models::{
    CalendlyEventType, CalendlyUser, Collection, OrganizationMembership, ResourceEnvelope,
};
use std::time::Duration;

/// Read-only client for the Calendly API.
///
/// Calendly scopes organization data to the token's own identity, so the
/// organization reference always comes from `current_user`.
#[derive(Clone)]
pub struct CalendlyClient {
    rest: RestClient,
}

impl CalendlyClient {
    /// Create a CalendlyClient using the search request timeout.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(config, config.request_timeout)
    }

    /// Create a CalendlyClient with an explicit timeout in seconds.
    pub fn with_timeout(config: &Config, timeout_secs: u64) -> Self {
        Self {
            rest: RestClient::new(
                config.calendly_api_url.clone(),
                Duration::from_secs(timeout_secs),
            ),
        }
    }

    /// Create a CalendlyClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            rest: RestClient::new(base_url, Duration::from_secs(10)),
        }
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Fetch the profile of the token owner.
    pub fn current_user(&self, pat: &str) -> ApiResult<CalendlyUser> {
        let envelope: ResourceEnvelope<CalendlyUser> = self.rest.get_json("/users/me", pat)?;
        Ok(envelope.resource)
    }

    /// List memberships of an organization (first page only).
    pub fn list_organization_memberships(
        &self,
        pat: &str,
        organization_uri: &str,
    ) -> ApiResult<Vec<OrganizationMembership>> {
        let path = format!(
            "/organization_memberships?organization={}",
            urlencoding::encode(organization_uri)
        );
        let memberships: Collection<OrganizationMembership> = self.rest.get_json(&path, pat)?;

        self.rest
            .metrics()
            .record_users_listed(memberships.collection.len());
        Ok(memberships.collection)
    }

    /// List the event types owned by a user URI.
    pub fn list_event_types(&self, pat: &str, user_uri: &str) -> ApiResult<Vec<CalendlyEventType>> {
        let path = format!("/event_types?user={}", urlencoding::encode(user_uri));
        let event_types: Collection<CalendlyEventType> = self.rest.get_json(&path, pat)?;

        self.rest
            .metrics()
            .record_event_types_fetched(event_types.collection.len());
        Ok(event_types.collection)
    }
}
