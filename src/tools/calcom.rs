//! Cal.com search adapter.

use super::PlatformSearch;
use crate::client::AsyncCalcomClient;
use crate::config::Credentials;
use crate::error::{SchedulingError, SchedulingResult};
use crate::matching::matches_query;
use crate::models::{CalcomEventType, CalcomUser, MatchResult, Platform, SearchQuery};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

/// Public booking pages live here, not on the API host.
pub const CALCOM_BOOKING_BASE_URL: &str = "https://cal.com";

/// Searches one Cal.com organization with a resolved API key.
pub struct CalcomSearch {
    client: Arc<dyn AsyncCalcomClient>,
    api_key: String,
    org_id: String,
}

impl CalcomSearch {
    /// Resolve the API key (override first, then default) and validate the org id.
    ///
    /// Fails before any network call when no key is available or the org id is blank.
    pub fn new(
        client: Arc<dyn AsyncCalcomClient>,
        credentials: &Credentials,
        org_id: &str,
        api_key_override: Option<&str>,
    ) -> SchedulingResult<Self> {
        let api_key = credentials.calcom_api_key(api_key_override).ok_or_else(|| {
            SchedulingError::MissingCredential(
                "Cal.com API key not provided. Either set CALCOM_API_KEY environment variable or pass api_key parameter.".to_string(),
            )
        })?;

        let org_id = org_id.trim();
        if org_id.is_empty() {
            return Err(SchedulingError::InvalidParameters(
                "Organization ID is required for Cal.com API calls".to_string(),
            ));
        }

        Ok(Self {
            client,
            api_key,
            org_id: org_id.to_string(),
        })
    }

    async fn result_for(&self, user: &CalcomUser, query: &SearchQuery) -> Option<MatchResult> {
        let Some(user_id) = user.id.as_ref() else {
            tracing::warn!(
                username = ?user.username,
                "Cal.com user has no id, skipping user"
            );
            return None;
        };

        let event_types = match self.client.list_event_types(&self.api_key, user_id).await {
            Ok(event_types) => event_types,
            Err(e) => {
                tracing::warn!(
                    user_id = %user_id,
                    error = %e,
                    "Failed to fetch Cal.com event types, skipping user"
                );
                return None;
            }
        };

        Some(MatchResult {
            name: user.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            email: user.email.clone().unwrap_or_default(),
            company: user
                .company()
                .map(str::to_string)
                .unwrap_or_else(|| query.company.clone()),
            booking_links: calcom_booking_links(user.username.as_deref(), &event_types),
        })
    }
}

/// Links for every visible event type that has a slug.
pub fn calcom_booking_links(username: Option<&str>, event_types: &[CalcomEventType]) -> Vec<String> {
    let username = username.unwrap_or("user");

    event_types
        .iter()
        .filter(|event| !event.hidden)
        .filter_map(|event| event.slug.as_deref().filter(|slug| !slug.is_empty()))
        .map(|slug| format!("{}/{}/{}", CALCOM_BOOKING_BASE_URL, username, slug))
        .collect()
}

#[async_trait]
impl PlatformSearch for CalcomSearch {
    fn platform(&self) -> Platform {
        Platform::Calcom
    }

    async fn search(&self, query: &SearchQuery) -> SchedulingResult<Vec<MatchResult>> {
        let users = self
            .client
            .list_organization_users(&self.api_key, &self.org_id)
            .await
            .map_err(SchedulingError::upstream(Platform::Calcom))?;

        let total = users.len();
        let matched: Vec<CalcomUser> = users
            .into_iter()
            .filter(|user| {
                matches_query(
                    query,
                    user.name.as_deref(),
                    user.email.as_deref(),
                    user.company(),
                )
            })
            .collect();

        tracing::debug!(
            org_id = %self.org_id,
            listed = total,
            matched = matched.len(),
            "Filtered Cal.com organization users"
        );

        // join_all yields results in input order, so discovery order is kept.
        let results = join_all(matched.iter().map(|user| self.result_for(user, query))).await;

        Ok(results.into_iter().flatten().collect())
    }
}
