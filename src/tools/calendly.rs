//! Calendly search adapter.
//!
//! Calendly has no caller-supplied organization id: the organization is the
//! token owner's `current_organization`.

use super::PlatformSearch;
use crate::client::AsyncCalendlyClient;
use crate::config::Credentials;
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{CalendlyEventType, CalendlyUser, MatchResult, Platform, SearchQuery};
use crate::matching::matches_query;
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;

/// Searches the token owner's Calendly organization.
pub struct CalendlySearch {
    client: Arc<dyn AsyncCalendlyClient>,
    pat: String,
}

impl CalendlySearch {
    /// Resolve the access token (override first, then default).
    pub fn new(
        client: Arc<dyn AsyncCalendlyClient>,
        credentials: &Credentials,
        pat_override: Option<&str>,
    ) -> SchedulingResult<Self> {
        let pat = credentials.calendly_pat(pat_override).ok_or_else(|| {
            SchedulingError::MissingCredential(
                "Calendly Personal Access Token not provided. Either set CALENDLY_PAT environment variable or pass api_key parameter.".to_string(),
            )
        })?;

        Ok(Self { client, pat })
    }

    async fn result_for(&self, user: &CalendlyUser, query: &SearchQuery) -> Option<MatchResult> {
        let Some(user_uri) = user.uri.as_deref() else {
            tracing::warn!(
                name = ?user.name,
                "Calendly member has no user URI, skipping user"
            );
            return None;
        };

        let event_types = match self.client.list_event_types(&self.pat, user_uri).await {
            Ok(event_types) => event_types,
            Err(e) => {
                tracing::warn!(
                    user_uri = %user_uri,
                    error = %e,
                    "Failed to fetch Calendly event types, skipping user"
                );
                return None;
            }
        };

        // Calendly users carry no company field.
        Some(MatchResult {
            name: user.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            email: user.email.clone().unwrap_or_default(),
            company: query.company.clone(),
            booking_links: calendly_booking_links(&event_types),
        })
    }
}

/// The scheduling URL of every active event type.
pub fn calendly_booking_links(event_types: &[CalendlyEventType]) -> Vec<String> {
    event_types
        .iter()
        .filter(|event| event.active)
        .filter_map(|event| event.scheduling_url.clone())
        .filter(|url| !url.is_empty())
        .collect()
}

#[async_trait]
impl PlatformSearch for CalendlySearch {
    fn platform(&self) -> Platform {
        Platform::Calendly
    }

    async fn search(&self, query: &SearchQuery) -> SchedulingResult<Vec<MatchResult>> {
        let me = self
            .client
            .current_user(&self.pat)
            .await
            .map_err(SchedulingError::upstream(Platform::Calendly))?;

        let Some(organization_uri) = me.current_organization.filter(|uri| !uri.is_empty())
        else {
            tracing::info!("Calendly token has no current organization, nothing to search");
            return Ok(Vec::new());
        };

        let memberships = self
            .client
            .list_organization_memberships(&self.pat, &organization_uri)
            .await
            .map_err(SchedulingError::upstream(Platform::Calendly))?;

        let total = memberships.len();
        let matched: Vec<CalendlyUser> = memberships
            .into_iter()
            .map(|membership| membership.user)
            .filter(|user| matches_query(query, user.name.as_deref(), user.email.as_deref(), None))
            .collect();

        tracing::debug!(
            organization = %organization_uri,
            listed = total,
            matched = matched.len(),
            "Filtered Calendly organization memberships"
        );

        let results = join_all(matched.iter().map(|user| self.result_for(user, query))).await;

        Ok(results.into_iter().flatten().collect())
    }
}
