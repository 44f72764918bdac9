//! Scheduling service layer.
//!
//! Validates tool input, resolves credentials, and dispatches searches and
//! organization lookups to the right platform.

use crate::client::{AsyncCalcomClient, AsyncCalendlyClient};
use crate::config::Credentials;
use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{
    OrganizationInfo, OrganizationSummary, Platform, SchedulingConfigStatus, SearchQuery,
    SearchResponse,
};
use crate::tools::{CalcomSearch, CalendlySearch, PlatformSearch};
use async_trait::async_trait;
use std::sync::Arc;

/// Raw parameters of a booking link search, as received from a tool call.
#[derive(Debug, Clone, Default)]
pub struct SearchLinksParams {
    pub platform: String,
    pub name: String,
    pub company: String,
    /// Required for Cal.com, ignored for Calendly
    pub org_id: Option<String>,
    /// Per-call credential override
    pub api_key: Option<String>,
}

/// Scheduling service trait for business operations.
#[async_trait]
pub trait SchedulingService: Send + Sync {
    /// Search one platform for a person at a company and collect their booking links.
    async fn search_scheduling_links(
        &self,
        params: SearchLinksParams,
    ) -> SchedulingResult<SearchResponse>;

    /// Report which default credentials are configured.
    fn scheduling_config(&self) -> SchedulingConfigStatus;

    /// Look up organization details for the effective credential.
    async fn organization_info(
        &self,
        platform: &str,
        api_key: Option<String>,
    ) -> SchedulingResult<OrganizationInfo>;
}

/// Default implementation of SchedulingService.
pub struct SchedulingServiceImpl {
    calcom: Arc<dyn AsyncCalcomClient>,
    calendly: Arc<dyn AsyncCalendlyClient>,
    credentials: Credentials,
}

/// Validation helper functions.
impl SchedulingServiceImpl {
    fn validate_platform(platform: &str) -> SchedulingResult<Platform> {
        platform.parse::<Platform>().map_err(|_| {
            SchedulingError::InvalidParameters(
                "Platform must be either 'calcom' or 'calendly'".to_string(),
            )
        })
    }

    fn validate_required(value: &str, message: &str) -> SchedulingResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SchedulingError::InvalidParameters(message.to_string()));
        }
        Ok(trimmed.to_string())
    }
}

impl SchedulingServiceImpl {
    /// Create a new scheduling service with the process-wide default credentials.
    pub fn new(
        calcom: Arc<dyn AsyncCalcomClient>,
        calendly: Arc<dyn AsyncCalendlyClient>,
        credentials: Credentials,
    ) -> Self {
        Self {
            calcom,
            calendly,
            credentials,
        }
    }

    async fn calcom_organizations(
        &self,
        api_key: Option<&str>,
    ) -> SchedulingResult<OrganizationInfo> {
        let api_key = self.credentials.calcom_api_key(api_key).ok_or_else(|| {
            SchedulingError::MissingCredential("Cal.com API key required".to_string())
        })?;

        let organizations = self
            .calcom
            .list_organizations(&api_key)
            .await
            .map_err(SchedulingError::upstream(Platform::Calcom))?;

        let organizations = organizations
            .into_iter()
            .map(|org| {
                let id_text = org.id_text().unwrap_or_default();
                OrganizationSummary {
                    id: org.id.unwrap_or(serde_json::Value::Null),
                    name: org.name,
                    slug: org.slug,
                    description: format!(
                        "Use org_id='{}' for searches in this organization",
                        id_text
                    ),
                }
            })
            .collect();

        Ok(OrganizationInfo::Calcom {
            platform: Platform::Calcom,
            organizations,
        })
    }

    async fn calendly_organization(
        &self,
        pat: Option<&str>,
    ) -> SchedulingResult<OrganizationInfo> {
        let pat = self.credentials.calendly_pat(pat).ok_or_else(|| {
            SchedulingError::MissingCredential("Calendly PAT required".to_string())
        })?;

        let me = self
            .calendly
            .current_user(&pat)
            .await
            .map_err(SchedulingError::upstream(Platform::Calendly))?;

        Ok(OrganizationInfo::Calendly {
            platform: Platform::Calendly,
            user_name: me.name,
            user_email: me.email,
            organization_uri: me.current_organization,
            description: "Calendly searches use your authenticated organization automatically - no org_id needed".to_string(),
        })
    }
}

#[async_trait]
impl SchedulingService for SchedulingServiceImpl {
    async fn search_scheduling_links(
        &self,
        params: SearchLinksParams,
    ) -> SchedulingResult<SearchResponse> {
        // Fail fast, in order, before any network call.
        let platform = Self::validate_platform(&params.platform)?;
        let name = Self::validate_required(&params.name, "Name is required and cannot be empty")?;
        let company = Self::validate_required(
            &params.company,
            "Company is required and cannot be empty",
        )?;
        let api_key = params.api_key.as_deref();

        let adapter: Box<dyn PlatformSearch> = match platform {
            Platform::Calcom => {
                let org_id = params.org_id.as_deref().unwrap_or_default();
                if org_id.trim().is_empty() {
                    return Err(SchedulingError::InvalidParameters(
                        "org_id is required for Cal.com searches. You can find this in your Cal.com dashboard URL: /teams/[ORG_ID]/members".to_string(),
                    ));
                }
                Box::new(CalcomSearch::new(
                    self.calcom.clone(),
                    &self.credentials,
                    org_id,
                    api_key,
                )?)
            }
            Platform::Calendly => Box::new(CalendlySearch::new(
                self.calendly.clone(),
                &self.credentials,
                api_key,
            )?),
        };

        let query = SearchQuery::new(name, company);

        tracing::info!(
            platform = adapter.platform().as_str(),
            name = %query.name,
            company = %query.company,
            "Searching for scheduling links"
        );

        let results = adapter.search(&query).await?;

        Ok(SearchResponse::new(&query, platform, results))
    }

    fn scheduling_config(&self) -> SchedulingConfigStatus {
        SchedulingConfigStatus::from(&self.credentials)
    }

    async fn organization_info(
        &self,
        platform: &str,
        api_key: Option<String>,
    ) -> SchedulingResult<OrganizationInfo> {
        let platform = platform.parse::<Platform>().map_err(|_| {
            SchedulingError::InvalidParameters(
                "Platform must be 'calcom' or 'calendly'".to_string(),
            )
        })?;

        match platform {
            Platform::Calcom => self.calcom_organizations(api_key.as_deref()).await,
            Platform::Calendly => self.calendly_organization(api_key.as_deref()).await,
        }
    }
}
