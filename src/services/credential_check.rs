//! Credential validation against the live APIs.
//!
//! Used by the `check-credentials` binary with clients built on the shorter
//! credential-check timeout.

use crate::client::{AsyncCalcomClient, AsyncCalendlyClient};
use crate::config::Credentials;
use crate::models::Platform;
use std::fmt;
use std::sync::Arc;

/// Result of checking one platform's default credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Credentials work; the string describes what was verified
    Ready(String),
    /// Required settings are missing
    NotConfigured(String),
    /// Settings are present but an upstream call or lookup failed
    Failed(String),
}

impl CheckOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckOutcome::Failed(_))
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Ready(detail) => write!(f, "ready: {}", detail),
            CheckOutcome::NotConfigured(detail) => write!(f, "not configured: {}", detail),
            CheckOutcome::Failed(detail) => write!(f, "failed: {}", detail),
        }
    }
}

/// Checks that the configured default credentials reach each platform.
pub struct CredentialChecker {
    calcom: Arc<dyn AsyncCalcomClient>,
    calendly: Arc<dyn AsyncCalendlyClient>,
    credentials: Credentials,
}

impl CredentialChecker {
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

    /// Check both platforms, Cal.com first.
    pub async fn check_all(&self) -> Vec<(Platform, CheckOutcome)> {
        vec![
            (Platform::Calcom, self.check_calcom().await),
            (Platform::Calendly, self.check_calendly().await),
        ]
    }

    /// Verify the API key, that the configured org id is visible to it, and
    /// that the org's user listing works.
    pub async fn check_calcom(&self) -> CheckOutcome {
        let Some(api_key) = self.credentials.calcom_api_key.as_deref() else {
            return CheckOutcome::NotConfigured("CALCOM_API_KEY not set".to_string());
        };
        let Some(org_id) = self.credentials.calcom_org_id.as_deref() else {
            return CheckOutcome::NotConfigured("CALCOM_ORG_ID not set".to_string());
        };

        let organizations = match self.calcom.list_organizations(api_key).await {
            Ok(organizations) => organizations,
            Err(e) => return CheckOutcome::Failed(format!("Cal.com API error: {}", e)),
        };

        let Some(org) = organizations
            .iter()
            .find(|org| org.id_text().as_deref() == Some(org_id))
        else {
            let available: Vec<String> = organizations
                .iter()
                .map(|org| {
                    format!(
                        "{} ({})",
                        org.id_text().unwrap_or_default(),
                        org.name.as_deref().unwrap_or("Unnamed")
                    )
                })
                .collect();
            return CheckOutcome::Failed(format!(
                "Organization ID '{}' not found; available: [{}]",
                org_id,
                available.join(", ")
            ));
        };

        match self.calcom.list_organization_users(api_key, org_id).await {
            Ok(users) => CheckOutcome::Ready(format!(
                "organization '{}' ({}) has {} user(s)",
                org_id,
                org.name.as_deref().unwrap_or("Unnamed"),
                users.len()
            )),
            Err(e) => CheckOutcome::Failed(format!("Users endpoint failed: {}", e)),
        }
    }

    /// Verify the access token and, when it has one, its organization listing.
    pub async fn check_calendly(&self) -> CheckOutcome {
        let Some(pat) = self.credentials.calendly_pat.as_deref() else {
            return CheckOutcome::NotConfigured("CALENDLY_PAT not set".to_string());
        };

        let me = match self.calendly.current_user(pat).await {
            Ok(me) => me,
            Err(e) => return CheckOutcome::Failed(format!("Calendly API error: {}", e)),
        };

        let user = format!(
            "{} ({})",
            me.name.as_deref().unwrap_or("Unknown"),
            me.email.as_deref().unwrap_or("No email")
        );

        let Some(organization_uri) = me
            .current_organization
            .as_deref()
            .filter(|uri| !uri.is_empty())
        else {
            return CheckOutcome::Ready(format!("token valid for {}, no current organization", user));
        };

        match self
            .calendly
            .list_organization_memberships(pat, organization_uri)
            .await
        {
            Ok(memberships) => CheckOutcome::Ready(format!(
                "token valid for {}, organization has {} member(s)",
                user,
                memberships.len()
            )),
            Err(e) => CheckOutcome::Failed(format!("Memberships endpoint failed: {}", e)),
        }
    }
}
