//! Payloads for the configuration status and organization lookup tools.

use crate::config::Credentials;
use crate::models::Platform;
use serde::Serialize;

/// Which default credentials are configured; never carries secret values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingConfigStatus {
    pub calcom: CalcomConfigStatus,
    pub calendly: CalendlyConfigStatus,
    pub instructions: ConfigInstructions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcomConfigStatus {
    pub api_key_configured: bool,
    pub org_id_configured: bool,
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendlyConfigStatus {
    pub pat_configured: bool,
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigInstructions {
    pub calcom: &'static str,
    pub calendly: &'static str,
}

impl From<&Credentials> for SchedulingConfigStatus {
    fn from(credentials: &Credentials) -> Self {
        let api_key_configured = credentials.calcom_api_key.is_some();
        let org_id_configured = credentials.calcom_org_id.is_some();
        let pat_configured = credentials.calendly_pat.is_some();

        Self {
            calcom: CalcomConfigStatus {
                api_key_configured,
                org_id_configured,
                ready: api_key_configured && org_id_configured,
            },
            calendly: CalendlyConfigStatus {
                pat_configured,
                ready: pat_configured,
            },
            instructions: ConfigInstructions {
                calcom: "Set CALCOM_API_KEY and CALCOM_ORG_ID environment variables OR provide them as parameters",
                calendly: "Set CALENDLY_PAT environment variable OR provide it as a parameter",
            },
        }
    }
}

/// Organization details that help a caller scope later searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrganizationInfo {
    Calcom {
        platform: Platform,
        organizations: Vec<OrganizationSummary>,
    },
    Calendly {
        platform: Platform,
        user_name: Option<String>,
        user_email: Option<String>,
        organization_uri: Option<String>,
        description: String,
    },
}

impl OrganizationInfo {
    pub fn platform(&self) -> Platform {
        match self {
            OrganizationInfo::Calcom { platform, .. } | OrganizationInfo::Calendly { platform, .. } => {
                *platform
            }
        }
    }
}

/// One Cal.com organization and how to search it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationSummary {
    pub id: serde_json::Value,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: String,
}
