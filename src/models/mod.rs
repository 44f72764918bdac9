//! Data models for the Scheduling MCP Server.
//!
//! Wire types for the Cal.com and Calendly APIs, plus the uniform
//! result shapes returned to MCP clients.

use serde::{Deserialize, Deserializer};

pub mod calcom;
pub mod calendly;
pub mod info;
pub mod platform;
pub mod search;

pub use calcom::{CalcomEventType, CalcomOrganization, CalcomUser, CalcomUserId, DataEnvelope};
pub use calendly::{
    CalendlyEventType, CalendlyUser, Collection, OrganizationMembership, ResourceEnvelope,
};
pub use info::{OrganizationInfo, OrganizationSummary, SchedulingConfigStatus};
pub use platform::Platform;
pub use search::{MatchResult, SearchQuery, SearchResponse};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
