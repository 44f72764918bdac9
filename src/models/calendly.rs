//! Calendly v2 API response types.

use serde::Deserialize;

/// Single-resource responses: `{"resource": {...}}`.
#[derive(Debug, Deserialize)]
pub struct ResourceEnvelope<T> {
    pub resource: T,
}

/// List responses: `{"collection": [...], "pagination": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
}

/// A Calendly user, either the token owner or a membership's embedded user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendlyUser {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Organization reference URI; absent for tokens without an organization
    #[serde(default)]
    pub current_organization: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMembership {
    #[serde(default, deserialize_with = "super::deserialize_null_default")]
    pub user: CalendlyUser,
}

/// A Calendly event type.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendlyEventType {
    #[serde(default)]
    pub scheduling_url: Option<String>,

    /// `null` counts as inactive
    #[serde(default, deserialize_with = "super::deserialize_null_default")]
    pub active: bool,
}
