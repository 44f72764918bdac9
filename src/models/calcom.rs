//! Cal.com v2 API response types.
//!
//! Only the fields the search pipeline reads are modelled; everything else
//! in the payload is ignored.

use serde::Deserialize;
use std::fmt;

/// Cal.com wraps list payloads in `{"status": ..., "data": [...]}`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Cal.com user ids are numeric, but tolerate string ids too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CalcomUserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CalcomUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcomUserId::Number(n) => write!(f, "{}", n),
            CalcomUserId::Text(s) => f.write_str(s),
        }
    }
}

/// A member of a Cal.com organization.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcomUser {
    /// Records without an id cannot have their event types fetched
    #[serde(default)]
    pub id: Option<CalcomUserId>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Free-form metadata; `company` is the only key read
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl CalcomUser {
    /// The `metadata.company` string, when present.
    pub fn company(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("company"))
            .and_then(|v| v.as_str())
    }
}

/// A Cal.com event type.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcomEventType {
    #[serde(default)]
    pub slug: Option<String>,

    /// `null` counts as visible
    #[serde(default, deserialize_with = "super::deserialize_null_default")]
    pub hidden: bool,
}

/// A Cal.com organization as listed by `GET /v2/organizations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcomOrganization {
    #[serde(default)]
    pub id: Option<serde_json::Value>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,
}

impl CalcomOrganization {
    /// The organization id rendered as text, whether numeric or string.
    pub fn id_text(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
