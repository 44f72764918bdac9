//! Uniform search input and output shapes shared by both platforms.

use crate::models::Platform;
use serde::Serialize;

/// The name and company to search for.
///
/// `new` stores both fields as given; the scheduling service trims them and
/// rejects blank values before building a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub name: String,
    pub company: String,
}

impl SearchQuery {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
        }
    }
}

/// One matched user and their public booking links.
///
/// An empty `booking_links` list is a valid result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub name: String,
    pub email: String,
    pub company: String,
    pub booking_links: Vec<String>,
}

/// Payload returned by `search_scheduling_links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResponse {
    pub message: String,
    pub results: Vec<MatchResult>,
}

impl SearchResponse {
    /// Summarize results; zero matches is still a successful response.
    pub fn new(query: &SearchQuery, platform: Platform, results: Vec<MatchResult>) -> Self {
        let message = if results.is_empty() {
            format!(
                "No scheduling links found for '{}' at '{}' on {}",
                query.name,
                query.company,
                platform.as_str()
            )
        } else {
            format!(
                "Found {} scheduling link(s) for '{}' at '{}' on {}",
                results.len(),
                query.name,
                query.company,
                platform.as_str()
            )
        };

        Self { message, results }
    }
}
