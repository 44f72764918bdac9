//! Platform search adapters.
//!
//! Each adapter lists a platform's users, filters them with the shared
//! identity matcher, and turns each matched user's event types into booking
//! links. Adapters are built per call with their credential and scope
//! already resolved, so the orchestrator can drive either one through
//! `PlatformSearch`.

pub mod calcom;
pub mod calendly;

pub use calcom::{calcom_booking_links, CalcomSearch, CALCOM_BOOKING_BASE_URL};
pub use calendly::{calendly_booking_links, CalendlySearch};

use crate::error::SchedulingResult;
use crate::models::{MatchResult, Platform, SearchQuery};
use async_trait::async_trait;

/// A search over one platform's users.
#[async_trait]
pub trait PlatformSearch: Send + Sync {
    fn platform(&self) -> Platform;

    /// Matched users in upstream listing order, each with their booking links.
    ///
    /// Users whose event types cannot be fetched are left out rather than
    /// failing the whole search.
    async fn search(&self, query: &SearchQuery) -> SchedulingResult<Vec<MatchResult>>;
}
