//! Async wrappers around the synchronous platform clients.
//!
//! This module provides async interfaces to the `ureq`-based clients by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime. The traits are also the seam the
//! platform adapters are tested through.

use crate::client::{CalcomClient, CalendlyClient};
use crate::error::{ApiError, ApiResult};
use crate::models::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Async Cal.com operations.
#[async_trait]
pub trait AsyncCalcomClient: Send + Sync {
    async fn list_organizations(&self, api_key: &str) -> ApiResult<Vec<CalcomOrganization>>;

    async fn list_organization_users(
        &self,
        api_key: &str,
        org_id: &str,
    ) -> ApiResult<Vec<CalcomUser>>;

    async fn list_event_types(
        &self,
        api_key: &str,
        user_id: &CalcomUserId,
    ) -> ApiResult<Vec<CalcomEventType>>;
}

/// Async Calendly operations.
#[async_trait]
pub trait AsyncCalendlyClient: Send + Sync {
    async fn current_user(&self, pat: &str) -> ApiResult<CalendlyUser>;

    async fn list_organization_memberships(
        &self,
        pat: &str,
        organization_uri: &str,
    ) -> ApiResult<Vec<OrganizationMembership>>;

    async fn list_event_types(&self, pat: &str, user_uri: &str)
        -> ApiResult<Vec<CalendlyEventType>>;
}

fn join_error(e: tokio::task::JoinError) -> ApiError {
    ApiError::TaskJoin(e.to_string())
}

/// Async wrapper around synchronous CalcomClient.
#[derive(Clone)]
pub struct AsyncCalcomClientImpl {
    client: Arc<CalcomClient>,
}

impl AsyncCalcomClientImpl {
    pub fn new(client: CalcomClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncCalcomClient for AsyncCalcomClientImpl {
    async fn list_organizations(&self, api_key: &str) -> ApiResult<Vec<CalcomOrganization>> {
        let client = self.client.clone();
        let api_key = api_key.to_string();

        tokio::task::spawn_blocking(move || client.list_organizations(&api_key))
            .await
            .map_err(join_error)?
    }

    async fn list_organization_users(
        &self,
        api_key: &str,
        org_id: &str,
    ) -> ApiResult<Vec<CalcomUser>> {
        let client = self.client.clone();
        let api_key = api_key.to_string();
        let org_id = org_id.to_string();

        tokio::task::spawn_blocking(move || client.list_organization_users(&api_key, &org_id))
            .await
            .map_err(join_error)?
    }

    async fn list_event_types(
        &self,
        api_key: &str,
        user_id: &CalcomUserId,
    ) -> ApiResult<Vec<CalcomEventType>> {
        let client = self.client.clone();
        let api_key = api_key.to_string();
        let user_id = user_id.clone();

        tokio::task::spawn_blocking(move || client.list_event_types(&api_key, &user_id))
            .await
            .map_err(join_error)?
    }
}

/// Async wrapper around synchronous CalendlyClient.
#[derive(Clone)]
pub struct AsyncCalendlyClientImpl {
    client: Arc<CalendlyClient>,
}

impl AsyncCalendlyClientImpl {
    pub fn new(client: CalendlyClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncCalendlyClient for AsyncCalendlyClientImpl {
    async fn current_user(&self, pat: &str) -> ApiResult<CalendlyUser> {
        let client = self.client.clone();
        let pat = pat.to_string();

        tokio::task::spawn_blocking(move || client.current_user(&pat))
            .await
            .map_err(join_error)?
    }

    async fn list_organization_memberships(
        &self,
        pat: &str,
        organization_uri: &str,
    ) -> ApiResult<Vec<OrganizationMembership>> {
        let client = self.client.clone();
        let pat = pat.to_string();
        let organization_uri = organization_uri.to_string();

        tokio::task::spawn_blocking(move || {
            client.list_organization_memberships(&pat, &organization_uri)
        })
        .await
        .map_err(join_error)?
    }

    async fn list_event_types(
        &self,
        pat: &str,
        user_uri: &str,
    ) -> ApiResult<Vec<CalendlyEventType>> {
        let client = self.client.clone();
        let pat = pat.to_string();
        let user_uri = user_uri.to_string();

        tokio::task::spawn_blocking(move || client.list_event_types(&pat, &user_uri))
            .await
            .map_err(join_error)?
    }
}
