//! HTTP clients for the Cal.com and Calendly REST APIs.
//!
//! The clients are synchronous (`ureq`) and are called from async contexts
//! through the wrappers in `async_wrapper`, which use
//! `tokio::task::spawn_blocking`. Every call is an authenticated GET carrying
//! a bearer token supplied per call, so one client serves both configured
//! defaults and per-call overrides.

mod async_wrapper;
mod calcom;
mod calendly;

pub use async_wrapper::{
    AsyncCalcomClient, AsyncCalcomClientImpl, AsyncCalendlyClient, AsyncCalendlyClientImpl,
};
pub use calcom::CalcomClient;
pub use calendly::CalendlyClient;

use crate::error::{ApiError, ApiResult};
use crate::metrics::{HttpTimer, Metrics};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Bearer-authenticated JSON GET client bound to one API base URL.
#[derive(Clone)]
pub struct RestClient {
    /// Base URL for the API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl RestClient {
    /// Create a client for `base_url` whose requests time out after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.into(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with bearer authentication and decode the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        let url = self.build_url(path);
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!("GET {}", url);

        let response = match self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", token))
            .set("Content-Type", "application/json")
            .call()
        {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                timer.complete_with_error();
                let error = self.map_error(e);
                tracing::debug!("GET {} - Error: {}", url, error);
                return Err(error);
            }
        };

        let body = response
            .into_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(ApiError::JsonError)
    }

    /// Map a ureq error to an ApiError.
    fn map_error(&self, error: ureq::Error) -> ApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                ApiError::Status { status, body }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ApiError::Transport("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ApiError::Timeout
                } else {
                    ApiError::Transport(transport.to_string())
                }
            }
        }
    }
}
