//! Error types for the Scheduling MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::models::Platform;
use thiserror::Error;

/// Errors that can occur when talking to an upstream scheduling API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// API returned a client or server error status code
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Connection failure or other transport problem
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The blocking task running the request panicked or was cancelled
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

impl ApiError {
    /// The upstream HTTP status, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by the search and lookup operations.
#[derive(Error, Debug)]
pub enum SchedulingError {
    /// Empty or missing required field, unsupported platform, missing org id
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Neither a per-call override nor a configured default secret exists
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// A required upstream call failed
    #[error("{platform} API error: {source}")]
    Upstream {
        platform: Platform,
        #[source]
        source: ApiError,
    },
}

impl SchedulingError {
    /// Wrap a client error as an upstream failure for the given platform.
    pub fn upstream(platform: Platform) -> impl FnOnce(ApiError) -> Self {
        move |source| SchedulingError::Upstream { platform, source }
    }

    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, SchedulingError::InvalidParameters(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with SchedulingError
pub type SchedulingResult<T> = Result<T, SchedulingError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
