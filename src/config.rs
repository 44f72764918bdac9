//! Configuration management for the Scheduling MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

pub const DEFAULT_CALCOM_API_URL: &str = "https://api.cal.com";
pub const DEFAULT_CALENDLY_API_URL: &str = "https://api.calendly.com";

/// Configuration for the Scheduling MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cal.com API base URL
    pub calcom_api_url: String,

    /// Calendly API base URL
    pub calendly_api_url: String,

    /// Default secrets, overridable per call
    pub credentials: Credentials,

    /// HTTP timeout for search and lookup calls in seconds (default: 30)
    pub request_timeout: u64,

    /// HTTP timeout for credential validation in seconds (default: 10)
    pub credential_check_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

/// Default credentials for both platforms.
///
/// Loaded once at startup and passed explicitly to the service layer.
#[derive(Clone, Default)]
pub struct Credentials {
    pub calcom_api_key: Option<String>,
    pub calcom_org_id: Option<String>,
    pub calendly_pat: Option<String>,
}

impl Credentials {
    /// Effective Cal.com API key: a non-blank override wins over the default.
    pub fn calcom_api_key(&self, api_key_override: Option<&str>) -> Option<String> {
        resolve(api_key_override, self.calcom_api_key.as_deref())
    }

    /// Effective Calendly token: a non-blank override wins over the default.
    pub fn calendly_pat(&self, pat_override: Option<&str>) -> Option<String> {
        resolve(pat_override, self.calendly_pat.as_deref())
    }
}

// Secrets never show up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("calcom_api_key", &self.calcom_api_key.as_ref().map(|_| "***"))
            .field("calcom_org_id", &self.calcom_org_id)
            .field("calendly_pat", &self.calendly_pat.as_ref().map(|_| "***"))
            .finish()
    }
}

fn resolve(override_value: Option<&str>, default: Option<&str>) -> Option<String> {
    override_value
        .filter(|v| !v.trim().is_empty())
        .or(default)
        .map(str::to_string)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CALCOM_API_KEY`: Default Cal.com API key
    /// - `CALCOM_ORG_ID`: Default Cal.com organization id
    /// - `CALENDLY_PAT`: Default Calendly personal access token
    /// - `CALCOM_API_BASE_URL`: Cal.com API URL (default: https://api.cal.com)
    /// - `CALENDLY_API_BASE_URL`: Calendly API URL (default: https://api.calendly.com)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `CREDENTIAL_CHECK_TIMEOUT`: Credential check timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let calcom_api_url = Self::parse_env_url("CALCOM_API_BASE_URL", DEFAULT_CALCOM_API_URL)?;
        let calendly_api_url =
            Self::parse_env_url("CALENDLY_API_BASE_URL", DEFAULT_CALENDLY_API_URL)?;

        let credentials = Credentials {
            calcom_api_key: Self::optional_env("CALCOM_API_KEY"),
            calcom_org_id: Self::optional_env("CALCOM_ORG_ID"),
            calendly_pat: Self::optional_env("CALENDLY_PAT"),
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;
        let credential_check_timeout = Self::parse_env_u64("CREDENTIAL_CHECK_TIMEOUT", 10)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            calcom_api_url,
            calendly_api_url,
            credentials,
            request_timeout,
            credential_check_timeout,
            log_level,
        })
    }

    /// Read an environment variable, treating blank values as unset.
    fn optional_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Read a base URL, validating the scheme.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = Self::optional_env(var_name).unwrap_or_else(|| default.to_string());
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(url)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            calcom_api_url: DEFAULT_CALCOM_API_URL.to_string(),
            calendly_api_url: DEFAULT_CALENDLY_API_URL.to_string(),
            credentials: Credentials::default(),
            request_timeout: 30,
            credential_check_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
