//! Scheduling MCP Server - finds public booking links on Cal.com and Calendly.
//!
//! Given a person's name and company, the server searches one scheduling
//! platform for matching users and returns the links of their bookable
//! event types.
//!
//! # Architecture
//!
//! - **models**: Platform payloads and tool response types
//! - **error**: Error types for upstream calls, searches and configuration
//! - **config**: Configuration and default credentials from environment variables
//! - **client**: HTTP clients for the Cal.com and Calendly APIs
//! - **matching**: Name and company matching, company domain heuristic
//! - **tools**: Per-platform search adapters
//! - **services**: Input validation, dispatch and credential checks
//! - **server**: MCP protocol server
//! - **metrics**: HTTP and search counters

pub mod client;
pub mod config;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod tools;

pub use client::{CalcomClient, CalendlyClient};
pub use config::{Config, Credentials};
pub use error::{ApiError, ConfigError, SchedulingError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{MatchResult, Platform, SearchQuery, SearchResponse};
pub use server::SchedulingMcpServer;
pub use services::{SchedulingService, SchedulingServiceImpl, SearchLinksParams};
