//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the platform clients and the search adapters. They provide a clean
//! boundary between the MCP handlers and the HTTP layer.

mod credential_check;
mod scheduling_service;

pub use credential_check::{CheckOutcome, CredentialChecker};
pub use scheduling_service::{SchedulingService, SchedulingServiceImpl, SearchLinksParams};
