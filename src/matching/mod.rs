//! Identity matching for scheduling platform users.
//!
//! This module decides whether a user record from Cal.com or Calendly
//! matches a person's name and company, and guesses company email domains.

pub mod domain;
pub mod identity_matcher;

pub use domain::extract_domain;
pub use identity_matcher::{match_company, match_name, matches_query};
