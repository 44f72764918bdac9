//! Name and company matching for user records from any platform.
//!
//! Both checks are deliberately loose substring matches so that free-text
//! company names and partial person names still find the right user:
//! - every search word must appear in the user's name or email
//! - the guessed company domain must appear in the email, or the search
//!   company must appear in the user's company field

use super::domain::extract_domain;
use crate::models::SearchQuery;

/// True when every whitespace-separated word of `search_name` occurs in the
/// user's name or email (case-insensitive).
pub fn match_name(search_name: &str, user_name: Option<&str>, user_email: Option<&str>) -> bool {
    let name = user_name.unwrap_or_default().to_lowercase();
    let email = user_email.unwrap_or_default().to_lowercase();

    search_name
        .to_lowercase()
        .split_whitespace()
        .all(|word| name.contains(word) || email.contains(word))
}

/// True when the guessed domain of `search_company` occurs in the user's
/// email, or `search_company` occurs in the user's company field.
pub fn match_company(
    search_company: &str,
    user_email: Option<&str>,
    user_company: Option<&str>,
) -> bool {
    let expected_domain = extract_domain(search_company);
    let email = user_email.unwrap_or_default().to_lowercase();

    if email.contains(&expected_domain) {
        return true;
    }

    match user_company {
        Some(company) if !company.is_empty() => company
            .to_lowercase()
            .contains(&search_company.to_lowercase()),
        _ => false,
    }
}

/// A user record matches when both the name and company checks pass.
pub fn matches_query(
    query: &SearchQuery,
    user_name: Option<&str>,
    user_email: Option<&str>,
    user_company: Option<&str>,
) -> bool {
    match_name(&query.name, user_name, user_email)
        && match_company(&query.company, user_email, user_company)
}
