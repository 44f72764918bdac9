//! Company name to email domain heuristic.

use once_cell::sync::Lazy;
use regex::Regex;

/// A trailing legal-entity suffix preceded by whitespace, e.g. " Corp." or " llc".
static LEGAL_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(corp|inc|llc|ltd|company|co)\.?$").expect("valid legal suffix regex")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]").expect("valid alphanumeric regex"));

/// Guess a company's email domain: "Acme Corp" becomes "acme.com".
///
/// This is a best-effort guess. Multi-word domains and non-`.com` TLDs are
/// not recovered, and input that strips down to nothing yields ".com".
pub fn extract_domain(company: &str) -> String {
    let lowered = company.to_lowercase();
    let without_suffix = LEGAL_SUFFIX.replace(&lowered, "");
    let collapsed = WHITESPACE.replace_all(&without_suffix, "");
    let cleaned = NON_ALPHANUMERIC.replace_all(&collapsed, "");
    format!("{}.com", cleaned)
}
