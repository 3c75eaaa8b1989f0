//! Client-side URL validation.
//!
//! Runs before a create request is issued so malformed input never reaches the network.

use regex::Regex;
use std::sync::LazyLock;

/// Optional `http(s)://` prefix, dot-separated alphanumeric/hyphen labels, an alphabetic TLD of
/// two or more characters and an optional whitespace-free path.
pub static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,})(/[^\s]*)?$").unwrap()
});

/// Returns true if `candidate` looks like a URL the shortening service will accept.
///
/// The check is purely syntactic: no DNS lookup, no scheme other than HTTP(S).
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/path"));
/// assert!(is_valid_url("example.org"));
///
/// assert!(!is_valid_url(""));
/// assert!(!is_valid_url("ftp://bad"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}
