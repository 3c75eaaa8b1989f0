//! Base address of the shortening service.
//!
//! Every endpoint and every redirect link is derived from this single value.

use std::fmt;
use url::Url;

/// Errors that can occur while parsing a base address.
#[derive(Debug, thiserror::Error)]
pub enum BaseAddressError {
    #[error("Invalid base address: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS base addresses are allowed")]
    UnsupportedProtocol,
}

/// Validated base address, always ending with `/`.
///
/// Endpoints and short codes are appended by plain concatenation, so the trailing slash
/// is what keeps `{base}{code}` well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAddress(String);

impl BaseAddress {
    /// Parses and normalizes a base address.
    ///
    /// # Errors
    ///
    /// Returns [`BaseAddressError::InvalidFormat`] for malformed URLs.
    /// Returns [`BaseAddressError::UnsupportedProtocol`] for non-HTTP(S) schemes.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let base = BaseAddress::parse("https://sho.rt/api").unwrap();
    /// assert_eq!(base.as_str(), "https://sho.rt/api/");
    /// ```
    pub fn parse(input: &str) -> Result<Self, BaseAddressError> {
        let mut url = Url::parse(input.trim())
            .map_err(|e| BaseAddressError::InvalidFormat(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(BaseAddressError::UnsupportedProtocol),
        }

        url.set_query(None);
        url.set_fragment(None);

        let mut normalized = url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the URL of an API endpoint relative to the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }

    /// Builds the public redirect link for a short code.
    ///
    /// Opening this URL performs the actual hop through the shortening service.
    pub fn redirect_url(&self, short_code: &str) -> String {
        self.endpoint(short_code)
    }
}

impl fmt::Display for BaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
