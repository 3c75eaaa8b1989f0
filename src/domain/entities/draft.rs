//! Entry form state for creating a short URL.

use validator::Validate;

use super::short_url::NewShortUrl;
use crate::error::ValidationError;
use crate::utils::url_validator::URL_PATTERN;

/// Shortest short code the service will generate.
pub const MIN_URL_LENGTH: u32 = 4;

/// What the user has typed into the "shorten" form.
///
/// Kept when a create fails so the input is not lost, reset to defaults after a
/// successful create.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ShortenDraft {
    #[validate(regex(path = "*URL_PATTERN"))]
    pub full_url: String,

    #[validate(range(min = 4))]
    pub url_length: u32,
}

impl ShortenDraft {
    /// Empty draft with the given default short code length.
    pub fn with_length(url_length: u32) -> Self {
        Self {
            full_url: String::new(),
            url_length,
        }
    }

    /// Validates the draft, URL first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUrl`] if the URL does not pass the URL pattern,
    /// otherwise [`ValidationError::UrlLengthTooShort`] if the length is below
    /// [`MIN_URL_LENGTH`].
    pub fn check(&self) -> Result<(), ValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        if errors.field_errors().contains_key("full_url") {
            return Err(ValidationError::InvalidUrl);
        }

        Err(ValidationError::UrlLengthTooShort {
            min: MIN_URL_LENGTH,
            actual: self.url_length,
        })
    }

    /// Converts the draft into a create request.
    pub fn to_request(&self) -> NewShortUrl {
        NewShortUrl::new(self.full_url.clone(), self.url_length)
    }
}

impl Default for ShortenDraft {
    fn default() -> Self {
        Self::with_length(MIN_URL_LENGTH)
    }
}
