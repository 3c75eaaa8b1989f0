//! Port to the remote shortening service.

use crate::domain::entities::{NewShortUrl, PageQuery, PageResult};
use crate::error::ClientError;
use async_trait::async_trait;

/// Remote operations the client core depends on.
///
/// Implementations perform network I/O only; they hold no list state and never retry.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortUrlGateway`] - HTTP/JSON implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlGateway: Send + Sync {
    /// Fetches one page of short URLs in server-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] on transport or decoding failures and
    /// [`ClientError::HttpStatus`] on non-success responses.
    async fn fetch_page(&self, query: PageQuery) -> Result<PageResult, ClientError>;

    /// Asks the service to create a short URL.
    ///
    /// The response body is not needed: the caller refetches the current page to pick up
    /// server-assigned fields.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_page`].
    async fn create_short_url(&self, request: NewShortUrl) -> Result<(), ClientError>;
}
