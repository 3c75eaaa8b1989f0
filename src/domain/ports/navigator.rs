//! Port for opening links outside the client.

use crate::error::ClientError;

/// Opens a URL in a new browsing context.
///
/// This is the only capability through which the client navigates externally.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ClientError::Navigation`] if no browser could be launched.
    fn open(&self, url: &str) -> Result<(), ClientError>;
}
