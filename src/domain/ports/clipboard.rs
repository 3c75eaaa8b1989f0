//! Port to the platform clipboard.

use crate::error::ClientError;
use async_trait::async_trait;

/// Write access to a clipboard.
///
/// Writes are best-effort: callers log failures and carry on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Clipboard`] if the platform clipboard is unavailable.
    async fn write_text(&self, text: &str) -> Result<(), ClientError>;
}
