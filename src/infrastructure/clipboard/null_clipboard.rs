//! No-op clipboard for headless sessions.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::ClipboardPort;
use crate::error::ClientError;

/// A clipboard that accepts every write and stores nothing.
///
/// # Use Cases
///
/// - Headless machines without a display server
/// - Terminals without OSC 52 support
/// - Scripts where touching the user's clipboard is unwanted
pub struct NullClipboard;

impl NullClipboard {
    pub fn new() -> Self {
        debug!("Using NullClipboard (clipboard disabled)");
        Self
    }
}

impl Default for NullClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardPort for NullClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClientError> {
        Ok(())
    }
}
