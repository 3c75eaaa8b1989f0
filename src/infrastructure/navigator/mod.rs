//! Navigation adapter.

use tracing::debug;

use crate::domain::ports::Navigator;
use crate::error::ClientError;

/// Opens URLs in the user's default browser via `open`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) -> Result<(), ClientError> {
        debug!(url, "Launching browser");
        open::that_detached(url).map_err(|e| ClientError::Navigation(e.to_string()))
    }
}
