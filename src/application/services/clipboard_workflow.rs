//! Copy, reveal and redirect workflow for a single short URL.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::domain::entities::{BaseAddress, SelectedCopy};
use crate::domain::ports::{ClipboardPort, Navigator};
use crate::error::ClientError;

/// Read-only view of the workflow state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    pub selected: Option<SelectedCopy>,
    pub reveal_full_url: bool,
}

impl ClipboardSnapshot {
    /// The original long URL, once the user has asked to see it.
    pub fn revealed_full_url(&self) -> Option<&str> {
        if !self.reveal_full_url {
            return None;
        }
        self.selected.as_ref().map(|s| s.full_url.as_str())
    }
}

/// Drives copy → reveal → redirect for the most recently copied entry.
///
/// Clipboard writes are best-effort; navigation goes through the injected [`Navigator`],
/// which keeps the controller testable without a browser.
pub struct ClipboardWorkflowController<C: ClipboardPort, N: Navigator> {
    clipboard: Arc<C>,
    navigator: Arc<N>,
    base: BaseAddress,
    state: watch::Sender<ClipboardSnapshot>,
}

impl<C: ClipboardPort, N: Navigator> ClipboardWorkflowController<C, N> {
    pub fn new(clipboard: Arc<C>, navigator: Arc<N>, base: BaseAddress) -> Self {
        let (state, _) = watch::channel(ClipboardSnapshot::default());
        Self {
            clipboard,
            navigator,
            base,
            state,
        }
    }

    pub fn snapshot(&self) -> ClipboardSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClipboardSnapshot> {
        self.state.subscribe()
    }

    /// Selects an entry and copies its short code.
    ///
    /// The reveal flag is cleared and the selection replaced before the clipboard is
    /// touched. Only the short code is copied, not the redirect URL. A clipboard failure is
    /// logged and does not undo the selection.
    pub async fn copy(&self, short_code: &str, full_url: &str) {
        let selected = SelectedCopy::new(short_code, full_url);
        self.state.send_modify(|s| {
            s.reveal_full_url = false;
            s.selected = Some(selected);
        });

        match self.clipboard.write_text(short_code).await {
            Ok(()) => info!(short_code, "URL copied to clipboard"),
            Err(e) => error!(short_code, error = %e, "Failed to copy URL"),
        }
    }

    /// Shows the long URL of the selected entry.
    ///
    /// Returns false, without effect, if nothing has been copied yet.
    pub fn reveal(&self) -> bool {
        let mut has_selection = false;
        self.state.send_if_modified(|s| {
            has_selection = s.selected.is_some();
            if !has_selection || s.reveal_full_url {
                return false;
            }
            s.reveal_full_url = true;
            true
        });

        if !has_selection {
            debug!("Nothing copied yet, ignoring reveal");
        }
        has_selection
    }

    /// Opens `{base}{short_code}` of `selected` in a new browsing context.
    ///
    /// Returns the URL that was opened.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Navigation`] if the navigator fails.
    pub fn redirect(&self, selected: &SelectedCopy) -> Result<String, ClientError> {
        let url = self.base.redirect_url(&selected.short_code);

        if let Err(e) = self.navigator.open(&url) {
            error!(url = %url, error = %e, "Failed to open short URL");
            return Err(e);
        }

        info!(url = %url, "Opened short URL");
        Ok(url)
    }

    /// Redirects through the currently selected entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NothingSelected`] if nothing has been copied yet, otherwise
    /// see [`Self::redirect`].
    pub fn redirect_selected(&self) -> Result<String, ClientError> {
        let selected = self
            .snapshot()
            .selected
            .ok_or(ClientError::NothingSelected)?;
        self.redirect(&selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockClipboardPort, MockNavigator};

    fn base() -> BaseAddress {
        BaseAddress::parse("https://sho.rt/").unwrap()
    }

    fn controller(
        clipboard: MockClipboardPort,
        navigator: MockNavigator,
    ) -> ClipboardWorkflowController<MockClipboardPort, MockNavigator> {
        ClipboardWorkflowController::new(Arc::new(clipboard), Arc::new(navigator), base())
    }

    fn accepting_clipboard() -> MockClipboardPort {
        let mut clipboard = MockClipboardPort::new();
        clipboard.expect_write_text().returning(|_| Ok(()));
        clipboard
    }

    #[tokio::test]
    async fn test_copy_writes_short_code_only() {
        let mut clipboard = MockClipboardPort::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "x7Kp")
            .times(1)
            .returning(|_| Ok(()));

        let workflow = controller(clipboard, MockNavigator::new());
        workflow.copy("x7Kp", "https://example.com/long").await;

        assert_eq!(
            workflow.snapshot().selected,
            Some(SelectedCopy::new("x7Kp", "https://example.com/long"))
        );
    }

    #[tokio::test]
    async fn test_copy_clears_reveal() {
        let workflow = controller(accepting_clipboard(), MockNavigator::new());

        workflow.copy("aaaa", "https://a.com").await;
        assert!(workflow.reveal());
        assert!(workflow.snapshot().reveal_full_url);

        workflow.copy("bbbb", "https://b.com").await;
        let snapshot = workflow.snapshot();
        assert!(!snapshot.reveal_full_url);
        assert_eq!(snapshot.selected, Some(SelectedCopy::new("bbbb", "https://b.com")));
        assert_eq!(snapshot.revealed_full_url(), None);
    }

    #[tokio::test]
    async fn test_copying_same_entry_again_still_hides_long_url() {
        let workflow = controller(accepting_clipboard(), MockNavigator::new());

        workflow.copy("aaaa", "https://a.com").await;
        workflow.reveal();
        workflow.copy("aaaa", "https://a.com").await;

        assert!(!workflow.snapshot().reveal_full_url);
    }

    #[tokio::test]
    async fn test_clipboard_failure_keeps_selection() {
        let mut clipboard = MockClipboardPort::new();
        clipboard
            .expect_write_text()
            .times(1)
            .returning(|_| Err(ClientError::Clipboard("no display".into())));

        let workflow = controller(clipboard, MockNavigator::new());
        workflow.copy("x7Kp", "https://example.com").await;

        assert!(workflow.snapshot().selected.is_some());
        assert!(workflow.reveal());
    }

    #[test]
    fn test_reveal_without_selection_has_no_effect() {
        let workflow = controller(MockClipboardPort::new(), MockNavigator::new());

        assert!(!workflow.reveal());
        assert_eq!(workflow.snapshot(), ClipboardSnapshot::default());
    }

    #[tokio::test]
    async fn test_revealed_full_url() {
        let workflow = controller(accepting_clipboard(), MockNavigator::new());
        workflow.copy("x7Kp", "https://example.com/long").await;

        assert_eq!(workflow.snapshot().revealed_full_url(), None);
        workflow.reveal();
        assert_eq!(
            workflow.snapshot().revealed_full_url(),
            Some("https://example.com/long")
        );
    }

    #[test]
    fn test_redirect_opens_base_plus_code() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_open()
            .withf(|url| url == "https://sho.rt/x7Kp")
            .times(1)
            .returning(|_| Ok(()));

        let workflow = controller(MockClipboardPort::new(), navigator);
        let url = workflow
            .redirect(&SelectedCopy::new("x7Kp", "https://example.com"))
            .unwrap();

        assert_eq!(url, "https://sho.rt/x7Kp");
    }

    #[test]
    fn test_redirect_selected_requires_selection() {
        let mut navigator = MockNavigator::new();
        navigator.expect_open().never();

        let workflow = controller(MockClipboardPort::new(), navigator);
        assert!(matches!(
            workflow.redirect_selected(),
            Err(ClientError::NothingSelected)
        ));
    }

    #[tokio::test]
    async fn test_redirect_selected_uses_copied_entry() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_open()
            .withf(|url| url == "https://sho.rt/b2")
            .times(1)
            .returning(|_| Ok(()));

        let workflow = controller(accepting_clipboard(), navigator);
        workflow.copy("a1", "https://a.com").await;
        workflow.copy("b2", "https://b.com").await;

        assert_eq!(workflow.redirect_selected().unwrap(), "https://sho.rt/b2");
    }

    #[test]
    fn test_navigation_failure_is_returned() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_open()
            .times(1)
            .returning(|_| Err(ClientError::Navigation("no browser".into())));

        let workflow = controller(MockClipboardPort::new(), navigator);
        let result = workflow.redirect(&SelectedCopy::new("x", "https://a.com"));

        assert!(matches!(result, Err(ClientError::Navigation(_))));
    }
}
