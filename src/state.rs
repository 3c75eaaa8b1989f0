//! Wiring of controllers and adapters for a client session.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::{ClipboardWorkflowController, ListSyncController};
use crate::config::Config;
use crate::domain::entities::{BaseAddress, PageQuery, ShortenDraft};
use crate::infrastructure::clipboard::ClipboardBackend;
use crate::infrastructure::http::HttpShortUrlGateway;
use crate::infrastructure::navigator::BrowserNavigator;

pub type ListController = ListSyncController<HttpShortUrlGateway>;
pub type ClipboardController = ClipboardWorkflowController<ClipboardBackend, BrowserNavigator>;

/// Everything a front end needs to drive one session.
#[derive(Clone)]
pub struct AppState {
    pub list: Arc<ListController>,
    pub clipboard: Arc<ClipboardController>,
    pub base: BaseAddress,
    pub refresh_interval: Option<Duration>,
}

impl AppState {
    /// Builds the HTTP gateway, clipboard and navigator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base address or clipboard backend is invalid, or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base = config.base_address()?;

        let gateway = HttpShortUrlGateway::new(
            base.clone(),
            config.create_path.clone(),
            config.request_timeout(),
        )
        .context("Failed to build HTTP client")?;

        let clipboard: ClipboardBackend = config
            .clipboard_backend
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;

        let list = ListSyncController::new(
            Arc::new(gateway),
            PageQuery::first(config.page_limit),
            ShortenDraft::with_length(config.default_url_length),
        );

        let workflow = ClipboardWorkflowController::new(
            Arc::new(clipboard),
            Arc::new(BrowserNavigator),
            base.clone(),
        );

        Ok(Self {
            list: Arc::new(list),
            clipboard: Arc::new(workflow),
            base,
            refresh_interval: config.refresh_interval(),
        })
    }
}
