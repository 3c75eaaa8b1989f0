#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url_shrinker::prelude::*;

/// In-memory gateway recording every call.
///
/// Page `n` holds `page_sizes[n]` entries (0 when unset), cut to the requested limit.
/// Delays use tokio time, so paused-clock tests stay deterministic.
#[derive(Default)]
pub struct FakeGateway {
    page_sizes: Mutex<HashMap<u32, usize>>,
    delays: Mutex<HashMap<u32, Duration>>,
    create_delay: Mutex<Option<Duration>>,
    fetches: Mutex<Vec<PageQuery>>,
    creates: Mutex<Vec<NewShortUrl>>,
    fail_fetch: AtomicBool,
    fail_create: AtomicBool,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_page(self: Arc<Self>, page: u32, size: usize) -> Arc<Self> {
        self.page_sizes.lock().unwrap().insert(page, size);
        self
    }

    pub fn with_delay(self: Arc<Self>, page: u32, delay: Duration) -> Arc<Self> {
        self.delays.lock().unwrap().insert(page, delay);
        self
    }

    pub fn with_create_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        *self.create_delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_creates(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> Vec<PageQuery> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn creates(&self) -> Vec<NewShortUrl> {
        self.creates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortUrlGateway for FakeGateway {
    async fn fetch_page(&self, query: PageQuery) -> Result<PageResult, ClientError> {
        self.fetches.lock().unwrap().push(query);

        let delay = self.delays.lock().unwrap().get(&query.page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(ClientError::network("connection refused"));
        }

        let size = self
            .page_sizes
            .lock()
            .unwrap()
            .get(&query.page)
            .copied()
            .unwrap_or(0)
            .min(query.limit as usize);
        Ok(PageResult::new(entries(query.page, size)))
    }

    async fn create_short_url(&self, request: NewShortUrl) -> Result<(), ClientError> {
        self.creates.lock().unwrap().push(request);

        let delay = *self.create_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ClientError::http_status(500, "boom"));
        }
        Ok(())
    }
}

/// Entries `p{page}-{i}` for one page.
pub fn entries(page: u32, count: usize) -> Vec<ShortUrlEntry> {
    (0..count)
        .map(|i| {
            ShortUrlEntry::new(
                format!("p{page}-{i}"),
                format!("https://example.com/{page}/{i}"),
                format!("c{page}x{i}"),
                i as u64,
            )
        })
        .collect()
}

pub fn list_controller(
    gateway: Arc<FakeGateway>,
    limit: u32,
) -> Arc<ListSyncController<FakeGateway>> {
    Arc::new(ListSyncController::new(
        gateway,
        PageQuery::first(limit),
        ShortenDraft::default(),
    ))
}

/// Clipboard remembering every write.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl ClipboardPort for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClientError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::Clipboard("no display".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Navigator remembering every opened URL.
#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) -> Result<(), ClientError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
