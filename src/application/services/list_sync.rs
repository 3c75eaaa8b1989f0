//! List synchronization state machine.
//!
//! Keeps the displayed page consistent with the remote list across fetches, page changes
//! and creates, and owns the loading flag shared by all of them.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::pagination::PaginationController;
use crate::domain::entities::{PageQuery, ShortUrlEntry, ShortenDraft};
use crate::domain::ports::ShortUrlGateway;
use crate::error::{ClientError, ValidationError};

/// What the controller is waiting on.
///
/// The front end only needs [`ListSnapshot::is_loading`]; the tag is there for richer
/// feedback. A pending create outranks a pending fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Fetching,
    Creating,
}

/// Read-only view of the list state, published on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    entries: Vec<ShortUrlEntry>,
    query: PageQuery,
    draft: ShortenDraft,
    refreshed_at: Option<DateTime<Utc>>,
    fetching: usize,
    creating: usize,
    generation: u64,
}

impl ListSnapshot {
    fn new(query: PageQuery, draft: ShortenDraft) -> Self {
        Self {
            entries: Vec::new(),
            query,
            draft,
            refreshed_at: None,
            fetching: 0,
            creating: 0,
            generation: 0,
        }
    }

    /// Entries of the last applied page, in server order.
    pub fn entries(&self) -> &[ShortUrlEntry] {
        &self.entries
    }

    /// Current page cursor.
    pub fn query(&self) -> PageQuery {
        self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn limit(&self) -> u32 {
        self.query.limit
    }

    pub fn request_state(&self) -> RequestState {
        if self.creating > 0 {
            RequestState::Creating
        } else if self.fetching > 0 {
            RequestState::Fetching
        } else {
            RequestState::Idle
        }
    }

    /// True while a fetch or create is in flight.
    pub fn is_loading(&self) -> bool {
        self.request_state() != RequestState::Idle
    }

    pub fn draft(&self) -> &ShortenDraft {
        &self.draft
    }

    /// When a page was last applied, `None` before the first successful fetch.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Next is enabled iff the last page came back full.
    pub fn has_next(&self) -> bool {
        PaginationController::has_next(self.query, self.entries.len())
    }

    pub fn has_previous(&self) -> bool {
        !self.query.is_first()
    }
}

/// Central state machine behind the short URL list.
///
/// # Entry points
///
/// - [`Self::refresh`] - fetch the current page
/// - [`Self::submit`] / [`Self::create`] - validate, create, then refetch the current page
/// - [`Self::set_page`], [`Self::set_limit`], [`Self::next_page`], [`Self::previous_page`] -
///   move the cursor; [`Self::run`] observes the change and refetches
///
/// # Ordering
///
/// Each fetch takes a monotonic generation. A response is applied only if its generation
/// is still the newest and its query still matches the cursor, so a slow response can
/// never overwrite a newer page.
///
/// # Disposal
///
/// After [`Self::dispose`], in-flight calls are abandoned and no response touches state.
pub struct ListSyncController<G: ShortUrlGateway> {
    gateway: Arc<G>,
    pagination: PaginationController,
    state: watch::Sender<ListSnapshot>,
    default_draft: ShortenDraft,
    cancel: CancellationToken,
}

impl<G: ShortUrlGateway> ListSyncController<G> {
    /// Creates a controller positioned at `initial` with an empty draft of `default_draft`.
    pub fn new(gateway: Arc<G>, initial: PageQuery, default_draft: ShortenDraft) -> Self {
        let (state, _) = watch::channel(ListSnapshot::new(initial, default_draft.clone()));

        Self {
            gateway,
            pagination: PaginationController::new(initial),
            state,
            default_draft,
            cancel: CancellationToken::new(),
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> ListSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.state.subscribe()
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    /// Moves to `page`; see [`PaginationController::set_page`].
    pub fn set_page(&self, page: u32) -> bool {
        let changed = self.pagination.set_page(page);
        self.sync_query();
        changed
    }

    /// Changes the page size and returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLimit`] if `limit` is 0 or above the maximum.
    pub fn set_limit(&self, limit: u32) -> Result<bool, ValidationError> {
        let changed = self.pagination.set_limit(limit)?;
        self.sync_query();
        Ok(changed)
    }

    /// Advances one page if the last page came back full.
    pub fn next_page(&self) -> bool {
        if !self.snapshot().has_next() {
            debug!("Last page reached, ignoring next");
            return false;
        }
        let changed = self.pagination.next_page();
        self.sync_query();
        changed
    }

    /// Goes back one page; does nothing on page 1.
    pub fn previous_page(&self) -> bool {
        let changed = self.pagination.previous_page();
        self.sync_query();
        changed
    }

    /// Replaces the URL in the draft.
    pub fn set_draft_url(&self, full_url: impl Into<String>) {
        let full_url = full_url.into();
        self.state.send_modify(|s| s.draft.full_url = full_url);
    }

    /// Replaces the requested short code length in the draft.
    pub fn set_draft_length(&self, url_length: u32) {
        self.state.send_modify(|s| s.draft.url_length = url_length);
    }

    /// Fetches the current page and replaces the entries wholesale.
    ///
    /// On failure the previous entries stay in place.
    ///
    /// # Errors
    ///
    /// Returns the gateway error (already logged), or [`ClientError::Cancelled`] after
    /// disposal.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        self.begin(RequestState::Fetching)?;
        let result = self.fetch(self.pagination.query()).await;
        self.finish(RequestState::Fetching);
        result
    }

    /// Fills the draft and submits it.
    ///
    /// # Errors
    ///
    /// See [`Self::submit`].
    pub async fn create(
        &self,
        full_url: impl Into<String>,
        url_length: u32,
    ) -> Result<(), ClientError> {
        let draft = ShortenDraft {
            full_url: full_url.into(),
            url_length,
        };
        self.state.send_modify(|s| s.draft = draft);
        self.submit().await
    }

    /// Validates the draft, creates the short URL and refetches the current page.
    ///
    /// There is no optimistic insert: the list only changes through the refetch, which uses
    /// the page cursor active at submission. A failed refetch after a successful create is
    /// logged and not reported as a create failure.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] without any network call if the draft is
    /// invalid, the gateway error if the create fails (the draft is kept), or
    /// [`ClientError::Cancelled`] after disposal.
    pub async fn submit(&self) -> Result<(), ClientError> {
        self.begin(RequestState::Creating)?;
        let query = self.pagination.query();

        if let Err(e) = self.create_draft().await {
            self.finish(RequestState::Creating);
            return Err(e);
        }
        if self.cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        // The POST is done; the refetch is tracked as a fetch from here on.
        let fresh = self.default_draft.clone();
        self.state.send_modify(|s| {
            s.draft = fresh;
            s.creating = s.creating.saturating_sub(1);
            s.fetching += 1;
        });

        let refetched = self.fetch(query).await;
        self.finish(RequestState::Fetching);

        match refetched {
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Stops the observer loop and abandons in-flight calls.
    pub fn dispose(&self) {
        if !self.cancel.is_cancelled() {
            info!("Disposing list sync");
            self.cancel.cancel();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn create_draft(&self) -> Result<(), ClientError> {
        let draft = self.state.borrow().draft.clone();

        if let Err(e) = draft.check() {
            warn!(url = %draft.full_url, length = draft.url_length, error = %e, "Rejected short URL request");
            return Err(e.into());
        }

        debug!(url = %draft.full_url, length = draft.url_length, "Creating short URL");

        let created = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(ClientError::Cancelled),
            result = self.gateway.create_short_url(draft.to_request()) => result,
        };

        match created {
            Ok(()) => {
                info!(url = %draft.full_url, "Short URL created");
                Ok(())
            }
            Err(e) => {
                error!(url = %draft.full_url, error = %e, "Error creating short URL");
                Err(e)
            }
        }
    }

    async fn fetch(&self, query: PageQuery) -> Result<(), ClientError> {
        let generation = self.next_generation();
        debug!(page = query.page, limit = query.limit, generation, "Fetching page");

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(ClientError::Cancelled),
            result = self.gateway.fetch_page(query) => result,
        };

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                error!(page = query.page, limit = query.limit, error = %e, "Error fetching data");
                return Err(e);
            }
        };

        let count = page.len();
        let current = self.pagination.query();
        let applied = self.state.send_if_modified(|s| {
            if s.generation != generation || current != query {
                return false;
            }
            s.entries = page.entries;
            s.refreshed_at = Some(Utc::now());
            true
        });

        if applied {
            info!(page = query.page, limit = query.limit, count, "Page loaded");
        } else {
            debug!(page = query.page, limit = query.limit, generation, "Discarding stale page response");
        }

        Ok(())
    }

    fn next_generation(&self) -> u64 {
        let mut generation = 0;
        // Bookkeeping only, nothing observers need to re-render for.
        self.state.send_if_modified(|s| {
            s.generation += 1;
            generation = s.generation;
            false
        });
        generation
    }

    fn begin(&self, request: RequestState) -> Result<(), ClientError> {
        if self.cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        self.state.send_modify(|s| match request {
            RequestState::Fetching => s.fetching += 1,
            RequestState::Creating => s.creating += 1,
            RequestState::Idle => {}
        });
        Ok(())
    }

    fn finish(&self, request: RequestState) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.send_modify(|s| match request {
            RequestState::Fetching => s.fetching = s.fetching.saturating_sub(1),
            RequestState::Creating => s.creating = s.creating.saturating_sub(1),
            RequestState::Idle => {}
        });
    }

    fn sync_query(&self) {
        let query = self.pagination.query();
        self.state.send_if_modified(|s| {
            if s.query == query {
                return false;
            }
            s.query = query;
            true
        });
    }
}

impl<G: ShortUrlGateway + 'static> ListSyncController<G> {
    /// Observer loop: fetches on mount, on every cursor change and, if `refresh_every` is
    /// set, periodically.
    ///
    /// Each trigger spawns exactly one fetch; overlapping fetches are resolved by
    /// generation. Returns after [`Self::dispose`].
    pub async fn run(self: Arc<Self>, refresh_every: Option<Duration>) {
        let mut changes = self.pagination.subscribe();
        let mut ticker = refresh_every.filter(|period| !period.is_zero()).map(|period| {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        info!(auto_refresh = ?refresh_every, "List sync started");
        self.spawn_refresh();

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                changed = changes.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.spawn_refresh();
                }
                _ = next_tick(&mut ticker) => {
                    debug!("Auto-refresh");
                    self.spawn_refresh();
                }
            }
        }

        info!("List sync stopped");
    }

    fn spawn_refresh(self: &Arc<Self>) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let _ = this.refresh().await;
        });
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
