//! Page cursor ownership and change notification.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::entities::{FIRST_PAGE, MAX_LIMIT, PageQuery};
use crate::error::ValidationError;

/// Owns the current [`PageQuery`] and publishes every change.
///
/// The controller never fetches. Observers subscribe with [`Self::subscribe`] and react to
/// changes; [`crate::application::services::ListSyncController`] is the one that refetches.
///
/// A mutation that leaves the query unchanged publishes nothing, so observers never see
/// redundant refetch triggers.
pub struct PaginationController {
    query: watch::Sender<PageQuery>,
}

impl PaginationController {
    /// Creates a controller positioned at `initial`.
    pub fn new(initial: PageQuery) -> Self {
        let (query, _) = watch::channel(initial);
        Self { query }
    }

    /// Returns the current query.
    pub fn query(&self) -> PageQuery {
        *self.query.borrow()
    }

    pub fn page(&self) -> u32 {
        self.query().page
    }

    pub fn limit(&self) -> u32 {
        self.query().limit
    }

    /// Subscribes to query changes.
    ///
    /// The returned receiver treats the current value as already seen.
    pub fn subscribe(&self) -> watch::Receiver<PageQuery> {
        self.query.subscribe()
    }

    /// Moves to `page`.
    ///
    /// Page 0 does not exist and is clamped to the first page.
    ///
    /// Returns true if the query changed.
    pub fn set_page(&self, page: u32) -> bool {
        let page = if page < FIRST_PAGE {
            warn!(requested = page, "Page numbers start at 1, clamping");
            FIRST_PAGE
        } else {
            page
        };

        let changed = self.query.send_if_modified(|query| {
            if query.page == page {
                return false;
            }
            *query = query.with_page(page);
            true
        });

        if changed {
            debug!(page, "Page changed");
        }
        changed
    }

    /// Changes the page size and returns to the first page.
    ///
    /// Returns true if the query changed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLimit`] if `limit` is 0 or above [`MAX_LIMIT`].
    pub fn set_limit(&self, limit: u32) -> Result<bool, ValidationError> {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(ValidationError::InvalidLimit {
                max: MAX_LIMIT,
                actual: limit,
            });
        }

        let changed = self.query.send_if_modified(|query| {
            let next = query.with_limit(limit);
            if *query == next {
                return false;
            }
            *query = next;
            true
        });

        if changed {
            debug!(limit, "Page size changed, back to first page");
        }
        Ok(changed)
    }

    /// Advances one page. Whether a next page exists is for the caller to decide.
    pub fn next_page(&self) -> bool {
        self.set_page(self.page().saturating_add(1))
    }

    /// Goes back one page; does nothing on the first page.
    pub fn previous_page(&self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.set_page(self.page() - 1)
    }

    /// A previous page exists on every page but the first.
    pub fn has_previous(&self) -> bool {
        !self.query().is_first()
    }

    /// Derived "next" availability for `query`: only a full page suggests more data.
    ///
    /// The service reports no total count, so a page of exactly `limit` entries is the
    /// only hint that another page may follow.
    pub fn has_next(query: PageQuery, last_page_len: usize) -> bool {
        last_page_len == query.limit as usize
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(PageQuery::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let pagination = PaginationController::new(PageQuery::new(1, 10));
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 10);
        assert!(!pagination.has_previous());
    }

    #[test]
    fn test_set_page() {
        let pagination = PaginationController::default();
        assert!(pagination.set_page(4));
        assert_eq!(pagination.query(), PageQuery::new(4, 10));
        assert!(pagination.has_previous());
    }

    #[test]
    fn test_set_same_page_is_not_a_change() {
        let pagination = PaginationController::default();
        assert!(!pagination.set_page(1));
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let pagination = PaginationController::new(PageQuery::new(3, 10));
        assert!(pagination.set_page(0));
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_set_limit_resets_page_from_any_page() {
        for page in 1..=6 {
            let pagination = PaginationController::new(PageQuery::new(page, 10));
            pagination.set_limit(5).unwrap();
            assert_eq!(pagination.query(), PageQuery::new(1, 5));
        }
    }

    #[test]
    fn test_set_same_limit_on_later_page_still_resets() {
        let pagination = PaginationController::new(PageQuery::new(3, 10));
        assert!(pagination.set_limit(10).unwrap());
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_set_same_limit_on_first_page_is_not_a_change() {
        let pagination = PaginationController::default();
        assert!(!pagination.set_limit(10).unwrap());
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let pagination = PaginationController::default();
        assert_eq!(
            pagination.set_limit(0),
            Err(ValidationError::InvalidLimit { max: 100, actual: 0 })
        );
        assert_eq!(pagination.limit(), 10);
    }

    #[test]
    fn test_limit_above_maximum_is_rejected() {
        let pagination = PaginationController::new(PageQuery::new(2, 10));
        assert!(pagination.set_limit(MAX_LIMIT).unwrap());
        assert_eq!(
            pagination.set_limit(MAX_LIMIT + 1),
            Err(ValidationError::InvalidLimit {
                max: MAX_LIMIT,
                actual: MAX_LIMIT + 1
            })
        );
        assert_eq!(pagination.query(), PageQuery::new(1, MAX_LIMIT));
    }

    #[test]
    fn test_previous_is_noop_on_first_page() {
        let pagination = PaginationController::default();
        assert!(!pagination.previous_page());
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_next_then_previous() {
        let pagination = PaginationController::default();
        assert!(pagination.next_page());
        assert_eq!(pagination.page(), 2);
        assert!(pagination.previous_page());
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_has_next_requires_full_page() {
        let query = PageQuery::new(1, 10);
        assert!(PaginationController::has_next(query, 10));
        assert!(!PaginationController::has_next(query, 3));
        assert!(!PaginationController::has_next(query, 0));
    }

    #[test]
    fn test_changes_are_published() {
        let pagination = PaginationController::default();
        let mut rx = pagination.subscribe();
        assert!(!rx.has_changed().unwrap());

        pagination.set_page(2);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), PageQuery::new(2, 10));

        pagination.set_page(2);
        assert!(!rx.has_changed().unwrap());
    }
}
