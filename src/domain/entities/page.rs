//! Pagination cursor and page payload.

use super::short_url::ShortUrlEntry;

/// Page shown on startup.
pub const FIRST_PAGE: u32 = 1;

/// Page size used when none is configured.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size the client will ask for.
pub const MAX_LIMIT: u32 = 100;

/// Cursor into the remote list.
///
/// `page` is 1-indexed. Both fields are always at least 1; constructors clamp zero up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl PageQuery {
    /// Creates a query, clamping zero values to 1.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            limit: limit.max(1),
        }
    }

    /// First page with the given page size.
    pub fn first(limit: u32) -> Self {
        Self::new(FIRST_PAGE, limit)
    }

    /// Same page size, different page.
    pub fn with_page(self, page: u32) -> Self {
        Self::new(page, self.limit)
    }

    /// Changing the page size always returns to the first page, so the cursor never points
    /// past the new page boundary.
    pub fn with_limit(self, limit: u32) -> Self {
        Self::first(limit)
    }

    /// Returns true when this is the first page.
    pub fn is_first(&self) -> bool {
        self.page == FIRST_PAGE
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first(DEFAULT_LIMIT)
    }
}

/// One page of entries in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    pub entries: Vec<ShortUrlEntry>,
}

impl PageResult {
    pub fn new(entries: Vec<ShortUrlEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}
