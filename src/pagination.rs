//! Pagination State
//!
//! Cursor and in-flight-guard bookkeeping for the scroll feed. All
//! transitions are explicit methods on one struct, so the rule that at
//! most one page fetch is ever outstanding lives in a single place.

/// First page offset for a fresh session
pub const INITIAL_CURSOR: u64 = 0;
/// Items per page
pub const PAGE_LIMIT: u32 = 20;
/// Server-side sort key, fixed for the session
pub const SORT_FIELD: &str = "title";
/// Server-side sort direction, fixed for the session
pub const SORT_ORDER: &str = "asc";

/// Cursor plus in-flight guard for the scroll feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    cursor: Option<u64>,
    fetching: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            cursor: Some(INITIAL_CURSOR),
            fetching: false,
        }
    }

    /// Offset of the next page, `None` once the feed is exhausted
    pub fn cursor(&self) -> Option<u64> {
        self.cursor
    }

    /// Whether a page fetch is currently outstanding
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Whether the server has reported the end of the collection
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Claim the next page fetch
    ///
    /// Returns the cursor to request, or `None` when the feed is exhausted
    /// or a fetch is already outstanding. The check-then-set runs to
    /// completion on the event loop, so a burst of callers claims at most
    /// one request. Every claim must be settled with exactly one of
    /// `complete` or `release`.
    pub fn try_begin(&mut self) -> Option<u64> {
        if self.fetching {
            return None;
        }
        let cursor = self.cursor?;
        self.fetching = true;
        Some(cursor)
    }

    /// Successful fetch: adopt the server's next cursor and drop the guard
    pub fn complete(&mut self, next_cursor: Option<u64>) {
        self.cursor = next_cursor;
        self.fetching = false;
    }

    /// Failed fetch: drop the guard, keep the cursor so the page can be retried
    pub fn release(&mut self) {
        self.fetching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_claims_the_current_cursor() {
        let mut pager = Pagination::new();
        assert_eq!(pager.try_begin(), Some(INITIAL_CURSOR));
        assert!(pager.is_fetching());
    }

    #[test]
    fn second_begin_is_rejected_while_a_fetch_is_outstanding() {
        let mut pager = Pagination::new();
        assert_eq!(pager.try_begin(), Some(0));
        // Rapid repeated triggers while the first request is in flight
        assert_eq!(pager.try_begin(), None);
        assert_eq!(pager.try_begin(), None);
        pager.complete(Some(20));
        assert_eq!(pager.try_begin(), Some(20));
    }

    #[test]
    fn exhausted_feed_never_begins() {
        let mut pager = Pagination::new();
        pager.try_begin();
        pager.complete(None);
        assert!(pager.is_exhausted());
        assert_eq!(pager.try_begin(), None);
        assert!(!pager.is_fetching());
    }

    #[test]
    fn release_keeps_the_cursor_for_a_manual_retry() {
        let mut pager = Pagination::new();
        pager.try_begin();
        pager.complete(Some(20));

        assert_eq!(pager.try_begin(), Some(20));
        pager.release();
        assert!(!pager.is_fetching());
        // Same page is claimable again after the failure
        assert_eq!(pager.try_begin(), Some(20));
    }

    #[test]
    fn cursor_walks_to_exhaustion() {
        let mut pager = Pagination::new();
        let mut claimed = Vec::new();
        for next in [Some(20), Some(40), None] {
            claimed.push(pager.try_begin());
            pager.complete(next);
        }
        assert_eq!(claimed, vec![Some(0), Some(20), Some(40)]);
        assert_eq!(pager.try_begin(), None);
    }
}
