//! # Paged list state — page bookkeeping with stale-response suppression
//!
//! [`Paged`] is the state slice behind every server-backed list view
//! (jobs, applications, recruiter management). It owns the current page
//! number, the fetched rows, and the request bookkeeping that keeps rapid
//! navigation correct when responses arrive out of order.
//!
//! ## Fetch lifecycle
//!
//! | Step | Method | Effect |
//! |------|--------|--------|
//! | Navigate | [`begin_fetch`](Paged::begin_fetch) | Clamps the target page, bumps `request_id`, marks loading, moves `current_page` optimistically, returns a [`PageRequest`] ticket. |
//! | Response | [`resolve`](Paged::resolve) | Applies the result only if the ticket is still the latest; stale tickets are dropped silently. |
//! | Render | [`controls`](Paged::controls) | Pure derivation of prev/next enablement and the "x of y" indicator. |
//!
//! ## Last request wins
//!
//! Responses are not guaranteed to arrive in request order. Each
//! `begin_fetch` increments the monotonically increasing `request_id` and
//! tags the outgoing request with it; `resolve` compares the ticket against
//! the latest id and discards everything else. There is no cancellation of
//! in-flight requests; superseded responses are simply ignored on arrival.
//!
//! ## Optimistic page number
//!
//! `current_page` moves as soon as navigation is requested, before any data
//! arrives, so the pagination controls react immediately. A failed fetch
//! keeps the previously loaded rows and surfaces the error alongside them.

use serde::{Deserialize, Serialize};

/// One page of a server-backed collection, as returned by the list endpoints.
///
/// Reused structurally across every resource kind; a page past the end of the
/// collection carries an empty `items` vec, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

/// Ticket for one outgoing fetch, tagged with the id that must still be
/// current for the response to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    pub page: u32,
}

/// Derived rendering state for the pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Always reads `"current of max(1, total)"`, so an empty collection
    /// shows "1 of 1" rather than "1 of 0".
    pub indicator: String,
}

/// State slice for one paginated resource. Single-writer: owned by the list
/// hook that created it, mutated only through [`begin_fetch`](Self::begin_fetch)
/// and [`resolve`](Self::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub request_id: u64,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            loading: false,
            error: None,
            request_id: 0,
        }
    }
}

impl<T> Paged<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last page that can be navigated to. Floors at 1 so an empty or
    /// not-yet-loaded collection still has a valid page range of `{1}`.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Clamp a requested page into `[1, last_page]`.
    pub fn clamp_page(&self, n: i64) -> u32 {
        n.clamp(1, i64::from(self.last_page())) as u32
    }

    /// Start a fetch for page `n`.
    ///
    /// The page number updates immediately so navigation feels responsive
    /// before the data lands; the returned ticket must accompany the
    /// eventual [`resolve`](Self::resolve) call.
    pub fn begin_fetch(&mut self, n: i64) -> PageRequest {
        let page = self.clamp_page(n);
        self.request_id += 1;
        self.current_page = page;
        self.loading = true;
        PageRequest {
            id: self.request_id,
            page,
        }
    }

    /// Apply a fetch outcome for the given ticket.
    ///
    /// Returns `false` (and changes nothing) when the ticket has been
    /// superseded by a later `begin_fetch`. On success the rows and page
    /// count are replaced; on failure the previous rows stay visible and
    /// only the error field is set.
    pub fn resolve(&mut self, id: u64, result: Result<PageData<T>, String>) -> bool {
        if id != self.request_id {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.items = data.items;
                self.total_pages = data.total_pages;
                self.error = None;
                // The collection may have shrunk underneath us.
                self.current_page = self.current_page.min(self.last_page());
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// True while the very first load is outstanding, i.e. there is nothing
    /// to show yet. Drives the skeleton placeholder instead of a spinner.
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    /// Derive the pagination-control state. Pure; no side effects.
    pub fn controls(&self) -> PageControls {
        PageControls {
            prev_disabled: self.current_page <= 1,
            next_disabled: self.current_page >= self.last_page(),
            indicator: format!("{} of {}", self.current_page, self.last_page()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, total_pages: u32) -> PageData<u32> {
        PageData { items, total_pages }
    }

    #[test]
    fn test_fresh_slice_shows_one_of_one() {
        let paged = Paged::<u32>::new();
        let controls = paged.controls();

        assert_eq!(paged.current_page, 1);
        assert_eq!(controls.indicator, "1 of 1");
        assert!(controls.prev_disabled);
        assert!(controls.next_disabled);
    }

    #[test]
    fn test_clamping_at_both_ends() {
        let mut paged = Paged::<u32>::new();
        let ticket = paged.begin_fetch(1);
        paged.resolve(ticket.id, Ok(page(vec![1, 2], 3)));

        assert_eq!(paged.clamp_page(-5), 1);
        assert_eq!(paged.clamp_page(0), 1);
        assert_eq!(paged.clamp_page(2), 2);
        assert_eq!(paged.clamp_page(99), 3);
    }

    #[test]
    fn test_unknown_total_clamps_to_page_one() {
        let mut paged = Paged::<u32>::new();
        let ticket = paged.begin_fetch(7);

        assert_eq!(ticket.page, 1);
        assert_eq!(paged.current_page, 1);
    }

    #[test]
    fn test_page_number_updates_before_response() {
        let mut paged = Paged::<u32>::new();
        let first = paged.begin_fetch(1);
        paged.resolve(first.id, Ok(page(vec![1], 3)));

        let ticket = paged.begin_fetch(2);
        // Optimistic: navigation is visible while the fetch is outstanding.
        assert_eq!(paged.current_page, 2);
        assert!(paged.loading);
        assert_eq!(ticket.page, 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut paged = Paged::<u32>::new();
        let first = paged.begin_fetch(1);
        paged.resolve(first.id, Ok(page(vec![1], 2)));

        let r1 = paged.begin_fetch(1);
        let r2 = paged.begin_fetch(2);

        // r2 resolves first, then r1 trickles in late.
        assert!(paged.resolve(r2.id, Ok(page(vec![20], 2))));
        assert!(!paged.resolve(r1.id, Ok(page(vec![10], 2))));

        assert_eq!(paged.items, vec![20]);
        assert_eq!(paged.current_page, 2);
        assert!(!paged.loading);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut paged = Paged::<u32>::new();
        let first = paged.begin_fetch(1);
        paged.resolve(first.id, Ok(page(vec![1, 2], 3)));

        let second = paged.begin_fetch(2);
        paged.resolve(second.id, Err("connection reset".to_string()));

        assert_eq!(paged.items, vec![1, 2]);
        assert_eq!(paged.error.as_deref(), Some("connection reset"));
        assert!(!paged.loading);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut paged = Paged::<u32>::new();
        let first = paged.begin_fetch(1);
        paged.resolve(first.id, Err("boom".to_string()));

        let retry = paged.begin_fetch(1);
        paged.resolve(retry.id, Ok(page(vec![5], 1)));

        assert!(paged.error.is_none());
        assert_eq!(paged.items, vec![5]);
    }

    #[test]
    fn test_shrunken_collection_reclamps_current_page() {
        let mut paged = Paged::<u32>::new();
        let first = paged.begin_fetch(1);
        paged.resolve(first.id, Ok(page(vec![1], 5)));

        let ticket = paged.begin_fetch(5);
        // The server now reports fewer pages than we navigated to.
        paged.resolve(ticket.id, Ok(page(vec![], 2)));

        assert_eq!(paged.current_page, 2);
    }

    #[test]
    fn test_controls_enablement_in_the_middle() {
        let mut paged = Paged::<u32>::new();
        let first = paged.begin_fetch(1);
        paged.resolve(first.id, Ok(page(vec![1], 3)));

        let ticket = paged.begin_fetch(2);
        paged.resolve(ticket.id, Ok(page(vec![2], 3)));

        let controls = paged.controls();
        assert!(!controls.prev_disabled);
        assert!(!controls.next_disabled);
        assert_eq!(controls.indicator, "2 of 3");

        let ticket = paged.begin_fetch(3);
        paged.resolve(ticket.id, Ok(page(vec![3], 3)));
        assert!(paged.controls().next_disabled);
    }

    #[test]
    fn test_initial_load_flag() {
        let mut paged = Paged::<u32>::new();
        let ticket = paged.begin_fetch(1);
        assert!(paged.is_initial_load());

        paged.resolve(ticket.id, Ok(page(vec![1], 3)));
        assert!(!paged.is_initial_load());

        // A reload of an already-populated list is not an "initial" load.
        paged.begin_fetch(2);
        assert!(paged.loading);
        assert!(!paged.is_initial_load());
    }

    #[tokio::test]
    async fn test_rapid_navigation_last_request_wins() {
        use std::cell::RefCell;
        use tokio::task::yield_now;

        let state = RefCell::new(Paged::<u32>::new());
        let seed = state.borrow_mut().begin_fetch(1);
        state
            .borrow_mut()
            .resolve(seed.id, Ok(page(vec![10], 3)));

        // Click 1 -> 2 -> 3 before anything returns.
        let t1 = state.borrow_mut().begin_fetch(1);
        let t2 = state.borrow_mut().begin_fetch(2);
        let t3 = state.borrow_mut().begin_fetch(3);

        // Responses arrive in reverse order of issue.
        let f3 = async {
            state.borrow_mut().resolve(t3.id, Ok(page(vec![30], 3)));
        };
        let f2 = async {
            yield_now().await;
            state.borrow_mut().resolve(t2.id, Ok(page(vec![20], 3)));
        };
        let f1 = async {
            yield_now().await;
            yield_now().await;
            state.borrow_mut().resolve(t1.id, Ok(page(vec![10], 3)));
        };
        tokio::join!(f3, f2, f1);

        let final_state = state.into_inner();
        assert_eq!(final_state.items, vec![30]);
        assert_eq!(final_state.current_page, 3);
        assert!(!final_state.loading);
        assert!(final_state.error.is_none());
    }
}
