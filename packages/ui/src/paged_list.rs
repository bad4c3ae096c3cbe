//! Paginated list hook.
//!
//! [`use_paged_list`] wires a [`store::Paged`] slice to a fetch function and
//! the component lifecycle: it issues the initial page-1 request on mount and
//! hands the view a [`PagedList`] for navigation. All race handling lives in
//! the slice; the hook just tags each spawned fetch with its ticket and feeds
//! the outcome back through [`store::Paged::resolve`], so a response for a
//! superseded request is dropped on arrival. In-flight requests are never
//! cancelled.
//!
//! The slice is owned by the view that called the hook and is discarded on
//! unmount; re-entering the view starts from a fresh fetch.

use dioxus::prelude::*;
use store::{PageControls, PageData, Paged};

/// Handle for one paginated resource, returned by [`use_paged_list`].
pub struct PagedList<T: 'static> {
    pub state: Signal<Paged<T>>,
    goto: Callback<i64>,
}

impl<T> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for PagedList<T> {}

impl<T> PagedList<T> {
    /// Navigate to page `n`, clamped into the valid range. Safe to call
    /// rapidly while fetches are outstanding; the latest call wins.
    pub fn goto_page(&self, n: i64) {
        self.goto.call(n);
    }

    pub fn prev(&self) {
        let current = self.state.peek().current_page;
        self.goto.call(i64::from(current) - 1);
    }

    pub fn next(&self) {
        let current = self.state.peek().current_page;
        self.goto.call(i64::from(current) + 1);
    }

    /// Re-request the current page, e.g. from a retry affordance.
    pub fn retry(&self) {
        let current = self.state.peek().current_page;
        self.goto.call(i64::from(current));
    }

    pub fn controls(&self) -> PageControls {
        self.state.read().controls()
    }
}

/// Create a paginated list bound to `fetch`, which loads one 1-based page.
pub fn use_paged_list<T, F, Fut>(fetch: F) -> PagedList<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(u32) -> Fut + Clone + 'static,
    Fut: std::future::Future<Output = Result<PageData<T>, ServerFnError>> + 'static,
{
    let mut state = use_signal(Paged::<T>::default);

    let goto = use_callback(move |n: i64| {
        let ticket = state.write().begin_fetch(n);
        let fetch = fetch.clone();
        spawn(async move {
            let result = fetch(ticket.page).await.map_err(|e| e.to_string());
            state.write().resolve(ticket.id, result);
        });
    });

    // Initial load, once per mount.
    use_effect(move || {
        goto.call(1);
    });

    PagedList { state, goto }
}
