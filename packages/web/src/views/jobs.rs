//! Public job board: a paginated list of open positions.

use dioxus::prelude::*;

use ui::{use_paged_list, JobCard, Navbar, Pagination, SessionBadge, SkeletonTable};

#[component]
pub fn Jobs() -> Element {
    let list = use_paged_list(|page| api::list_jobs(page));
    let paged = (list.state)();
    let controls = paged.controls();

    rsx! {
        Navbar {
            SessionBadge {}
        }

        div {
            class: "page jobs-page",
            h1 { "Open positions" }

            if let Some(error) = paged.error.as_ref() {
                div {
                    class: "error-banner",
                    "Could not load jobs: {error} "
                    button {
                        class: "retry-btn",
                        onclick: move |_| list.retry(),
                        "Retry"
                    }
                }
            }

            if paged.is_initial_load() {
                SkeletonTable { rows: 5, columns: 3 }
            } else if paged.items.is_empty() && !paged.loading {
                p { class: "empty-state", "No open positions right now." }
            } else {
                div {
                    class: "job-list",
                    for job in paged.items.iter() {
                        JobCard { key: "{job.id}", job: job.clone() }
                    }
                }
            }

            Pagination {
                controls: controls,
                on_prev: move |_| list.prev(),
                on_next: move |_| list.next(),
            }
        }
    }
}
