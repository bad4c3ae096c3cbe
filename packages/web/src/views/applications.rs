//! Candidate's "my applications" view, session-gated and paginated.

use dioxus::prelude::*;

use ui::{
    use_paged_list, Navbar, Pagination, RequireAuth, SessionBadge, SkeletonTable, StatusBadge,
};

#[component]
pub fn Applications() -> Element {
    rsx! {
        Navbar {
            SessionBadge {}
        }

        RequireAuth {
            ApplicationsList {}
        }
    }
}

/// The list itself lives behind the guard so its first fetch only fires once
/// the session verdict is in.
#[component]
fn ApplicationsList() -> Element {
    let list = use_paged_list(|page| api::list_applications(page));
    let paged = (list.state)();
    let controls = paged.controls();

    rsx! {
        div {
            class: "page applications-page",
            h1 { "My applications" }

            if let Some(error) = paged.error.as_ref() {
                div {
                    class: "error-banner",
                    "Could not load applications: {error} "
                    button {
                        class: "retry-btn",
                        onclick: move |_| list.retry(),
                        "Retry"
                    }
                }
            }

            if paged.is_initial_load() {
                SkeletonTable { rows: 5, columns: 4 }
            } else if paged.items.is_empty() && !paged.loading {
                p { class: "empty-state", "You have not applied to anything yet." }
            } else {
                table {
                    class: "list-table",
                    thead {
                        tr {
                            th { "Position" }
                            th { "Company" }
                            th { "Status" }
                            th { "Applied" }
                        }
                    }
                    tbody {
                        for app in paged.items.iter() {
                            tr {
                                key: "{app.id}",
                                td { "{app.job_title}" }
                                td { "{app.company}" }
                                td {
                                    StatusBadge { status: app.status.clone() }
                                }
                                td { "{app.applied_at}" }
                            }
                        }
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
