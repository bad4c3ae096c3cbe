//! Admin view for managing recruiter accounts.

use dioxus::prelude::*;

use ui::{
    use_auth, use_paged_list, Navbar, Pagination, RequireAuth, SessionBadge, SkeletonTable,
};

#[component]
pub fn ManageRecruiters() -> Element {
    rsx! {
        Navbar {
            SessionBadge {}
        }

        RequireAuth {
            RecruiterAdminGate {}
        }
    }
}

/// Role check sits between the session guard and the list so the fetch only
/// mounts for admins; everyone else gets a plain message.
#[component]
fn RecruiterAdminGate() -> Element {
    let auth = use_auth();
    let is_admin = auth().user.as_ref().is_some_and(|u| u.is_admin());

    rsx! {
        if is_admin {
            RecruitersList {}
        } else {
            div {
                class: "page",
                p {
                    class: "empty-state",
                    "You need an admin account to manage recruiters."
                }
            }
        }
    }
}

#[component]
fn RecruitersList() -> Element {
    let list = use_paged_list(|page| api::list_recruiters(page));
    let paged = (list.state)();
    let controls = paged.controls();

    rsx! {
        div {
            class: "page recruiters-page",
            h1 { "Manage recruiters" }

            if let Some(error) = paged.error.as_ref() {
                div {
                    class: "error-banner",
                    "Could not load recruiters: {error} "
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
                p { class: "empty-state", "No recruiter accounts yet." }
            } else {
                table {
                    class: "list-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                        }
                    }
                    tbody {
                        for recruiter in paged.items.iter() {
                            tr {
                                key: "{recruiter.id}",
                                td { "{recruiter.display_name()}" }
                                td { "{recruiter.email}" }
                                td { "{recruiter.role}" }
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
