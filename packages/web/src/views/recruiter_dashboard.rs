use dioxus::prelude::*;

use ui::{use_auth, LogoutButton, Navbar, RequireAuth, SessionBadge};

use crate::Route;

#[component]
pub fn RecruiterDashboard() -> Element {
    rsx! {
        Navbar {
            SessionBadge {}
            LogoutButton { class: "navbar-logout" }
        }

        RequireAuth {
            RecruiterHome {}
        }
    }
}

#[component]
fn RecruiterHome() -> Element {
    let auth = use_auth();
    let state = auth();
    let name = state
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    let is_admin = state.user.as_ref().is_some_and(|u| u.is_admin());

    rsx! {
        div {
            class: "page dashboard",
            h1 { "Welcome back, {name}" }

            div {
                class: "dashboard-links",
                Link {
                    to: Route::Jobs {},
                    class: "dashboard-card",
                    "Review the job board"
                }
                if is_admin {
                    Link {
                        to: Route::ManageRecruiters {},
                        class: "dashboard-card",
                        "Manage recruiters"
                    }
                }
            }
        }
    }
}
