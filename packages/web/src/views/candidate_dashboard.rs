use dioxus::prelude::*;

use ui::{use_auth, LogoutButton, Navbar, RequireAuth, SessionBadge};

use crate::Route;

#[component]
pub fn CandidateDashboard() -> Element {
    rsx! {
        Navbar {
            SessionBadge {}
            LogoutButton { class: "navbar-logout" }
        }

        RequireAuth {
            CandidateHome {}
        }
    }
}

#[component]
fn CandidateHome() -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page dashboard",
            h1 { "Welcome back, {name}" }

            div {
                class: "dashboard-links",
                Link {
                    to: Route::Jobs {},
                    class: "dashboard-card",
                    "Browse open positions"
                }
                Link {
                    to: Route::Applications {},
                    class: "dashboard-card",
                    "Track my applications"
                }
            }
        }
    }
}
