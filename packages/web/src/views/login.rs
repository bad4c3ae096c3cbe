//! Login page: hands the browser off to the external identity provider.

use dioxus::prelude::*;

use ui::{use_auth, LoginButton};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    // Already signed in: route to the fitting dashboard.
    if !state.is_loading() {
        if let Some(user) = state.user.as_ref() {
            let target = if user.is_recruiter() || user.is_admin() {
                Route::RecruiterDashboard {}
            } else {
                Route::CandidateDashboard {}
            };
            nav.replace(target);
            return rsx! {};
        }
    }

    rsx! {
        div {
            class: "login-container",
            h1 { "TalentGate" }
            p { "Sign in to manage jobs and applications:" }

            LoginButton {
                label: "Continue with SSO",
                class: "login-btn",
            }
        }
    }
}
