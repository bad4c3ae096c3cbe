//! Session status indicator for the navbar.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::icons::{FaUser, FaUserSlash};
use crate::Icon;

/// A small badge that shows who is signed in.
///
/// - **Checking**: ellipsis while the mount-time validation is in flight
/// - **Signed in**: user icon plus display name
/// - **Signed out**: gray slashed-user icon
#[component]
pub fn SessionBadge() -> Element {
    let auth = use_auth();
    let state = auth();

    if state.is_loading() {
        return rsx! {
            span {
                class: "session-badge session-badge--checking",
                title: "Checking session",
                "..."
            }
        };
    }

    match &state.user {
        Some(user) => rsx! {
            span {
                class: "session-badge session-badge--signed-in",
                title: "{user.email}",
                Icon { icon: FaUser, width: 14, height: 14 }
                " {user.display_name()}"
            }
        },
        None => rsx! {
            span {
                class: "session-badge session-badge--signed-out",
                title: "Signed out",
                Icon { icon: FaUserSlash, width: 14, height: 14 }
            }
        },
    }
}
