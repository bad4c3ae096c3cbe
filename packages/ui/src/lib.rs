//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LoginButton, LogoutButton, RequireAuth};

mod paged_list;
pub use paged_list::{use_paged_list, PagedList};

mod pagination;
pub use pagination::Pagination;

mod skeleton;
pub use skeleton::SkeletonTable;

mod navbar;
pub use navbar::Navbar;

mod session_badge;
pub use session_badge::SessionBadge;

mod cards;
pub use cards::{JobCard, StatusBadge};
