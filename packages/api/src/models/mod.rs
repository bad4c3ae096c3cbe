//! Data models for the application.

mod application;
mod job;
mod user;

#[cfg(feature = "server")]
pub use application::ApplicationRow;
pub use application::ApplicationInfo;
#[cfg(feature = "server")]
pub use job::Job;
pub use job::JobSummary;
#[cfg(feature = "server")]
pub use user::User;
pub use user::{UserInfo, ROLE_ADMIN, ROLE_RECRUITER};
