//! # API crate — shared fullstack server functions for the job portal
//!
//! Every network call the frontends make goes through the Dioxus server
//! functions defined in this file, along with the supporting modules they
//! depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Cookie-backed session resolution and the external sign-in redirect URL |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`error`] | `server` | Typed data-access errors, mapped to `ServerFnError` at the boundary |
//! | [`models`] | — | Database rows (`User`, `Job`, …) and their client-safe projections |
//!
//! ## Server functions exposed here
//!
//! Each public `async fn` is annotated with `#[get(...)]` or `#[post(...)]`
//! and compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP.
//!
//! - **Session**: `validate_session`, `get_login_url`, `logout`
//! - **Paginated lists**: `list_jobs`, `list_applications`, `list_recruiters`
//!
//! The list endpoints take a 1-based page number and return a
//! [`store::PageData`]; a page past the end of the collection yields an empty
//! `items` vec rather than an error, so the client's clamping logic is the
//! only thing deciding what gets requested.

use dioxus::prelude::*;

pub mod auth;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;

pub use models::{ApplicationInfo, JobSummary, UserInfo};
pub use store::PageData;

/// Rows per page on every list endpoint.
pub const PAGE_SIZE: u32 = 10;

#[cfg(feature = "server")]
fn total_pages(count: i64) -> u32 {
    let size = i64::from(PAGE_SIZE);
    ((count + size - 1) / size).max(0) as u32
}

#[cfg(feature = "server")]
fn page_offset(page: u32) -> i64 {
    i64::from(page.max(1) - 1) * i64::from(PAGE_SIZE)
}

/// Resolve the session to an account or fail with [`error::ApiError::Unauthenticated`].
#[cfg(feature = "server")]
async fn require_user(
    session: &tower_sessions::Session,
) -> Result<models::User, error::ApiError> {
    auth::session_user(session)
        .await?
        .ok_or(error::ApiError::Unauthenticated)
}

/// Like [`require_user`], but additionally demands the admin role.
#[cfg(feature = "server")]
async fn require_admin(
    session: &tower_sessions::Session,
) -> Result<models::User, error::ApiError> {
    let user = require_user(session).await?;
    if user.role != models::ROLE_ADMIN {
        return Err(error::ApiError::Forbidden);
    }
    Ok(user)
}

/// Check whether the stored session still maps to a valid account.
///
/// Returns `Some(user)` for a live session and `None` otherwise. A session
/// whose account has disappeared is flushed server-side before `None` is
/// returned, so the stale cookie credential is cleared in the same round trip.
#[cfg(feature = "server")]
#[get("/api/auth/validate", session: tower_sessions::Session)]
pub async fn validate_session() -> Result<Option<UserInfo>, ServerFnError> {
    let user = auth::session_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/validate")]
pub async fn validate_session() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Get the external identity-provider URL to redirect the browser to.
#[cfg(feature = "server")]
#[get("/api/auth/login")]
pub async fn get_login_url() -> Result<String, ServerFnError> {
    auth::sso_login_url().map_err(ServerFnError::new)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/login")]
pub async fn get_login_url() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// List open job postings, newest first. Public; no session required.
#[cfg(feature = "server")]
#[get("/api/jobs/:page")]
pub async fn list_jobs(page: u32) -> Result<PageData<JobSummary>, ServerFnError> {
    use crate::models::Job;

    let pool = db::pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE open")
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<Job> = sqlx::query_as(
        "SELECT * FROM jobs WHERE open ORDER BY posted_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(i64::from(PAGE_SIZE))
    .bind(page_offset(page))
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(PageData {
        items: rows.iter().map(Job::to_summary).collect(),
        total_pages: total_pages(count),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/jobs/:page")]
pub async fn list_jobs(page: u32) -> Result<PageData<JobSummary>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List the current candidate's applications, newest first.
#[cfg(feature = "server")]
#[get("/api/candidate/applications/:page", session: tower_sessions::Session)]
pub async fn list_applications(page: u32) -> Result<PageData<ApplicationInfo>, ServerFnError> {
    use crate::models::ApplicationRow;

    let user = require_user(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = db::pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM applications WHERE candidate_id = $1")
            .bind(user.id)
            .fetch_one(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ApplicationRow> = sqlx::query_as(
        "SELECT a.id, j.title AS job_title, j.company, a.status, a.applied_at
         FROM applications a
         JOIN jobs j ON j.id = a.job_id
         WHERE a.candidate_id = $1
         ORDER BY a.applied_at DESC
         LIMIT $2 OFFSET $3",
    )
    .bind(user.id)
    .bind(i64::from(PAGE_SIZE))
    .bind(page_offset(page))
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(PageData {
        items: rows.iter().map(ApplicationRow::to_info).collect(),
        total_pages: total_pages(count),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/candidate/applications/:page")]
pub async fn list_applications(page: u32) -> Result<PageData<ApplicationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List recruiter accounts for the admin's management view.
#[cfg(feature = "server")]
#[get("/api/admin/recruiters/:page", session: tower_sessions::Session)]
pub async fn list_recruiters(page: u32) -> Result<PageData<UserInfo>, ServerFnError> {
    use crate::models::{User, ROLE_RECRUITER};

    require_admin(&session)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = db::pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = $1")
        .bind(ROLE_RECRUITER)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<User> = sqlx::query_as(
        "SELECT * FROM users WHERE role = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
    )
    .bind(ROLE_RECRUITER)
    .bind(i64::from(PAGE_SIZE))
    .bind(page_offset(page))
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(PageData {
        items: rows.iter().map(User::to_info).collect(),
        total_pages: total_pages(count),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/recruiters/:page")]
pub async fn list_recruiters(page: u32) -> Result<PageData<UserInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(25), 3);
    }

    #[test]
    fn test_page_offset_is_one_based() {
        assert_eq!(page_offset(0), 0);
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 10);
        assert_eq!(page_offset(4), 30);
    }
}
