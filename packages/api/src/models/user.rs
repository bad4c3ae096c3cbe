//! # User model — accounts and their client-safe projection
//!
//! Two representations of a portal account:
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, loaded via [`sqlx::FromRow`]:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email` / `name` — profile fields.
//! - `role` — `"candidate"`, `"recruiter"`, or `"admin"`; drives which
//!   dashboard the user lands on and whether recruiter management is allowed.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! [`User::to_info`] projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! The subset that crosses the server/client boundary through server
//! functions. It is `Serialize + Deserialize + PartialEq`, omits the audit
//! timestamps, and converts the `Uuid` to a `String` so it works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Role of an admin account: may manage recruiters.
pub const ROLE_ADMIN: &str = "admin";
/// Role of a recruiter account.
pub const ROLE_RECRUITER: &str = "recruiter";

/// Full account record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Account information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn is_recruiter(&self) -> bool {
        self.role == ROLE_RECRUITER
    }
}
