//! Job application model.
//!
//! The list endpoint joins `applications` against `jobs` so the candidate's
//! view can show the posting title without a second round trip;
//! [`ApplicationRow`] matches that joined projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Joined application row as selected by the list query.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl ApplicationRow {
    pub fn to_info(&self) -> ApplicationInfo {
        ApplicationInfo {
            id: self.id.to_string(),
            job_title: self.job_title.clone(),
            company: self.company.clone(),
            status: self.status.clone(),
            applied_at: self.applied_at.to_rfc3339(),
        }
    }
}

/// Application as shown in the candidate's "my applications" list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationInfo {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub applied_at: String,
}
