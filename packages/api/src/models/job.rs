//! Job posting model and its listing projection.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full job posting row from the `jobs` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub open: bool,
    pub posted_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Job {
    /// Convert to the listing projection sent to the client.
    pub fn to_summary(&self) -> JobSummary {
        JobSummary {
            id: self.id.to_string(),
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            employment_type: self.employment_type.clone(),
            posted_at: self.posted_at.to_rfc3339(),
        }
    }
}

/// Job posting as shown in list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub posted_at: String,
}
