use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::job_posting::JobPosting;

/// A student's bookmark of a posting, joined with the posting itself.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedPosting {
    pub saved_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub job: JobPosting,
}
