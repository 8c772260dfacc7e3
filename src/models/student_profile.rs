use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job_posting::JobType;

/// A student's declared matching preferences. Every set may be empty; an
/// incomplete profile yields zero-score recommendations, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentProfile {
    pub student_id: Uuid,
    pub preferred_job_types: Vec<JobType>,
    pub preferred_industries: Vec<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StudentProfile {
    /// First-access default: a profile with no preferences at all.
    pub fn empty(student_id: Uuid) -> Self {
        Self {
            student_id,
            preferred_job_types: Vec::new(),
            preferred_industries: Vec::new(),
            skills: Vec::new(),
            interests: Vec::new(),
            updated_at: None,
        }
    }
}
