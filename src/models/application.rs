use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub student_id: Uuid,
    pub job_id: Uuid,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}
