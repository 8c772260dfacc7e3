use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "job_type", rename_all = "snake_case")]
pub enum JobType {
    Internship,
    PartTime,
    FullTime,
}

impl sqlx::postgres::PgHasArrayType for JobType {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_job_type")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub job_type: JobType,
    pub industry: String,
    pub description: String,
    pub skills: Option<Vec<String>>,
    pub salary_from: Option<Decimal>,
    pub salary_to: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}
