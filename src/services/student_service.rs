use crate::error::Result;
use crate::models::application::Application;
use crate::models::saved_posting::SavedPosting;
use crate::models::student_profile::StudentProfile;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct StudentService {
    pool: PgPool,
}

impl StudentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A student without a stored profile gets the empty default rather
    /// than an error.
    pub async fn get_profile(&self, student_id: Uuid) -> Result<StudentProfile> {
        let profile = sqlx::query_as::<_, StudentProfile>(
            r#"
            SELECT student_id, preferred_job_types, preferred_industries,
                   skills, interests, updated_at
            FROM student_profiles
            WHERE student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile.unwrap_or_else(|| StudentProfile::empty(student_id)))
    }

    pub async fn list_applications(&self, student_id: Uuid) -> Result<Vec<Application>> {
        let items = sqlx::query_as::<_, Application>(
            r#"
            SELECT id, student_id, job_id, status, created_at
            FROM applications
            WHERE student_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list_saved_postings(&self, student_id: Uuid) -> Result<Vec<SavedPosting>> {
        let items = sqlx::query_as::<_, SavedPosting>(
            r#"
            SELECT sp.saved_at,
                   jp.id, jp.title, jp.company, jp.job_type, jp.industry,
                   jp.description, jp.skills, jp.salary_from, jp.salary_to,
                   jp.deadline, jp.created_at
            FROM saved_postings sp
            JOIN job_postings jp ON jp.id = sp.job_id
            WHERE sp.student_id = $1
            ORDER BY sp.saved_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
