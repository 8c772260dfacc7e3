use crate::error::Result;
use crate::models::job_posting::JobPosting;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostingService {
    pool: PgPool,
}

impl PostingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The open catalog the recommendation engine ranks against.
    pub async fn list_open(&self) -> Result<Vec<JobPosting>> {
        let items = sqlx::query_as::<_, JobPosting>(
            r#"
            SELECT id, title, company, job_type, industry, description,
                   skills, salary_from, salary_to, deadline, created_at
            FROM job_postings
            WHERE status = 'open'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
