use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::job_posting::{JobPosting, JobType};
use crate::services::deadline_service::DeadlineEntry;
use crate::services::recommendation_service::ScoredPosting;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationItem {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub job_type: JobType,
    pub industry: String,
    pub deadline: Option<NaiveDate>,
    pub match_score: i32,
    pub job_type_matched: bool,
    pub industry_matched: bool,
    pub matched_skills: Vec<String>,
}

impl From<ScoredPosting> for RecommendationItem {
    fn from(scored: ScoredPosting) -> Self {
        Self {
            id: scored.job.id,
            title: scored.job.title,
            company: scored.job.company,
            job_type: scored.job.job_type,
            industry: scored.job.industry,
            deadline: scored.job.deadline,
            match_score: scored.score,
            job_type_matched: scored.reasons.job_type_matched,
            industry_matched: scored.reasons.industry_matched,
            matched_skills: scored.reasons.matched_skills,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationListResponse {
    pub items: Vec<RecommendationItem>,
    pub total: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeadlineQuery {
    /// Calendar day to narrow the board to; absent means "all upcoming".
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeadlineItem {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub deadline: NaiveDate,
    pub days_until_deadline: i64,
}

impl From<DeadlineEntry> for DeadlineItem {
    fn from(entry: DeadlineEntry) -> Self {
        let JobPosting {
            id,
            title,
            company,
            deadline,
            ..
        } = entry.job;
        Self {
            id,
            title,
            company,
            // upcoming_deadlines never emits a deadline-less posting
            deadline: deadline.unwrap_or_default(),
            days_until_deadline: entry.days_until_deadline,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_past: bool,
    pub has_deadline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeadlineBoardResponse {
    pub items: Vec<DeadlineItem>,
    pub calendar: Vec<CalendarDay>,
    pub selected_date: Option<NaiveDate>,
}
