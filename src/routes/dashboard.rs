use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    dto::dashboard_dto::{
        CalendarDay, DeadlineBoardResponse, DeadlineItem, DeadlineQuery,
        RecommendationItem, RecommendationListResponse,
    },
    error::{Error, Result},
    models::saved_posting::SavedPosting,
    services::deadline_service::DeadlineService,
    services::recommendation_service::RecommendationService,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/students/{id}/recommendations",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Ranked job recommendations", body = RecommendationListResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let jobs = state.posting_service.list_open().await?;
    let profile = state.student_service.get_profile(student_id).await?;
    let applications = state.student_service.list_applications(student_id).await?;

    let ranked = RecommendationService::rank(&jobs, &profile, &applications);
    let items: Vec<RecommendationItem> = ranked.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(RecommendationListResponse { items, total }))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}/deadlines",
    params(
        ("id" = Uuid, Path, description = "Student ID"),
        ("date" = Option<String>, Query, description = "Calendar day filter (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Upcoming deadlines and calendar grid", body = DeadlineBoardResponse),
        (status = 400, description = "Selected date is past, off-grid, or has no deadline")
    )
)]
#[axum::debug_handler]
pub async fn get_deadline_board(
    State(state): State<AppState>,
    Path(student_id): Path<Uuid>,
    Query(query): Query<DeadlineQuery>,
) -> Result<impl IntoResponse> {
    let saved = state.student_service.list_saved_postings(student_id).await?;
    let today = Utc::now().date_naive();

    let board = build_deadline_board(&saved, today, query.date)?;
    Ok(Json(board))
}

/// Assembles the deadline board for one student. A selected date must sit on
/// the grid, not be in the past, and carry at least one deadline; anything
/// else is a bad request.
pub fn build_deadline_board(
    saved: &[SavedPosting],
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Result<DeadlineBoardResponse> {
    let entries = DeadlineService::upcoming_deadlines(saved, today);
    let grid = DeadlineService::build_calendar_grid(today);

    if let Some(date) = selected {
        if DeadlineService::is_past_date(date, today)
            || !grid.contains(&date)
            || !DeadlineService::has_deadline_on(&entries, date)
        {
            return Err(Error::BadRequest(format!(
                "Date {} cannot be selected",
                date
            )));
        }
    }

    let calendar: Vec<CalendarDay> = grid
        .iter()
        .map(|&date| CalendarDay {
            date,
            is_past: DeadlineService::is_past_date(date, today),
            has_deadline: DeadlineService::has_deadline_on(&entries, date),
        })
        .collect();

    let items: Vec<DeadlineItem> = DeadlineService::filter_by_date(&entries, selected)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(DeadlineBoardResponse {
        items,
        calendar,
        selected_date: selected,
    })
}
