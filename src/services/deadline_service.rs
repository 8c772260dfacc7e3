use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::job_posting::JobPosting;
use crate::models::saved_posting::SavedPosting;

/// Fixed look-ahead window: today through one week out, inclusive.
const WINDOW_DAYS: i64 = 7;

/// 5 rows by 7 columns, anchored to the current week.
const GRID_DAYS: usize = 35;

/// A saved posting annotated with whole days remaining until its deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineEntry {
    pub job: JobPosting,
    pub days_until_deadline: i64,
}

pub struct DeadlineService;

impl DeadlineService {
    /// Saved postings whose deadline falls within the next 7 days, soonest
    /// first. Postings with no deadline, past deadlines, or deadlines beyond
    /// the window are dropped; a posting saved more than once yields one
    /// entry.
    pub fn upcoming_deadlines(saved: &[SavedPosting], today: NaiveDate) -> Vec<DeadlineEntry> {
        let mut seen = HashSet::new();
        let mut entries: Vec<DeadlineEntry> = saved
            .iter()
            .filter_map(|sp| {
                let deadline = sp.job.deadline?;
                // NaiveDate subtraction is already midnight-to-midnight, so
                // this is a whole-day count independent of time-of-day.
                let days_until = (deadline - today).num_days();
                if !(0..=WINDOW_DAYS).contains(&days_until) {
                    return None;
                }
                if !seen.insert(sp.job.id) {
                    return None;
                }
                Some(DeadlineEntry {
                    job: sp.job.clone(),
                    days_until_deadline: days_until,
                })
            })
            .collect();

        entries.sort_by_key(|e| e.job.deadline);
        entries
    }

    /// 35 consecutive dates starting at the Sunday on or before `today`,
    /// a month-style grid that ignores actual month boundaries.
    pub fn build_calendar_grid(today: NaiveDate) -> Vec<NaiveDate> {
        let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
        (0..GRID_DAYS as i64)
            .map(|offset| start + Duration::days(offset))
            .collect()
    }

    /// `None` selects the "all upcoming" view; a date keeps only entries
    /// whose deadline falls on that calendar day.
    pub fn filter_by_date(entries: &[DeadlineEntry], selected: Option<NaiveDate>) -> Vec<DeadlineEntry> {
        match selected {
            None => entries.to_vec(),
            Some(date) => entries
                .iter()
                .filter(|e| e.job.deadline == Some(date))
                .cloned()
                .collect(),
        }
    }

    pub fn has_deadline_on(entries: &[DeadlineEntry], date: NaiveDate) -> bool {
        entries.iter().any(|e| e.job.deadline == Some(date))
    }

    pub fn is_past_date(date: NaiveDate, today: NaiveDate) -> bool {
        date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_posting::JobType;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn saved(deadline: Option<NaiveDate>) -> SavedPosting {
        SavedPosting {
            saved_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            job: JobPosting {
                id: Uuid::new_v4(),
                title: "Backend Engineer".to_string(),
                company: "Acme".to_string(),
                job_type: JobType::FullTime,
                industry: "Technology".to_string(),
                description: "Build backend services".to_string(),
                skills: None,
                salary_from: None,
                salary_to: None,
                deadline,
                created_at: None,
            },
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_keeps_only_next_seven_days() {
        let today = date(2024, 3, 10);
        let saved_postings = vec![
            saved(Some(date(2024, 3, 12))), // 2 days out, kept
            saved(Some(date(2024, 3, 20))), // 10 days out, dropped
            saved(Some(date(2024, 3, 5))),  // past, dropped
            saved(Some(date(2024, 3, 10))), // today, kept
            saved(Some(date(2024, 3, 17))), // exactly 7 days, kept
            saved(None),                    // no deadline, dropped
        ];

        let entries = DeadlineService::upcoming_deadlines(&saved_postings, today);
        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert!((0..=7).contains(&entry.days_until_deadline));
        }
        // Sorted by deadline ascending.
        assert_eq!(entries[0].days_until_deadline, 0);
        assert_eq!(entries[1].days_until_deadline, 2);
        assert_eq!(entries[2].days_until_deadline, 7);
    }

    #[test]
    fn double_saved_posting_yields_one_entry() {
        let today = date(2024, 3, 10);
        let mut first = saved(Some(date(2024, 3, 12)));
        let second = first.clone();
        first.saved_at = Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap();

        let entries = DeadlineService::upcoming_deadlines(&[first, second], today);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn grid_starts_on_sunday_and_spans_35_days() {
        // 2024-03-13 is a Wednesday; the enclosing week starts 2024-03-10.
        let grid = DeadlineService::build_calendar_grid(date(2024, 3, 13));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0], date(2024, 3, 10));
        assert_eq!(grid[0].weekday(), chrono::Weekday::Sun);
        assert_eq!(grid[34], grid[0] + Duration::days(34));
        for pair in grid.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn grid_on_a_sunday_starts_that_day() {
        let sunday = date(2024, 3, 10);
        let grid = DeadlineService::build_calendar_grid(sunday);
        assert_eq!(grid[0], sunday);
    }

    #[test]
    fn filter_by_date_none_returns_all() {
        let today = date(2024, 3, 10);
        let saved_postings = vec![
            saved(Some(date(2024, 3, 11))),
            saved(Some(date(2024, 3, 12))),
        ];
        let entries = DeadlineService::upcoming_deadlines(&saved_postings, today);

        let all = DeadlineService::filter_by_date(&entries, None);
        assert_eq!(all.len(), entries.len());

        let on_eleventh = DeadlineService::filter_by_date(&entries, Some(date(2024, 3, 11)));
        assert_eq!(on_eleventh.len(), 1);
        assert_eq!(on_eleventh[0].job.deadline, Some(date(2024, 3, 11)));
    }

    #[test]
    fn gating_helpers() {
        let today = date(2024, 3, 10);
        let entries =
            DeadlineService::upcoming_deadlines(&[saved(Some(date(2024, 3, 12)))], today);

        assert!(DeadlineService::has_deadline_on(&entries, date(2024, 3, 12)));
        assert!(!DeadlineService::has_deadline_on(&entries, date(2024, 3, 13)));
        assert!(DeadlineService::is_past_date(date(2024, 3, 9), today));
        assert!(!DeadlineService::is_past_date(today, today));
    }
}
