use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::application::Application;
use crate::models::job_posting::JobPosting;
use crate::models::student_profile::StudentProfile;

/// Scoring weights, in decreasing order of confidence: a structured
/// preference match counts for more than a free-text interest hit.
const WEIGHT_JOB_TYPE: i32 = 5;
const WEIGHT_INDUSTRY: i32 = 4;
const WEIGHT_SKILL: i32 = 3;
const WEIGHT_INTEREST: i32 = 2;

/// Maximum number of recommendations surfaced on the dashboard.
const MAX_RESULTS: usize = 20;

/// The structured signals behind a score, recomputable for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReasons {
    pub job_type_matched: bool,
    pub industry_matched: bool,
    pub matched_skills: Vec<String>,
}

/// A posting annotated with its relevance score. Derived output only,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub job: JobPosting,
    pub score: i32,
    pub reasons: MatchReasons,
}

pub struct RecommendationService;

impl RecommendationService {
    /// Ranks the open catalog against a student's profile.
    ///
    /// Jobs the student already applied to are excluded up front, jobs with
    /// no matching signal at all (score 0) are dropped, and the rest come
    /// back sorted by score descending, capped at 20. Ties break by
    /// `created_at` descending so equally scored postings surface newest
    /// first.
    pub fn rank(
        jobs: &[JobPosting],
        profile: &StudentProfile,
        applications: &[Application],
    ) -> Vec<ScoredPosting> {
        let applied: HashSet<_> = applications.iter().map(|a| a.job_id).collect();

        let mut scored: Vec<ScoredPosting> = jobs
            .iter()
            .filter(|job| !applied.contains(&job.id))
            .filter_map(|job| {
                let reasons = Self::match_signals(job, profile);
                let score = Self::score(job, profile, &reasons);
                if score > 0 {
                    Some(ScoredPosting {
                        job: job.clone(),
                        score,
                        reasons,
                    })
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.job.created_at.cmp(&a.job.created_at))
        });
        scored.truncate(MAX_RESULTS);
        scored
    }

    /// Recomputes the structured match signals for a scored posting, using
    /// the same rules `rank` scored it with.
    pub fn explain(scored: &ScoredPosting, profile: &StudentProfile) -> MatchReasons {
        Self::match_signals(&scored.job, profile)
    }

    fn match_signals(job: &JobPosting, profile: &StudentProfile) -> MatchReasons {
        let job_type_matched = profile.preferred_job_types.contains(&job.job_type);
        let industry_matched = profile.preferred_industries.contains(&job.industry);

        // Exact token equality, case-folded the same way interest matching
        // folds. Matched entries keep the posting's original casing.
        let matched_skills = match &job.skills {
            Some(job_skills) => job_skills
                .iter()
                .filter(|js| {
                    let folded = js.to_lowercase();
                    profile.skills.iter().any(|ps| ps.to_lowercase() == folded)
                })
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        MatchReasons {
            job_type_matched,
            industry_matched,
            matched_skills,
        }
    }

    fn score(job: &JobPosting, profile: &StudentProfile, reasons: &MatchReasons) -> i32 {
        let mut score = 0;
        if reasons.job_type_matched {
            score += WEIGHT_JOB_TYPE;
        }
        if reasons.industry_matched {
            score += WEIGHT_INDUSTRY;
        }
        score += WEIGHT_SKILL * reasons.matched_skills.len() as i32;
        score += WEIGHT_INTEREST * Self::interest_hits(job, profile);
        score
    }

    /// Counts profile interests occurring as case-insensitive substrings of
    /// the posting's title, description and industry taken together.
    fn interest_hits(job: &JobPosting, profile: &StudentProfile) -> i32 {
        let haystack = format!("{} {} {}", job.title, job.description, job.industry)
            .to_lowercase();
        profile
            .interests
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty() && haystack.contains(&i.to_lowercase()))
            .count() as i32
    }
}
